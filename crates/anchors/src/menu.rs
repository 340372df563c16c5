//! The anchor menu: an ordered button list with a wrapping cursor.
//!
//! Only a prefix of the list is visible at a time. Select mode shows the
//! first [`ALWAYS_VISIBLE_BUTTONS`]; Create mode shows every button, which
//! adds one button per anchor prefab. The cursor always stays inside the
//! visible prefix.

use bevy::prelude::*;

use crate::config::ALWAYS_VISIBLE_BUTTONS;

/// What a menu button does when submitted or clicked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MenuButton {
    /// Switch between Create and Select mode.
    ToggleMode,
    /// Ask the external loader to load saved anchors.
    LoadAnchors,
    /// Make palette prefab `n` the one the place action spawns.
    AnchorPrefab(usize),
}

/// A menu button was submitted from the controller or clicked in the UI.
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct MenuButtonPressed(pub MenuButton);

/// Cursor movement produced by [`AnchorMenu::navigate`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FocusChange {
    pub from: usize,
    pub to: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnchorMenu {
    buttons: Vec<MenuButton>,
    cursor: usize,
    visible: usize,
    focused: bool,
}

impl AnchorMenu {
    /// A menu with the given buttons, showing only the always-visible prefix.
    pub fn new(buttons: Vec<MenuButton>) -> Self {
        let visible = ALWAYS_VISIBLE_BUTTONS.min(buttons.len());
        Self {
            buttons,
            cursor: 0,
            visible,
            focused: true,
        }
    }

    /// The standard layout: mode toggle, load, then one button per prefab.
    pub fn with_prefabs(prefab_count: usize) -> Self {
        let mut buttons = vec![MenuButton::ToggleMode, MenuButton::LoadAnchors];
        buttons.extend((0..prefab_count).map(MenuButton::AnchorPrefab));
        Self::new(buttons)
    }

    pub fn buttons(&self) -> &[MenuButton] {
        &self.buttons
    }

    pub fn visible_buttons(&self) -> &[MenuButton] {
        &self.buttons[..self.visible]
    }

    pub fn visible_count(&self) -> usize {
        self.visible
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Button under the cursor, regardless of focus.
    pub fn cursor_button(&self) -> Option<MenuButton> {
        self.visible_buttons().get(self.cursor).copied()
    }

    /// Button under the cursor while the menu has focus.
    pub fn focused_button(&self) -> Option<MenuButton> {
        if self.focused {
            self.cursor_button()
        } else {
            None
        }
    }

    pub fn is_focused(&self) -> bool {
        self.focused
    }

    pub fn focus(&mut self) {
        self.focused = true;
    }

    pub fn defocus(&mut self) {
        self.focused = false;
    }

    /// Move the cursor one button forward (`move_next`) or back, wrapping
    /// within the visible buttons.
    pub fn navigate(&mut self, move_next: bool) -> FocusChange {
        let from = self.cursor;
        if self.visible == 0 {
            return FocusChange { from, to: from };
        }

        self.cursor = if move_next {
            (self.cursor + 1) % self.visible
        } else if self.cursor == 0 {
            self.visible - 1
        } else {
            self.cursor - 1
        };

        FocusChange {
            from,
            to: self.cursor,
        }
    }

    /// Put the cursor back on the first button.
    pub fn reset_cursor(&mut self) {
        self.cursor = 0;
    }

    /// Show the first `count` buttons, clamping the cursor onto the last
    /// visible one if it would fall outside.
    pub fn set_visible_count(&mut self, count: usize) {
        self.visible = count.min(self.buttons.len());
        if self.cursor >= self.visible {
            self.cursor = self.visible.saturating_sub(1);
        }
    }

    pub fn show_all(&mut self) {
        self.set_visible_count(self.buttons.len());
    }

    pub fn show_always_visible(&mut self) {
        self.set_visible_count(ALWAYS_VISIBLE_BUTTONS);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn menu() -> AnchorMenu {
        AnchorMenu::with_prefabs(3)
    }

    #[test]
    fn test_layout_with_prefabs() {
        let menu = menu();
        assert_eq!(
            menu.buttons(),
            &[
                MenuButton::ToggleMode,
                MenuButton::LoadAnchors,
                MenuButton::AnchorPrefab(0),
                MenuButton::AnchorPrefab(1),
                MenuButton::AnchorPrefab(2),
            ]
        );
        assert_eq!(menu.visible_count(), 2);
        assert_eq!(menu.cursor(), 0);
        assert!(menu.is_focused());
    }

    #[test]
    fn test_next_from_last_visible_wraps_to_zero() {
        let mut menu = menu();
        menu.navigate(true);
        assert_eq!(menu.cursor(), 1);
        let change = menu.navigate(true);
        assert_eq!(change, FocusChange { from: 1, to: 0 });
    }

    #[test]
    fn test_previous_from_zero_wraps_to_last_visible() {
        let mut menu = menu();
        let change = menu.navigate(false);
        assert_eq!(change, FocusChange { from: 0, to: 1 });

        menu.show_all();
        menu.reset_cursor();
        menu.navigate(false);
        assert_eq!(menu.cursor(), 4);
    }

    #[test]
    fn test_cursor_never_leaves_visible_range() {
        let mut menu = menu();
        for step in 0..23 {
            menu.navigate(step % 3 != 0);
            assert!(menu.cursor() < menu.visible_count());
        }
        menu.show_all();
        for step in 0..23 {
            menu.navigate(step % 4 == 0);
            assert!(menu.cursor() < menu.visible_count());
        }
    }

    #[test]
    fn test_shrinking_visible_count_clamps_cursor() {
        let mut menu = menu();
        menu.show_all();
        menu.navigate(false);
        assert_eq!(menu.cursor(), 4);
        menu.show_always_visible();
        assert_eq!(menu.cursor(), 1);
        assert_eq!(menu.cursor_button(), Some(MenuButton::LoadAnchors));
    }

    #[test]
    fn test_focused_button_requires_focus() {
        let mut menu = menu();
        assert_eq!(menu.focused_button(), Some(MenuButton::ToggleMode));
        menu.defocus();
        assert_eq!(menu.focused_button(), None);
        assert_eq!(menu.cursor_button(), Some(MenuButton::ToggleMode));
    }

    #[test]
    fn test_empty_menu_navigation_is_a_no_op() {
        let mut menu = AnchorMenu::new(Vec::new());
        assert_eq!(menu.navigate(true), FocusChange { from: 0, to: 0 });
        assert_eq!(menu.cursor_button(), None);
    }
}
