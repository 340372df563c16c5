//! The mode controller: mode, bound primary action, hover/selection
//! references and the anchor menu.
//!
//! [`ModeController`] is a plain resource inserted once by
//! [`AnchorsPlugin`](crate::AnchorsPlugin) and lives as long as the app.
//! Every operation is total: missing references are no-ops. Operations that
//! change hover or selection return the [`AnchorEvent`]s describing the
//! change so the calling system can publish them.

use bevy::prelude::*;

use crate::anchor::AnchorEvent;
use crate::menu::{AnchorMenu, FocusChange, MenuButton};
use crate::mode::{AnchorMode, PrimaryAction};
use crate::palette::AnchorPalette;

#[derive(Resource, Debug, Clone, PartialEq)]
pub struct ModeController {
    mode: AnchorMode,
    primary_action: PrimaryAction,
    hovered: Option<Entity>,
    selected: Option<Entity>,
    menu: AnchorMenu,
}

impl FromWorld for ModeController {
    fn from_world(world: &mut World) -> Self {
        let prefab_count = world
            .get_resource::<AnchorPalette>()
            .map_or(0, AnchorPalette::len);
        Self::new(AnchorMenu::with_prefabs(prefab_count))
    }
}

impl ModeController {
    /// A controller in Select mode with no action bound. Call [`start`](Self::start)
    /// before dispatching input.
    pub fn new(menu: AnchorMenu) -> Self {
        Self {
            mode: AnchorMode::Select,
            primary_action: PrimaryAction::None,
            hovered: None,
            selected: None,
            menu,
        }
    }

    // -------------------------------------------------------------------------
    // Accessors
    // -------------------------------------------------------------------------

    pub fn mode(&self) -> AnchorMode {
        self.mode
    }

    pub fn primary_action(&self) -> PrimaryAction {
        self.primary_action
    }

    pub fn hovered(&self) -> Option<Entity> {
        self.hovered
    }

    pub fn selected(&self) -> Option<Entity> {
        self.selected
    }

    pub fn menu(&self) -> &AnchorMenu {
        &self.menu
    }

    pub fn placement_preview_active(&self) -> bool {
        self.mode == AnchorMode::Create
    }

    pub fn ray_line_active(&self) -> bool {
        self.mode == AnchorMode::Select
    }

    /// Whether `entity` is the hovered or the selected anchor.
    pub fn references(&self, entity: Entity) -> bool {
        self.hovered == Some(entity) || self.selected == Some(entity)
    }

    // -------------------------------------------------------------------------
    // Mode handling
    // -------------------------------------------------------------------------

    /// Enter Select mode with the Select action bound and the menu focused on
    /// its first button.
    pub fn start(&mut self) {
        self.mode = AnchorMode::Select;
        self.primary_action = PrimaryAction::for_mode(self.mode);
        self.menu.show_always_visible();
        self.menu.reset_cursor();
        self.menu.focus();
    }

    /// Flip between Select and Create.
    ///
    /// Entering Create binds Place and shows every menu button. Entering
    /// Select binds Select and hides the prefab buttons. Leaving Select
    /// drops the hover since the ray is no longer cast.
    pub fn toggle_mode(&mut self) -> Vec<AnchorEvent> {
        let mut events = Vec::new();
        self.mode = self.mode.toggled();
        self.primary_action = PrimaryAction::for_mode(self.mode);

        match self.mode {
            AnchorMode::Create => {
                events.extend(self.clear_hover());
                self.menu.show_all();
            }
            AnchorMode::Select => self.menu.show_always_visible(),
        }
        events
    }

    // -------------------------------------------------------------------------
    // Menu
    // -------------------------------------------------------------------------

    pub fn navigate(&mut self, move_next: bool) -> FocusChange {
        self.menu.navigate(move_next)
    }

    /// The button a confirm press would submit, if the menu has focus.
    pub fn submit(&self) -> Option<MenuButton> {
        self.menu.focused_button()
    }

    pub fn refocus_menu(&mut self) {
        self.menu.focus();
    }

    // -------------------------------------------------------------------------
    // Hover and selection
    // -------------------------------------------------------------------------

    /// Apply a ray result: `Some(anchor)` hovers it (ending any other hover),
    /// `None` clears the hover.
    pub fn hover_update(&mut self, hit: Option<Entity>) -> Vec<AnchorEvent> {
        match hit {
            Some(anchor) if self.hovered == Some(anchor) => Vec::new(),
            Some(anchor) => {
                let mut events: Vec<AnchorEvent> = self.clear_hover().into_iter().collect();
                self.hovered = Some(anchor);
                events.push(AnchorEvent::HoverStarted(anchor));
                events
            }
            None => self.clear_hover().into_iter().collect(),
        }
    }

    /// The Select primary action.
    ///
    /// With a hovered anchor: replace the selection with it and take focus
    /// away from the menu. Without one: clear any selection and give focus
    /// back to the menu.
    pub fn select_current_hover(&mut self) -> Vec<AnchorEvent> {
        let mut events = Vec::new();

        if let Some(hovered) = self.hovered {
            if self.selected != Some(hovered) {
                if let Some(previous) = self.selected.take() {
                    events.push(AnchorEvent::Deselected(previous));
                }
                self.selected = Some(hovered);
                events.push(AnchorEvent::Selected(hovered));
            }
            self.menu.defocus();
        } else if let Some(previous) = self.selected.take() {
            events.push(AnchorEvent::Deselected(previous));
            self.menu.focus();
        }

        events
    }

    /// Drop every reference to a despawned anchor.
    pub fn forget(&mut self, entity: Entity) {
        if self.hovered == Some(entity) {
            self.hovered = None;
        }
        if self.selected == Some(entity) {
            self.selected = None;
        }
    }

    fn clear_hover(&mut self) -> Option<AnchorEvent> {
        self.hovered.take().map(AnchorEvent::HoverEnded)
    }
}
