//! Per-frame interaction systems: menu focus and navigation, primary action
//! dispatch, menu button handling, and mirroring controller state onto the
//! scene.

use bevy::prelude::*;

use crate::anchor::{Anchor, AnchorEvent, AnchorPlaced, LoadAnchorsRequested, RayTarget};
use crate::controller::ModeController;
use crate::controller_input::ControllerButton;
use crate::menu::{MenuButton, MenuButtonPressed};
use crate::mode::{AnchorMode, InitialMode, PrimaryAction};
use crate::palette::AnchorPalette;
use crate::rig::{PlacementPreview, RaycastLine};

/// Startup: enter the initial mode.
pub fn start_controller(
    mut controller: ResMut<ModeController>,
    initial: Option<Res<InitialMode>>,
    mut anchor_events: EventWriter<AnchorEvent>,
) {
    controller.start();
    if initial.is_some_and(|initial| initial.0 == AnchorMode::Create) {
        for event in controller.toggle_mode() {
            anchor_events.send(event);
        }
    }
    info!("anchor controller started in {} mode", controller.mode().label());
}

/// While nothing is selected the menu keeps focus.
pub fn refocus_menu(mut controller: ResMut<ModeController>) {
    if controller.selected().is_none() && !controller.menu().is_focused() {
        controller.refocus_menu();
    }
}

/// Thumbstick up/down moves the menu cursor; confirm submits the focused
/// button. Ignored while an anchor holds focus.
pub fn handle_menu_navigation(
    buttons: Res<ButtonInput<ControllerButton>>,
    mut controller: ResMut<ModeController>,
    mut pressed: EventWriter<MenuButtonPressed>,
) {
    if !controller.menu().is_focused() {
        return;
    }

    if buttons.just_pressed(ControllerButton::ThumbstickUp) {
        controller.navigate(false);
    }
    if buttons.just_pressed(ControllerButton::ThumbstickDown) {
        controller.navigate(true);
    }
    if buttons.just_pressed(ControllerButton::Confirm) {
        if let Some(button) = controller.submit() {
            pressed.send(MenuButtonPressed(button));
        }
    }
}

/// Run the bound primary action when the trigger is pressed.
pub fn dispatch_primary_action(
    mut commands: Commands,
    buttons: Res<ButtonInput<ControllerButton>>,
    mut controller: ResMut<ModeController>,
    palette: Res<AnchorPalette>,
    preview: Query<&GlobalTransform, With<PlacementPreview>>,
    mut anchor_events: EventWriter<AnchorEvent>,
    mut placed: EventWriter<AnchorPlaced>,
) {
    if !buttons.just_pressed(ControllerButton::Trigger) {
        return;
    }

    match controller.primary_action() {
        PrimaryAction::Place => {
            let Ok(preview) = preview.get_single() else {
                warn!("place action ignored: no placement preview in the scene");
                return;
            };
            let Some(prefab) = palette.current() else {
                warn!("place action ignored: anchor palette is empty");
                return;
            };

            let at = preview.compute_transform();
            let transform = Transform::from_translation(at.translation).with_rotation(at.rotation);
            let prefab_index = palette.current_index();
            let anchor = commands
                .spawn((
                    Name::new(format!("Anchor ({})", prefab.name)),
                    Anchor::new(prefab_index),
                    RayTarget::new(prefab.radius),
                    transform,
                    Visibility::default(),
                ))
                .id();

            info!("placed {} anchor at {}", prefab.name, transform.translation);
            placed.send(AnchorPlaced {
                anchor,
                prefab: prefab_index,
                transform,
            });
        }
        PrimaryAction::Select => {
            for event in controller.select_current_hover() {
                debug!("anchor selection: {:?}", event);
                anchor_events.send(event);
            }
        }
        PrimaryAction::None => {}
    }
}

/// Menu button callbacks, whether submitted from the controller or clicked.
pub fn handle_menu_buttons(
    mut pressed: EventReader<MenuButtonPressed>,
    mut controller: ResMut<ModeController>,
    mut palette: ResMut<AnchorPalette>,
    mut anchor_events: EventWriter<AnchorEvent>,
    mut load_requests: EventWriter<LoadAnchorsRequested>,
) {
    for &MenuButtonPressed(button) in pressed.read() {
        match button {
            MenuButton::ToggleMode => {
                for event in controller.toggle_mode() {
                    anchor_events.send(event);
                }
                info!("anchor mode: {}", controller.mode().label());
            }
            MenuButton::LoadAnchors => {
                info!("anchor load requested");
                load_requests.send(LoadAnchorsRequested);
            }
            MenuButton::AnchorPrefab(index) => {
                if palette.choose(index) {
                    let name = palette.current().map_or("", |p| p.name.as_str());
                    info!("anchor prefab {} ({}) chosen", index, name);
                } else {
                    warn!("anchor prefab {} does not exist", index);
                }
            }
        }
    }
}

/// Drop controller references to anchors that were despawned.
pub fn forget_despawned_anchors(
    mut removed: RemovedComponents<Anchor>,
    mut controller: ResMut<ModeController>,
) {
    for entity in removed.read() {
        if controller.references(entity) {
            controller.forget(entity);
            debug!("forgot despawned anchor {:?}", entity);
        }
    }
}

/// Show the placement preview in Create mode and the ray line in Select mode.
pub fn sync_mode_objects(
    controller: Res<ModeController>,
    mut previews: Query<&mut Visibility, (With<PlacementPreview>, Without<RaycastLine>)>,
    mut lines: Query<&mut Visibility, (With<RaycastLine>, Without<PlacementPreview>)>,
) {
    let shown = |active: bool| {
        if active {
            Visibility::Inherited
        } else {
            Visibility::Hidden
        }
    };

    let preview = shown(controller.placement_preview_active());
    for mut visibility in &mut previews {
        visibility.set_if_neq(preview);
    }

    let line = shown(controller.ray_line_active());
    for mut visibility in &mut lines {
        visibility.set_if_neq(line);
    }
}

/// Mirror the controller's hover/selection onto each [`Anchor`].
pub fn sync_anchor_flags(controller: Res<ModeController>, mut anchors: Query<(Entity, &mut Anchor)>) {
    for (entity, mut anchor) in &mut anchors {
        let hovered = controller.hovered() == Some(entity);
        let selected = controller.selected() == Some(entity);
        if anchor.hovered != hovered || anchor.selected != selected {
            anchor.hovered = hovered;
            anchor.selected = selected;
        }
    }
}
