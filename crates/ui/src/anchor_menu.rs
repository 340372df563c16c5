//! The anchor menu window.
//!
//! Mirrors the controller's menu: the visible buttons in order with the
//! cursor highlighted while the menu has focus. Clicking a button sends the
//! same [`MenuButtonPressed`] a controller confirm would.

use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts};

use anchors::controller::ModeController;
use anchors::controller_input::{ButtonBinding, ControllerBindings, ControllerButton};
use anchors::menu::{MenuButton, MenuButtonPressed};
use anchors::mode::AnchorMode;
use anchors::palette::AnchorPalette;

const WARNING_COLOR: egui::Color32 = egui::Color32::from_rgb(255, 180, 50);

/// Text shown on a menu button.
///
/// The mode toggle names the mode it switches to.
pub fn button_label(button: MenuButton, mode: AnchorMode, palette: &AnchorPalette) -> String {
    match button {
        MenuButton::ToggleMode => format!("{} Mode", mode.toggled().label()),
        MenuButton::LoadAnchors => "Load Anchors".to_string(),
        MenuButton::AnchorPrefab(index) => match palette.get(index) {
            Some(prefab) if index == palette.current_index() => {
                format!("{} (current)", prefab.name)
            }
            Some(prefab) => prefab.name.clone(),
            None => format!("Prefab {index}"),
        },
    }
}

fn binding_label(binding: ButtonBinding) -> String {
    let key = binding.key.map(|key| format!("{key:?}"));
    let pad = binding.gamepad.map(|button| format!("{button:?}"));
    match (key, pad) {
        (Some(key), Some(pad)) => format!("{key} / {pad}"),
        (Some(key), None) => key,
        (None, Some(pad)) => pad,
        (None, None) => "unbound".to_string(),
    }
}

pub fn anchor_menu_ui(
    mut contexts: EguiContexts,
    controller: Res<ModeController>,
    palette: Res<AnchorPalette>,
    mut bindings: ResMut<ControllerBindings>,
    mut pressed: EventWriter<MenuButtonPressed>,
) {
    let menu = controller.menu();

    egui::Window::new("Anchors")
        .default_pos(egui::pos2(12.0, 12.0))
        .default_width(220.0)
        .resizable(false)
        .show(contexts.ctx_mut(), |ui| {
            ui.label(
                egui::RichText::new(format!("{} mode", controller.mode().label()))
                    .strong()
                    .size(16.0),
            );
            ui.separator();

            for (i, &button) in menu.visible_buttons().iter().enumerate() {
                let focused = menu.is_focused() && menu.cursor() == i;
                let label = button_label(button, controller.mode(), &palette);
                if ui.selectable_label(focused, label).clicked() {
                    pressed.send(MenuButtonPressed(button));
                }
            }

            ui.separator();
            let describe = |entity: Option<Entity>| {
                entity.map_or_else(|| "none".to_string(), |e| format!("{e}"))
            };
            ui.label(format!("Hovered: {}", describe(controller.hovered())));
            ui.label(format!("Selected: {}", describe(controller.selected())));
            if let Some(prefab) = palette.current() {
                ui.label(format!("Prefab: {}", prefab.name));
            }

            ui.collapsing("Controls", |ui| {
                let conflicts = bindings.find_conflicts();
                if !conflicts.is_empty() {
                    ui.colored_label(
                        WARNING_COLOR,
                        format!("{} binding conflict(s)", conflicts.len()),
                    );
                }
                egui::Grid::new("controller_bindings")
                    .num_columns(2)
                    .show(ui, |ui| {
                        for &button in ControllerButton::ALL {
                            ui.label(button.label());
                            ui.monospace(binding_label(bindings.get(button)));
                            ui.end_row();
                        }
                    });
                if ui.button("Reset to Defaults").clicked() {
                    bindings.reset_to_defaults();
                }
            });
        });
}
