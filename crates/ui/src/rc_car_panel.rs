use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts};

use props::door::DoorAnimator;
use props::wheel::WheelSpin;
use props::RcCarCommand;

/// Buttons driving the RC car prop's animations.
pub fn rc_car_panel_ui(
    mut contexts: EguiContexts,
    wheels: Query<&WheelSpin>,
    doors: Query<&DoorAnimator>,
    mut commands: EventWriter<RcCarCommand>,
) {
    let Some(door) = doors.iter().next() else {
        return;
    };
    let spinning = wheels.iter().any(WheelSpin::is_enabled);

    egui::Window::new("RC Car")
        .default_pos(egui::pos2(12.0, 320.0))
        .resizable(false)
        .show(contexts.ctx_mut(), |ui| {
            let wheel_text = if spinning { "Stop Wheels" } else { "Spin Wheels" };
            if ui.button(wheel_text).clicked() {
                commands.send(RcCarCommand::ToggleWheelSpin);
            }

            let door_text = if door.is_open() { "Close Door" } else { "Open Door" };
            if ui.button(door_text).clicked() {
                commands.send(RcCarCommand::ToggleDoor);
            }
            ui.small("R: wheels, O: door");
        });
}

pub fn rc_car_keybinds(
    keys: Option<Res<ButtonInput<KeyCode>>>,
    mut commands: EventWriter<RcCarCommand>,
) {
    let Some(keys) = keys else {
        return;
    };
    if keys.just_pressed(KeyCode::KeyR) {
        commands.send(RcCarCommand::ToggleWheelSpin);
    }
    if keys.just_pressed(KeyCode::KeyO) {
        commands.send(RcCarCommand::ToggleDoor);
    }
}
