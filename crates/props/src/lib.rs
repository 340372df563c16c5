//! RC car prop: wheel spin and door animations driven by UI callbacks.
//!
//! Buttons send [`RcCarCommand`]s; [`handle_rc_car_commands`] toggles the
//! animators and the playback systems pose the wheels and door each frame.

use bevy::prelude::*;

pub mod config;
pub mod door;
pub mod wheel;

use door::DoorAnimator;
use wheel::WheelSpin;

/// Root of an RC car model.
#[derive(Component, Debug, Default)]
pub struct RcCar;

#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub enum RcCarCommand {
    ToggleWheelSpin,
    ToggleDoor,
}

/// Apply RC car commands to every wheel and door.
pub fn handle_rc_car_commands(
    mut commands: EventReader<RcCarCommand>,
    mut wheels: Query<&mut WheelSpin>,
    mut doors: Query<&mut DoorAnimator>,
) {
    for command in commands.read() {
        match command {
            RcCarCommand::ToggleWheelSpin => {
                let spinning =
                    wheel::toggle_wheel_spin(wheels.iter_mut().map(Mut::into_inner));
                info!("wheel spin toggled: {} wheel(s) spinning", spinning);
            }
            RcCarCommand::ToggleDoor => {
                for mut door in &mut doors {
                    let clip = door.toggle();
                    info!("door clip {} playing", clip.name());
                }
            }
        }
    }
}

pub struct PropsPlugin;

impl Plugin for PropsPlugin {
    fn build(&self, app: &mut App) {
        app.add_event::<RcCarCommand>().add_systems(
            Update,
            (
                handle_rc_car_commands,
                wheel::play_wheel_spin,
                door::play_door_clips,
            )
                .chain(),
        );
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use bevy::time::TimeUpdateStrategy;

    use super::*;
    use crate::door::DoorClip;

    fn car_app() -> (App, Vec<Entity>, Entity) {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins)
            .insert_resource(TimeUpdateStrategy::ManualDuration(Duration::from_millis(100)))
            .add_plugins(PropsPlugin);

        let wheels = (0..4)
            .map(|_| {
                app.world_mut()
                    .spawn((WheelSpin::new(Quat::IDENTITY), Transform::default()))
                    .id()
            })
            .collect();
        let door = app
            .world_mut()
            .spawn((DoorAnimator::new(Quat::IDENTITY), Transform::default()))
            .id();
        app.update();
        (app, wheels, door)
    }

    fn send(app: &mut App, command: RcCarCommand) {
        app.world_mut().send_event(command);
        app.update();
    }

    #[test]
    fn test_wheel_command_toggles_all_wheels() {
        let (mut app, wheels, _) = car_app();
        send(&mut app, RcCarCommand::ToggleWheelSpin);
        for &wheel in &wheels {
            assert!(app.world().get::<WheelSpin>(wheel).is_some_and(|w| w.is_enabled()));
        }

        send(&mut app, RcCarCommand::ToggleWheelSpin);
        for &wheel in &wheels {
            assert!(app.world().get::<WheelSpin>(wheel).is_some_and(|w| !w.is_enabled()));
        }
    }

    #[test]
    fn test_spinning_wheel_rotates_its_transform() {
        let (mut app, wheels, _) = car_app();
        send(&mut app, RcCarCommand::ToggleWheelSpin);
        app.update();

        let rotation = app
            .world()
            .get::<Transform>(wheels[0])
            .map(|t| t.rotation)
            .unwrap_or(Quat::IDENTITY);
        assert!(rotation.angle_between(Quat::IDENTITY) > 1e-3);
    }

    #[test]
    fn test_door_command_alternates_clips() {
        let (mut app, _, door) = car_app();
        let mut played = Vec::new();
        for _ in 0..4 {
            send(&mut app, RcCarCommand::ToggleDoor);
            played.extend(app.world().get::<DoorAnimator>(door).and_then(|d| d.current_clip()));
        }
        assert_eq!(
            played,
            [DoorClip::Open, DoorClip::Close, DoorClip::Open, DoorClip::Close]
        );
    }

    #[test]
    fn test_door_swings_open_over_frames() {
        let (mut app, _, door) = car_app();
        send(&mut app, RcCarCommand::ToggleDoor);
        for _ in 0..10 {
            app.update();
        }

        let animator = app.world().get::<DoorAnimator>(door).copied();
        assert!(animator.is_some_and(|d| d.is_open() && !d.is_playing()));
        let rotation = app
            .world()
            .get::<Transform>(door)
            .map(|t| t.rotation)
            .unwrap_or(Quat::IDENTITY);
        let expected = Quat::from_rotation_y(config::DOOR_OPEN_ANGLE);
        assert!(rotation.angle_between(expected) < 1e-4);
    }
}
