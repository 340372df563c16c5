use bevy::prelude::*;

use crate::config::WHEEL_SPIN_SPEED;

/// Spin animation on one wheel.
///
/// Disabling freezes the wheel where it is; enabling restarts the spin from
/// the rest pose.
#[derive(Component, Debug, Clone, Copy, PartialEq)]
pub struct WheelSpin {
    enabled: bool,
    elapsed: f32,
    rest: Quat,
}

impl WheelSpin {
    /// A stopped wheel whose rest orientation is `rest`.
    pub fn new(rest: Quat) -> Self {
        Self {
            enabled: false,
            elapsed: 0.0,
            rest,
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }

    /// Flip enabled. Returns the new state.
    pub fn toggle(&mut self) -> bool {
        self.enabled = !self.enabled;
        if self.enabled {
            self.elapsed = 0.0;
        }
        self.enabled
    }

    pub fn advance(&mut self, dt: f32) {
        if self.enabled {
            self.elapsed += dt;
        }
    }

    /// Orientation for the current playback time: the rest pose rolled
    /// forward about the axle (local X).
    pub fn rotation(&self) -> Quat {
        self.rest * Quat::from_rotation_x(-self.elapsed * WHEEL_SPIN_SPEED)
    }
}

/// Toggle every wheel. Returns how many are now spinning.
pub fn toggle_wheel_spin<'a>(wheels: impl IntoIterator<Item = &'a mut WheelSpin>) -> usize {
    wheels
        .into_iter()
        .map(|wheel| wheel.toggle())
        .filter(|&enabled| enabled)
        .count()
}

/// Advance enabled wheels and write their rotation.
pub fn play_wheel_spin(time: Res<Time>, mut wheels: Query<(&mut WheelSpin, &mut Transform)>) {
    let dt = time.delta_secs();
    for (mut wheel, mut transform) in &mut wheels {
        if !wheel.is_enabled() {
            continue;
        }
        wheel.advance(dt);
        transform.rotation = wheel.rotation();
    }
}
