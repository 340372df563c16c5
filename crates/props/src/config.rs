//! Playback tuning for the RC car animations.

/// Wheel spin speed while enabled (radians per second, two turns a second).
pub const WHEEL_SPIN_SPEED: f32 = std::f32::consts::TAU * 2.0;

/// Hinge angle of the fully open door (radians).
pub const DOOR_OPEN_ANGLE: f32 = 70.0 * std::f32::consts::PI / 180.0;

/// Length of the OpenDoor and CloseDoor clips (seconds).
pub const DOOR_CLIP_DURATION: f32 = 0.8;
