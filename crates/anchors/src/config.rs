//! Tuning constants for the anchor interaction layer.

use bevy::math::Vec3;

/// Menu buttons shown in Select mode: the mode toggle and "Load Anchors".
pub const ALWAYS_VISIBLE_BUTTONS: usize = 2;

/// The controller ray is unbounded; the nearest target along it wins.
pub const RAY_MAX_DISTANCE: f32 = f32::INFINITY;

/// Length of the drawn ray line when the ray does not hit an anchor (metres).
pub const RAY_LINE_LENGTH: f32 = 10.0;

/// Placement preview offset in controller space (30 cm in front of the grip).
pub const PLACEMENT_OFFSET: Vec3 = Vec3::new(0.0, 0.0, -0.3);

/// Collider radius used by the built-in anchor prefabs (metres).
pub const DEFAULT_ANCHOR_RADIUS: f32 = 0.08;
