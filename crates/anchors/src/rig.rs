//! Scene objects owned by the tracked controller.

use bevy::prelude::*;

use crate::config::PLACEMENT_OFFSET;

/// The tracked controller. Its forward axis is the ray direction.
#[derive(Component, Debug, Default)]
pub struct TrackedController;

/// Ghost shown in Create mode. Placed anchors copy its world transform.
#[derive(Component, Debug, Default)]
pub struct PlacementPreview;

/// Ray line handle shown in Select mode.
#[derive(Component, Debug, Default)]
pub struct RaycastLine;

/// Spawn the controller with its placement preview and ray line as children,
/// unless the scene already authored a controller.
pub fn spawn_controller_rig(mut commands: Commands, existing: Query<(), With<TrackedController>>) {
    if !existing.is_empty() {
        return;
    }

    commands
        .spawn((
            Name::new("Tracked Controller"),
            TrackedController,
            Transform::default(),
            Visibility::default(),
        ))
        .with_children(|rig| {
            rig.spawn((
                Name::new("Placement Preview"),
                PlacementPreview,
                Transform::from_translation(PLACEMENT_OFFSET),
                Visibility::Hidden,
            ));
            rig.spawn((
                Name::new("Raycast Line"),
                RaycastLine,
                Transform::default(),
                Visibility::Hidden,
            ));
        });
}
