use bevy::prelude::*;

use anchors::anchor::{Anchor, RayTarget};
use anchors::palette::AnchorPalette;

/// Colour for anchors whose prefab is no longer in the palette.
const FALLBACK_COLOR: Color = Color::srgb(0.8, 0.8, 0.8);

/// Base colour of selected anchors.
const SELECTED_COLOR: Color = Color::srgb(1.0, 0.95, 0.3);

/// Glow added while the ray hovers an anchor.
const HOVER_EMISSIVE: LinearRgba = LinearRgba::rgb(0.6, 0.6, 0.6);

/// Outline ring colour around the selected anchor.
const SELECTION_RING_COLOR: Color = Color::srgba(1.0, 0.95, 0.3, 0.8);

/// The prefab colour an anchor returns to when not selected.
#[derive(Component, Debug, Clone, Copy)]
pub struct AnchorTint(pub Color);

/// Give newly placed anchors a sphere mesh in their prefab colour.
///
/// Each anchor owns its material so hover and selection only restyle that
/// anchor.
pub fn attach_anchor_visuals(
    mut commands: Commands,
    added: Query<(Entity, &Anchor, &RayTarget), Added<Anchor>>,
    palette: Res<AnchorPalette>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    for (entity, anchor, target) in &added {
        let color = palette
            .get(anchor.prefab)
            .map_or(FALLBACK_COLOR, |prefab| prefab.color);
        let material = materials.add(StandardMaterial {
            base_color: color,
            perceptual_roughness: 0.4,
            ..default()
        });

        commands.entity(entity).insert((
            Mesh3d(meshes.add(Sphere::new(target.radius))),
            MeshMaterial3d(material),
            AnchorTint(color),
        ));
    }
}

/// Restyle anchors whose hover / selection flags changed.
pub fn update_anchor_highlight(
    anchors: Query<
        (&Anchor, &AnchorTint, &MeshMaterial3d<StandardMaterial>),
        Or<(Changed<Anchor>, Added<AnchorTint>)>,
    >,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    for (anchor, tint, material) in &anchors {
        let Some(mat) = materials.get_mut(material.id()) else {
            continue;
        };
        mat.base_color = if anchor.selected {
            SELECTED_COLOR
        } else {
            tint.0
        };
        mat.emissive = if anchor.hovered {
            HOVER_EMISSIVE
        } else {
            LinearRgba::BLACK
        };
    }
}

/// Draw a gizmo ring around the selected anchor.
pub fn draw_selection_rings(
    anchors: Query<(&GlobalTransform, &Anchor, &RayTarget)>,
    mut gizmos: Gizmos,
) {
    for (global, anchor, target) in &anchors {
        if !anchor.selected {
            continue;
        }
        gizmos.sphere(
            Isometry3d::from_translation(global.translation()),
            target.radius * 1.5,
            SELECTION_RING_COLOR,
        );
    }
}
