use bevy::prelude::*;

use anchors::palette::AnchorPalette;
use anchors::rig::PlacementPreview;

/// Opacity of the placement ghost.
const PREVIEW_ALPHA: f32 = 0.4;

fn preview_color(palette: &AnchorPalette) -> Color {
    let base = palette
        .current()
        .map_or(Color::WHITE, |prefab| prefab.color);
    base.with_alpha(PREVIEW_ALPHA)
}

fn preview_radius(palette: &AnchorPalette) -> f32 {
    palette
        .current()
        .map_or(anchors::config::DEFAULT_ANCHOR_RADIUS, |prefab| prefab.radius)
}

/// Give the placement preview a translucent ghost of the current prefab.
pub fn attach_preview_mesh(
    mut commands: Commands,
    added: Query<Entity, Added<PlacementPreview>>,
    palette: Res<AnchorPalette>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    for entity in &added {
        let material = materials.add(StandardMaterial {
            base_color: preview_color(&palette),
            alpha_mode: AlphaMode::Blend,
            unlit: true,
            ..default()
        });
        commands.entity(entity).insert((
            Mesh3d(meshes.add(Sphere::new(preview_radius(&palette)))),
            MeshMaterial3d(material),
        ));
    }
}

/// Follow prefab changes: new colour, new size.
pub fn restyle_preview(
    palette: Res<AnchorPalette>,
    mut previews: Query<(&mut Mesh3d, &MeshMaterial3d<StandardMaterial>), With<PlacementPreview>>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    if !palette.is_changed() || palette.is_added() {
        return;
    }

    for (mut mesh, material) in &mut previews {
        mesh.0 = meshes.add(Sphere::new(preview_radius(&palette)));
        if let Some(mat) = materials.get_mut(material.id()) {
            mat.base_color = preview_color(&palette);
        }
    }
}
