use bevy::prelude::*;

use anchors::AnchorsSet;

pub mod anchor_visuals;
pub mod placement_preview;
pub mod ray_line;
pub mod rc_car_model;
pub mod viewer;

use viewer::Viewer;

pub struct RenderingPlugin;

impl Plugin for RenderingPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<Viewer>()
            .add_systems(
                Startup,
                (
                    viewer::setup_viewer,
                    setup_lighting,
                    spawn_floor,
                    rc_car_model::spawn_rc_car,
                    ray_line::configure_ray_gizmos,
                ),
            )
            // Head and controller pose must be current before the ray is cast
            .add_systems(
                Update,
                (viewer::move_viewer_keyboard, viewer::apply_viewer)
                    .chain()
                    .before(AnchorsSet::Pointer),
            )
            .add_systems(
                Update,
                (
                    anchor_visuals::attach_anchor_visuals,
                    anchor_visuals::update_anchor_highlight,
                    placement_preview::attach_preview_mesh,
                    placement_preview::restyle_preview,
                    ray_line::attach_ray_emitter,
                )
                    .chain()
                    .after(AnchorsSet::Sync),
            )
            .add_systems(
                Update,
                (
                    anchor_visuals::draw_selection_rings,
                    ray_line::draw_ray_line,
                )
                    .after(AnchorsSet::Pointer),
            );
    }
}

fn setup_lighting(mut commands: Commands) {
    // Ambient light for baseline illumination
    commands.insert_resource(AmbientLight {
        color: Color::srgb(0.95, 0.95, 1.0),
        brightness: 400.0,
    });

    commands.spawn((
        Name::new("Sun"),
        DirectionalLight {
            illuminance: 8000.0,
            shadows_enabled: true,
            ..default()
        },
        Transform::from_rotation(Quat::from_euler(
            EulerRot::XYZ,
            -std::f32::consts::FRAC_PI_3, // 60 degrees down
            std::f32::consts::FRAC_PI_6,
            0.0,
        )),
    ));
}

/// Room floor so placed anchors have something to float above.
fn spawn_floor(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    commands.spawn((
        Name::new("Floor"),
        Mesh3d(meshes.add(Plane3d::default().mesh().size(8.0, 8.0))),
        MeshMaterial3d(materials.add(StandardMaterial {
            base_color: Color::srgb(0.35, 0.37, 0.4),
            perceptual_roughness: 0.95,
            ..default()
        })),
        Transform::default(),
    ));
}
