use bevy::prelude::*;

use anchors::controller::ModeController;
use anchors::pointer::PointerRay;
use anchors::rig::RaycastLine;

const IDLE_COLOR: Color = Color::srgba(1.0, 1.0, 1.0, 0.6);
const HIT_COLOR: Color = Color::srgb(0.3, 1.0, 0.5);

/// Gizmo line width in pixels.
const LINE_WIDTH: f32 = 1.5;

pub fn configure_ray_gizmos(mut store: ResMut<GizmoConfigStore>) {
    let (config, _) = store.config_mut::<DefaultGizmoConfigGroup>();
    config.line_width = LINE_WIDTH;
}

/// Small emitter at the controller tip; its visibility follows the mode.
pub fn attach_ray_emitter(
    mut commands: Commands,
    added: Query<Entity, Added<RaycastLine>>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    for entity in &added {
        commands.entity(entity).insert((
            Mesh3d(meshes.add(Sphere::new(0.012))),
            MeshMaterial3d(materials.add(StandardMaterial {
                base_color: HIT_COLOR,
                unlit: true,
                ..default()
            })),
        ));
    }
}

/// Draw the controller ray in Select mode, ending on the hovered anchor.
pub fn draw_ray_line(
    controller: Res<ModeController>,
    pointer: Res<PointerRay>,
    mut gizmos: Gizmos,
) {
    if !controller.ray_line_active() {
        return;
    }

    let color = if pointer.anchor.is_some() {
        HIT_COLOR
    } else {
        IDLE_COLOR
    };
    gizmos.line(pointer.origin, pointer.end, color);
}
