//! Desktop stand-in for the headset: a first-person camera with the tracked
//! controller held in front of it.

use bevy::prelude::*;

use anchors::rig::TrackedController;

const EYE_HEIGHT: f32 = 1.6;
const MOVE_SPEED: f32 = 1.5; // metres per second
const AIM_SPEED: f32 = 1.2; // radians per second
const MAX_PITCH: f32 = 80.0 * std::f32::consts::PI / 180.0;

/// Controller position relative to the eye: low, right and in front.
const CONTROLLER_OFFSET: Vec3 = Vec3::new(0.18, -0.25, -0.35);

/// Head pose the camera and controller follow.
#[derive(Resource, Debug, Clone, Copy, PartialEq)]
pub struct Viewer {
    pub position: Vec3,
    /// Rotation about world Y in radians.
    pub yaw: f32,
    /// Elevation in radians, clamped to +/- `MAX_PITCH`.
    pub pitch: f32,
}

impl Default for Viewer {
    fn default() -> Self {
        Self {
            position: Vec3::new(0.0, EYE_HEIGHT, 1.5),
            yaw: 0.0,
            pitch: -10.0_f32.to_radians(),
        }
    }
}

impl Viewer {
    pub fn eye_transform(&self) -> Transform {
        Transform::from_translation(self.position).with_rotation(Quat::from_euler(
            EulerRot::YXZ,
            self.yaw,
            self.pitch,
            0.0,
        ))
    }

    pub fn controller_transform(&self) -> Transform {
        self.eye_transform()
            .mul_transform(Transform::from_translation(CONTROLLER_OFFSET))
    }
}

pub fn setup_viewer(mut commands: Commands, viewer: Res<Viewer>) {
    commands.spawn((Name::new("Viewer"), Camera3d::default(), viewer.eye_transform()));
}

/// WASD walks on the ground plane, IJKL turns the head.
pub fn move_viewer_keyboard(
    keys: Option<Res<ButtonInput<KeyCode>>>,
    time: Res<Time>,
    mut viewer: ResMut<Viewer>,
) {
    let Some(keys) = keys else {
        return;
    };
    let dt = time.delta_secs();

    let mut turn = Vec2::ZERO;
    if keys.pressed(KeyCode::KeyJ) {
        turn.x += 1.0;
    }
    if keys.pressed(KeyCode::KeyL) {
        turn.x -= 1.0;
    }
    if keys.pressed(KeyCode::KeyI) {
        turn.y += 1.0;
    }
    if keys.pressed(KeyCode::KeyK) {
        turn.y -= 1.0;
    }

    let mut walk = Vec2::ZERO;
    if keys.pressed(KeyCode::KeyW) {
        walk.y -= 1.0;
    }
    if keys.pressed(KeyCode::KeyS) {
        walk.y += 1.0;
    }
    if keys.pressed(KeyCode::KeyA) {
        walk.x -= 1.0;
    }
    if keys.pressed(KeyCode::KeyD) {
        walk.x += 1.0;
    }

    if turn != Vec2::ZERO {
        viewer.yaw += turn.x * AIM_SPEED * dt;
        viewer.pitch = (viewer.pitch + turn.y * AIM_SPEED * dt).clamp(-MAX_PITCH, MAX_PITCH);
    }

    if walk != Vec2::ZERO {
        let walk = walk.normalize() * MOVE_SPEED * dt;
        // Rotate movement by yaw so W always walks where the head faces
        let (sin_yaw, cos_yaw) = viewer.yaw.sin_cos();
        viewer.position.x += walk.x * cos_yaw + walk.y * sin_yaw;
        viewer.position.z += -walk.x * sin_yaw + walk.y * cos_yaw;
    }
}

/// Pose the camera and the tracked controller from the viewer.
pub fn apply_viewer(
    viewer: Res<Viewer>,
    mut cameras: Query<&mut Transform, (With<Camera3d>, Without<TrackedController>)>,
    mut controllers: Query<&mut Transform, (With<TrackedController>, Without<Camera3d>)>,
) {
    let eye = viewer.eye_transform();
    for mut transform in &mut cameras {
        transform.set_if_neq(eye);
    }

    let grip = viewer.controller_transform();
    for mut transform in &mut controllers {
        transform.set_if_neq(grip);
    }
}
