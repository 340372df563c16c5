//! The RC car prop: a blocky body, four wheels on spin pivots and a hinged
//! door. Animation state lives on the pivots; the meshes are children so
//! their own orientation never fights the animators.

use bevy::prelude::*;

use anchors::anchor::RayTarget;
use props::door::DoorAnimator;
use props::wheel::WheelSpin;
use props::RcCar;

const CAR_POSITION: Vec3 = Vec3::new(0.7, 0.0, -1.2);

const BODY_SIZE: Vec3 = Vec3::new(0.36, 0.14, 0.6);
const BODY_HEIGHT: f32 = 0.13;

const WHEEL_RADIUS: f32 = 0.065;
const WHEEL_WIDTH: f32 = 0.04;
/// Wheel hub positions relative to the car root (x: side, z: front/back).
const WHEEL_HUBS: [Vec3; 4] = [
    Vec3::new(-0.2, WHEEL_RADIUS, -0.2),
    Vec3::new(0.2, WHEEL_RADIUS, -0.2),
    Vec3::new(-0.2, WHEEL_RADIUS, 0.2),
    Vec3::new(0.2, WHEEL_RADIUS, 0.2),
];

const DOOR_HINGE: Vec3 = Vec3::new(-0.185, 0.13, 0.09);
const DOOR_SIZE: Vec3 = Vec3::new(0.01, 0.1, 0.18);

/// Ray blocker radius around the body, so anchors behind the car cannot be
/// hovered through it.
const BODY_RAY_RADIUS: f32 = 0.28;

pub fn spawn_rc_car(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    let body_mat = materials.add(StandardMaterial {
        base_color: Color::srgb(0.85, 0.15, 0.12),
        metallic: 0.3,
        perceptual_roughness: 0.5,
        ..default()
    });
    let tyre_mat = materials.add(StandardMaterial {
        base_color: Color::srgb(0.08, 0.08, 0.08),
        perceptual_roughness: 0.9,
        ..default()
    });
    let door_mat = materials.add(StandardMaterial {
        base_color: Color::srgb(0.95, 0.85, 0.2),
        ..default()
    });

    let body_mesh = meshes.add(Cuboid::new(BODY_SIZE.x, BODY_SIZE.y, BODY_SIZE.z));
    let wheel_mesh = meshes.add(Cylinder::new(WHEEL_RADIUS, WHEEL_WIDTH));
    let door_mesh = meshes.add(Cuboid::new(DOOR_SIZE.x, DOOR_SIZE.y, DOOR_SIZE.z));

    commands
        .spawn((
            Name::new("RC Car"),
            RcCar,
            Transform::from_translation(CAR_POSITION),
            Visibility::default(),
        ))
        .with_children(|car| {
            car.spawn((
                Name::new("Body"),
                Mesh3d(body_mesh),
                MeshMaterial3d(body_mat),
                RayTarget::new(BODY_RAY_RADIUS),
                Transform::from_xyz(0.0, BODY_HEIGHT, 0.0),
            ));

            for (i, hub) in WHEEL_HUBS.into_iter().enumerate() {
                car.spawn((
                    Name::new(format!("Wheel {i}")),
                    WheelSpin::new(Quat::IDENTITY),
                    Transform::from_translation(hub),
                    Visibility::default(),
                ))
                .with_children(|pivot| {
                    // Cylinders stand on Y; lay it on its side so it rolls about X.
                    pivot.spawn((
                        Mesh3d(wheel_mesh.clone()),
                        MeshMaterial3d(tyre_mat.clone()),
                        Transform::from_rotation(Quat::from_rotation_z(
                            std::f32::consts::FRAC_PI_2,
                        )),
                    ));
                });
            }

            car.spawn((
                Name::new("Door Hinge"),
                DoorAnimator::new(Quat::IDENTITY),
                Transform::from_translation(DOOR_HINGE),
                Visibility::default(),
            ))
            .with_children(|hinge| {
                hinge.spawn((
                    Mesh3d(door_mesh),
                    MeshMaterial3d(door_mat),
                    Transform::from_xyz(0.0, 0.0, -DOOR_SIZE.z * 0.5),
                ));
            });
        });
}
