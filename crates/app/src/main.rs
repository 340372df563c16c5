use bevy::prelude::*;
use bevy::window::PresentMode;
use bevy::winit::{UpdateMode, WinitSettings};

use anchors::anchor::{Anchor, LoadAnchorsRequested, RayTarget};
use anchors::mode::{AnchorMode, InitialMode};
use anchors::palette::AnchorPalette;

/// Anchors already in the room when the app starts.
const DEMO_ANCHORS: [(usize, Vec3); 3] = [
    (0, Vec3::new(-0.6, 1.2, -1.0)),
    (1, Vec3::new(0.0, 1.5, -1.6)),
    (2, Vec3::new(0.6, 1.1, -0.9)),
];

fn main() {
    let mut app = App::new();

    app.add_plugins(DefaultPlugins.set(WindowPlugin {
        primary_window: Some(Window {
            title: "Spatial Anchors".to_string(),
            resolution: (1280.0, 720.0).into(),
            present_mode: PresentMode::AutoVsync,
            ..default()
        }),
        ..default()
    }))
    .insert_resource(WinitSettings {
        focused_mode: UpdateMode::Continuous,
        unfocused_mode: UpdateMode::reactive_low_power(std::time::Duration::from_millis(100)),
    });

    // ANCHORS_START_MODE=create starts with the placement preview out
    if std::env::var("ANCHORS_START_MODE").is_ok_and(|mode| mode.eq_ignore_ascii_case("create")) {
        app.insert_resource(InitialMode(AnchorMode::Create));
    }

    app.add_plugins((
        anchors::AnchorsPlugin,
        props::PropsPlugin,
        rendering::RenderingPlugin,
        ui::UiPlugin,
    ))
    .add_systems(Startup, spawn_demo_anchors)
    .add_systems(Update, report_load_requests);

    app.run();
}

fn spawn_demo_anchors(mut commands: Commands, palette: Res<AnchorPalette>) {
    for (prefab_index, position) in DEMO_ANCHORS {
        let Some(prefab) = palette.get(prefab_index) else {
            continue;
        };
        commands.spawn((
            Name::new(format!("Anchor ({})", prefab.name)),
            Anchor::new(prefab_index),
            RayTarget::new(prefab.radius),
            Transform::from_translation(position),
            Visibility::default(),
        ));
    }
}

fn report_load_requests(mut requests: EventReader<LoadAnchorsRequested>) {
    for _ in requests.read() {
        warn!("anchor load requested but no anchor loader is attached");
    }
}
