//! # TestScene: headless harness for the anchor interaction layer
//!
//! Wraps a `bevy::app::App` running [`AnchorsPlugin`] without a window or
//! renderer. Tests press controller buttons, aim the controller and tick
//! frames, then assert on the controller, the scene and recorded events.

use bevy::hierarchy::HierarchyPlugin;
use bevy::prelude::*;
use bevy::transform::TransformPlugin;

use crate::anchor::{Anchor, AnchorEvent, AnchorPlaced, LoadAnchorsRequested, RayTarget};
use crate::config::DEFAULT_ANCHOR_RADIUS;
use crate::controller::ModeController;
use crate::controller_input::ControllerButton;
use crate::menu::{MenuButton, MenuButtonPressed};
use crate::mode::{AnchorMode, InitialMode};
use crate::palette::AnchorPalette;
use crate::rig::TrackedController;
use crate::AnchorsPlugin;

/// Every event of type `E` seen since the last [`TestScene::take_events`].
#[derive(Resource)]
pub struct Recorded<E: Event>(pub Vec<E>);

impl<E: Event> Default for Recorded<E> {
    fn default() -> Self {
        Self(Vec::new())
    }
}

fn record<E: Event + Clone>(mut reader: EventReader<E>, mut recorded: ResMut<Recorded<E>>) {
    recorded.0.extend(reader.read().cloned());
}

pub struct TestScene {
    app: App,
}

impl TestScene {
    // -----------------------------------------------------------------------
    // Constructors
    // -----------------------------------------------------------------------

    /// Default palette, started in Select mode, controller at the origin
    /// looking down -Z.
    pub fn new() -> Self {
        Self::build(AnchorPalette::default(), AnchorMode::Select)
    }

    pub fn in_create_mode() -> Self {
        Self::build(AnchorPalette::default(), AnchorMode::Create)
    }

    pub fn with_palette(palette: AnchorPalette) -> Self {
        Self::build(palette, AnchorMode::Select)
    }

    fn build(palette: AnchorPalette, mode: AnchorMode) -> Self {
        let mut app = App::new();
        app.add_plugins((MinimalPlugins, HierarchyPlugin, TransformPlugin));

        // Both are read while the plugin builds / starts up.
        app.insert_resource(palette);
        app.insert_resource(InitialMode(mode));
        app.add_plugins(AnchorsPlugin);

        app.init_resource::<Recorded<AnchorEvent>>()
            .init_resource::<Recorded<AnchorPlaced>>()
            .init_resource::<Recorded<LoadAnchorsRequested>>()
            .add_systems(
                Last,
                (
                    record::<AnchorEvent>,
                    record::<AnchorPlaced>,
                    record::<LoadAnchorsRequested>,
                ),
            );

        // Startup spawns the rig and starts the controller.
        app.update();
        Self { app }
    }

    // -----------------------------------------------------------------------
    // Driving the scene
    // -----------------------------------------------------------------------

    pub fn tick(&mut self, frames: usize) {
        for _ in 0..frames {
            self.app.update();
        }
    }

    /// Press a controller button for exactly one frame.
    pub fn tap(&mut self, button: ControllerButton) {
        self.buttons_mut().press(button);
        self.app.update();
        self.buttons_mut().release(button);
    }

    /// Simulate a UI click on a menu button.
    pub fn click(&mut self, button: MenuButton) {
        self.app.world_mut().send_event(MenuButtonPressed(button));
        self.app.update();
    }

    /// Move the controller to `from`, pointing at `target`. Takes effect for
    /// ray casts immediately and for child objects after the next frame.
    pub fn aim(&mut self, from: Vec3, target: Vec3) {
        self.place_rig(Transform::from_translation(from).looking_at(target, Vec3::Y));
    }

    pub fn place_rig(&mut self, transform: Transform) {
        let rig = self.rig();
        self.app
            .world_mut()
            .entity_mut(rig)
            .insert((transform, GlobalTransform::from(transform)));
    }

    pub fn spawn_anchor(&mut self, position: Vec3) -> Entity {
        self.app
            .world_mut()
            .spawn((
                Anchor::new(0),
                RayTarget::new(DEFAULT_ANCHOR_RADIUS),
                Transform::from_translation(position),
                GlobalTransform::from_translation(position),
            ))
            .id()
    }

    /// A ray target that is not an anchor.
    pub fn spawn_blocker(&mut self, position: Vec3, radius: f32) -> Entity {
        self.app
            .world_mut()
            .spawn((
                RayTarget::new(radius),
                Transform::from_translation(position),
                GlobalTransform::from_translation(position),
            ))
            .id()
    }

    pub fn despawn(&mut self, entity: Entity) {
        self.app.world_mut().despawn(entity);
    }

    // -----------------------------------------------------------------------
    // Queries
    // -----------------------------------------------------------------------

    pub fn controller(&self) -> &ModeController {
        self.app.world().resource::<ModeController>()
    }

    pub fn resource<R: Resource>(&self) -> &R {
        self.app.world().resource::<R>()
    }

    pub fn anchor(&self, entity: Entity) -> Option<Anchor> {
        self.app.world().get::<Anchor>(entity).copied()
    }

    pub fn anchors(&mut self) -> Vec<(Entity, Anchor, Transform)> {
        let world = self.app.world_mut();
        let mut query = world.query::<(Entity, &Anchor, &Transform)>();
        query
            .iter(world)
            .map(|(entity, anchor, transform)| (entity, *anchor, *transform))
            .collect()
    }

    /// Visibility of the single entity carrying marker `M`.
    pub fn visibility_of<M: Component>(&mut self) -> Option<Visibility> {
        let world = self.app.world_mut();
        let mut query = world.query_filtered::<&Visibility, With<M>>();
        query.iter(world).next().copied()
    }

    pub fn global_transform_of<M: Component>(&mut self) -> Option<GlobalTransform> {
        let world = self.app.world_mut();
        let mut query = world.query_filtered::<&GlobalTransform, With<M>>();
        query.iter(world).next().copied()
    }

    /// Drain the recorded events of type `E`.
    pub fn take_events<E: Event + Clone>(&mut self) -> Vec<E> {
        std::mem::take(&mut self.app.world_mut().resource_mut::<Recorded<E>>().0)
    }

    fn rig(&mut self) -> Entity {
        let world = self.app.world_mut();
        let mut query = world.query_filtered::<Entity, With<TrackedController>>();
        match query.iter(world).next() {
            Some(rig) => rig,
            None => panic!("TestScene has no tracked controller"),
        }
    }

    fn buttons_mut(&mut self) -> Mut<'_, ButtonInput<ControllerButton>> {
        self.app
            .world_mut()
            .resource_mut::<ButtonInput<ControllerButton>>()
    }
}

impl Default for TestScene {
    fn default() -> Self {
        Self::new()
    }
}
