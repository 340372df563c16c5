//! Controller-driven spatial anchors.
//!
//! A tracked controller points a ray at anchors in the scene. In Select mode
//! the trigger selects the hovered anchor; in Create mode it places a new
//! anchor at the placement preview. A small menu, driven by the thumbstick and
//! a confirm button, toggles the mode, requests anchor loading and picks the
//! prefab to place.
//!
//! All state lives in the [`ModeController`](controller::ModeController)
//! resource. Systems run in [`AnchorsSet`] order each frame.

use bevy::prelude::*;

pub mod anchor;
pub mod config;
pub mod controller;
pub mod controller_input;
pub mod interaction;
pub mod menu;
pub mod mode;
pub mod palette;
pub mod pointer;
pub mod rig;

#[cfg(test)]
mod integration_tests;
#[cfg(test)]
pub mod test_harness;

use anchor::{AnchorEvent, AnchorPlaced, LoadAnchorsRequested};
use controller::ModeController;
use controller_input::{ControllerBindings, ControllerButton};
use menu::MenuButtonPressed;
use palette::AnchorPalette;
use pointer::PointerRay;

/// Ordering of the per-frame interaction work.
#[derive(SystemSet, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AnchorsSet {
    /// Cast the controller ray and update hover.
    Pointer,
    /// Menu focus, navigation, primary action and menu callbacks.
    Interaction,
    /// Mirror controller state onto scene objects.
    Sync,
}

pub struct AnchorsPlugin;

impl Plugin for AnchorsPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<ControllerBindings>()
            .init_resource::<ButtonInput<ControllerButton>>()
            .init_resource::<AnchorPalette>()
            .init_resource::<ModeController>()
            .init_resource::<PointerRay>()
            .add_event::<AnchorEvent>()
            .add_event::<AnchorPlaced>()
            .add_event::<LoadAnchorsRequested>()
            .add_event::<MenuButtonPressed>()
            .configure_sets(
                Update,
                (AnchorsSet::Pointer, AnchorsSet::Interaction, AnchorsSet::Sync).chain(),
            )
            .add_systems(
                Startup,
                (rig::spawn_controller_rig, interaction::start_controller),
            )
            .add_systems(
                PreUpdate,
                controller_input::map_controller_input.after(bevy::input::InputSystem),
            )
            .add_systems(Update, pointer::update_pointer_ray.in_set(AnchorsSet::Pointer))
            .add_systems(
                Update,
                (
                    interaction::refocus_menu,
                    interaction::handle_menu_navigation,
                    interaction::dispatch_primary_action,
                    interaction::handle_menu_buttons,
                    interaction::forget_despawned_anchors,
                )
                    .chain()
                    .in_set(AnchorsSet::Interaction),
            )
            .add_systems(
                Update,
                (interaction::sync_mode_objects, interaction::sync_anchor_flags)
                    .in_set(AnchorsSet::Sync),
            )
            .add_systems(Last, controller_input::clear_controller_input);
    }
}
