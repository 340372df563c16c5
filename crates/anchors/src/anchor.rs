//! Anchor components and the events published when anchors change state.

use bevy::prelude::*;

/// A placed spatial anchor.
///
/// `hovered` and `selected` mirror the [`ModeController`](crate::controller::ModeController)
/// references and are written by the sync systems only.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub struct Anchor {
    /// Index of the palette prefab the anchor was placed from.
    pub prefab: usize,
    pub hovered: bool,
    pub selected: bool,
}

impl Anchor {
    pub fn new(prefab: usize) -> Self {
        Self {
            prefab,
            hovered: false,
            selected: false,
        }
    }
}

/// Bounding sphere the controller ray can hit.
///
/// Entities with a `RayTarget` but no [`Anchor`] still block the ray; hitting
/// them clears the hover.
#[derive(Component, Debug, Clone, Copy, PartialEq)]
pub struct RayTarget {
    /// World-space radius (metres).
    pub radius: f32,
}

impl RayTarget {
    pub fn new(radius: f32) -> Self {
        Self { radius }
    }
}

/// Hover and selection transitions, in the order they happened.
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnchorEvent {
    HoverStarted(Entity),
    HoverEnded(Entity),
    Selected(Entity),
    Deselected(Entity),
}

impl AnchorEvent {
    pub fn anchor(self) -> Entity {
        match self {
            Self::HoverStarted(e) | Self::HoverEnded(e) | Self::Selected(e) | Self::Deselected(e) => e,
        }
    }
}

/// Sent after the place action spawns an anchor.
#[derive(Event, Debug, Clone, Copy, PartialEq)]
pub struct AnchorPlaced {
    pub anchor: Entity,
    pub prefab: usize,
    pub transform: Transform,
}

/// Sent when the "Load Anchors" menu button is pressed.
///
/// Loading saved anchors belongs to an external loader; nothing in this crate
/// reads this event.
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LoadAnchorsRequested;
