//! Anchor prefabs the user can place, and which one is current.

use bevy::prelude::*;

use crate::config::DEFAULT_ANCHOR_RADIUS;

/// Template for a placeable anchor.
#[derive(Debug, Clone, PartialEq)]
pub struct AnchorPrefab {
    pub name: String,
    pub color: Color,
    /// Ray collider radius (metres).
    pub radius: f32,
}

impl AnchorPrefab {
    pub fn new(name: impl Into<String>, color: Color) -> Self {
        Self {
            name: name.into(),
            color,
            radius: DEFAULT_ANCHOR_RADIUS,
        }
    }

    pub fn with_radius(mut self, radius: f32) -> Self {
        self.radius = radius;
        self
    }
}

/// Ordered prefab list plus the index the place action uses.
///
/// Each prefab gets a menu button in Create mode. Insert a custom palette
/// before `AnchorsPlugin` to change the list.
#[derive(Resource, Debug, Clone, PartialEq)]
pub struct AnchorPalette {
    prefabs: Vec<AnchorPrefab>,
    current: usize,
}

impl Default for AnchorPalette {
    fn default() -> Self {
        Self::new(vec![
            AnchorPrefab::new("Marker", Color::srgb(1.0, 0.55, 0.1)),
            AnchorPrefab::new("Beacon", Color::srgb(0.2, 0.75, 1.0)),
            AnchorPrefab::new("Waypoint", Color::srgb(0.35, 0.9, 0.4)),
        ])
    }
}

impl AnchorPalette {
    pub fn new(prefabs: Vec<AnchorPrefab>) -> Self {
        Self {
            prefabs,
            current: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.prefabs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.prefabs.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&AnchorPrefab> {
        self.prefabs.get(index)
    }

    pub fn prefabs(&self) -> &[AnchorPrefab] {
        &self.prefabs
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn current(&self) -> Option<&AnchorPrefab> {
        self.prefabs.get(self.current)
    }

    /// Make `index` the current prefab. Returns `false` (and changes nothing)
    /// when the index is out of range.
    pub fn choose(&mut self, index: usize) -> bool {
        if index >= self.prefabs.len() {
            return false;
        }
        self.current = index;
        true
    }
}
