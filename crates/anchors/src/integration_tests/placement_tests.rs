//! The Place primary action in Create mode.

use bevy::prelude::*;

use crate::anchor::AnchorPlaced;
use crate::config::PLACEMENT_OFFSET;
use crate::controller_input::ControllerButton;
use crate::menu::MenuButton;
use crate::palette::{AnchorPalette, AnchorPrefab};
use crate::rig::PlacementPreview;
use crate::test_harness::TestScene;

#[test]
fn test_trigger_places_anchor_at_preview() {
    let mut scene = TestScene::in_create_mode();
    scene.place_rig(Transform::from_xyz(1.0, 2.0, 3.0));
    scene.tick(1);

    let preview = scene
        .global_transform_of::<PlacementPreview>()
        .map(|g| g.translation())
        .unwrap_or(Vec3::NAN);
    assert!((preview - (Vec3::new(1.0, 2.0, 3.0) + PLACEMENT_OFFSET)).length() < 1e-5);

    scene.tap(ControllerButton::Trigger);

    let anchors = scene.anchors();
    assert_eq!(anchors.len(), 1);
    let (entity, anchor, transform) = anchors[0];
    assert_eq!(anchor.prefab, 0);
    assert!(!anchor.hovered && !anchor.selected);
    assert!((transform.translation - Vec3::new(1.0, 2.0, 2.7)).length() < 1e-5);

    let placed = scene.take_events::<AnchorPlaced>();
    assert_eq!(placed.len(), 1);
    assert_eq!(placed[0].anchor, entity);
}

#[test]
fn test_placed_anchor_keeps_preview_rotation() {
    let mut scene = TestScene::in_create_mode();
    let rotation = Quat::from_rotation_y(0.5);
    scene.place_rig(Transform::from_rotation(rotation));
    scene.tick(1);
    scene.tap(ControllerButton::Trigger);

    let (_, _, transform) = scene.anchors()[0];
    assert!(transform.rotation.angle_between(rotation) < 1e-4);
}

#[test]
fn test_chosen_prefab_is_placed() {
    let mut scene = TestScene::in_create_mode();
    scene.click(MenuButton::AnchorPrefab(1));
    scene.tap(ControllerButton::Trigger);
    scene.tap(ControllerButton::Trigger);

    let anchors = scene.anchors();
    assert_eq!(anchors.len(), 2);
    assert!(anchors.iter().all(|(_, anchor, _)| anchor.prefab == 1));
}

#[test]
fn test_trigger_in_select_mode_places_nothing() {
    let mut scene = TestScene::new();
    scene.tap(ControllerButton::Trigger);
    assert!(scene.anchors().is_empty());
    assert!(scene.take_events::<AnchorPlaced>().is_empty());
}

#[test]
fn test_empty_palette_places_nothing() {
    let mut scene = TestScene::with_palette(AnchorPalette::new(Vec::new()));
    assert_eq!(scene.controller().menu().buttons().len(), 2);

    scene.click(MenuButton::ToggleMode);
    scene.tap(ControllerButton::Trigger);
    assert!(scene.anchors().is_empty());
}

#[test]
fn test_custom_palette_sizes_menu() {
    let palette = AnchorPalette::new(vec![
        AnchorPrefab::new("Pin", Color::WHITE),
        AnchorPrefab::new("Flag", Color::BLACK).with_radius(0.2),
    ]);
    let mut scene = TestScene::with_palette(palette);
    scene.click(MenuButton::ToggleMode);
    assert_eq!(scene.controller().menu().visible_count(), 4);

    scene.click(MenuButton::AnchorPrefab(1));
    scene.tap(ControllerButton::Trigger);
    let placed = scene.anchors();
    assert_eq!(placed.len(), 1);
    assert_eq!(placed[0].1.prefab, 1);
}
