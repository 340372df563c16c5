//! Controller ray casting against [`RayTarget`] bounding spheres.

use bevy::math::bounding::{BoundingSphere, RayCast3d};
use bevy::prelude::*;

use crate::anchor::{Anchor, AnchorEvent, RayTarget};
use crate::config::{RAY_LINE_LENGTH, RAY_MAX_DISTANCE};
use crate::controller::ModeController;
use crate::rig::TrackedController;

/// Last cast of the controller ray, for drawing the line.
#[derive(Resource, Debug, Clone, Copy, PartialEq, Default)]
pub struct PointerRay {
    pub origin: Vec3,
    /// Hit point on an anchor, or [`RAY_LINE_LENGTH`] along the ray.
    pub end: Vec3,
    /// Anchor the ray currently ends on.
    pub anchor: Option<Entity>,
}

/// Nearest target intersected by a ray.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RayHit {
    pub entity: Entity,
    pub distance: f32,
    pub is_anchor: bool,
}

/// A candidate for [`cast_ray`]: entity, world centre, radius, is-anchor.
pub type RayCandidate = (Entity, Vec3, f32, bool);

/// Cast from `origin` along `direction` and return the nearest hit.
pub fn cast_ray(
    origin: Vec3,
    direction: Dir3,
    candidates: impl IntoIterator<Item = RayCandidate>,
) -> Option<RayHit> {
    let cast = RayCast3d::from_ray(Ray3d { origin, direction }, RAY_MAX_DISTANCE);

    candidates
        .into_iter()
        .filter_map(|(entity, center, radius, is_anchor)| {
            cast.sphere_intersection_at(&BoundingSphere::new(center, radius))
                .map(|distance| RayHit {
                    entity,
                    distance,
                    is_anchor,
                })
        })
        .min_by(|a, b| a.distance.total_cmp(&b.distance))
}

/// Cast the controller ray and feed the result to the controller's hover.
///
/// Runs only while the ray line is active (Select mode). Only the nearest
/// target counts: a non-anchor target in front of an anchor clears the hover.
pub fn update_pointer_ray(
    mut controller: ResMut<ModeController>,
    mut pointer: ResMut<PointerRay>,
    rig: Query<&GlobalTransform, With<TrackedController>>,
    targets: Query<(Entity, &GlobalTransform, &RayTarget, Has<Anchor>)>,
    mut anchor_events: EventWriter<AnchorEvent>,
) {
    if !controller.ray_line_active() {
        return;
    }
    let Ok(origin) = rig.get_single() else {
        return;
    };

    let start = origin.translation();
    let direction = origin.forward();
    let hit = cast_ray(
        start,
        direction,
        targets
            .iter()
            .map(|(entity, global, target, is_anchor)| {
                (entity, global.translation(), target.radius, is_anchor)
            }),
    )
    .filter(|hit| hit.is_anchor);

    let anchor = hit.map(|hit| hit.entity);
    let end = match hit {
        Some(hit) => start + *direction * hit.distance,
        None => start + *direction * RAY_LINE_LENGTH,
    };
    pointer.set_if_neq(PointerRay {
        origin: start,
        end,
        anchor,
    });

    if controller.hovered() == anchor {
        return;
    }
    for event in controller.hover_update(anchor) {
        debug!("anchor ray: {:?}", event);
        anchor_events.send(event);
    }
}
