//! Collision Detection
//!
//! Pure AABB overlap tests for the walking actor against the static world,
//! house placements, and the map boundary. No side effects, total over the
//! whole coordinate domain.

use crate::core::vec2::{Rect, Vec2};
use crate::game::world::{house_rect, map_bounds, obstacles};

/// Actor half-width (pixels).
pub const ACTOR_HALF_WIDTH: f32 = 16.0;

/// Actor half-height above the position origin (pixels).
pub const ACTOR_HALF_ABOVE: f32 = 24.0;

/// Actor half-height below the position origin (pixels).
pub const ACTOR_HALF_BELOW: f32 = 24.0;

/// Collision footprint of the actor standing at `position`.
///
/// 32 wide by 48 tall, centered horizontally, with the origin at the
/// sprite's feet offset.
#[inline]
pub fn actor_bounds(position: Vec2) -> Rect {
    Rect::new(
        position.x - ACTOR_HALF_WIDTH,
        position.y - ACTOR_HALF_ABOVE,
        ACTOR_HALF_WIDTH * 2.0,
        ACTOR_HALF_ABOVE + ACTOR_HALF_BELOW,
    )
}

/// Test whether an actor at `candidate` would collide with anything.
///
/// Checks every static obstacle, a house rectangle per entry in
/// `house_anchors` (teammates plus the player's own), and finally the map
/// boundary: bounds that leave the playable interior count as a collision.
/// Edge-touching is not a collision (open-interval overlap).
pub fn collides(candidate: Vec2, house_anchors: &[Vec2]) -> bool {
    let bounds = actor_bounds(candidate);

    for obstacle in obstacles() {
        if bounds.overlaps(&obstacle.rect) {
            return true;
        }
    }

    for anchor in house_anchors {
        if bounds.overlaps(&house_rect(*anchor)) {
            return true;
        }
    }

    !map_bounds().contains_rect(&bounds)
}
