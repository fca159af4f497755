//! Neighborhood Map Geometry
//!
//! Static obstacle table, house footprints, and the playable interior.
//! Everything here is a pure function of constants; nothing is cached.

use serde::{Serialize, Deserialize};

use crate::core::vec2::{Rect, Vec2};

/// House footprint edge length (pixels). Houses are square.
pub const HOUSE_SIZE: f32 = 64.0;

/// Anchor (top-left corner) of the player's own house.
pub const PLAYER_HOUSE_ANCHOR: Vec2 = Vec2::new(750.0, 200.0);

/// What an obstacle is made of.
///
/// Fences form the closed boundary frame; the rest are terrain features
/// scattered inside it. Collision treats all kinds identically.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ObstacleKind {
    /// Tree trunk block
    Tree,
    /// Bush cluster
    Bush,
    /// Boundary fence segment
    Fence,
    /// Water feature
    Water,
}

/// A static collision rectangle on the map.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Obstacle {
    /// Collision rectangle
    pub rect: Rect,
    /// Material kind
    pub kind: ObstacleKind,
}

impl Obstacle {
    const fn new(x: f32, y: f32, width: f32, height: f32, kind: ObstacleKind) -> Self {
        Self {
            rect: Rect::new(x, y, width, height),
            kind,
        }
    }
}

/// The fixed obstacle set: 5 trees, 3 bushes, 4 fences, 2 waters.
static OBSTACLES: [Obstacle; 14] = [
    // Trees along the top fence
    Obstacle::new(32.0, 16.0, 48.0, 48.0, ObstacleKind::Tree),
    Obstacle::new(160.0, 16.0, 48.0, 48.0, ObstacleKind::Tree),
    Obstacle::new(288.0, 16.0, 48.0, 48.0, ObstacleKind::Tree),
    Obstacle::new(416.0, 16.0, 48.0, 48.0, ObstacleKind::Tree),
    Obstacle::new(544.0, 16.0, 48.0, 48.0, ObstacleKind::Tree),
    // Bushes around the houses
    Obstacle::new(320.0, 160.0, 32.0, 32.0, ObstacleKind::Bush),
    Obstacle::new(368.0, 160.0, 32.0, 32.0, ObstacleKind::Bush),
    Obstacle::new(416.0, 160.0, 32.0, 32.0, ObstacleKind::Bush),
    // Boundary fences (closed frame)
    Obstacle::new(0.0, 0.0, 1536.0, 16.0, ObstacleKind::Fence),
    Obstacle::new(0.0, 704.0, 1536.0, 16.0, ObstacleKind::Fence),
    Obstacle::new(0.0, 0.0, 16.0, 720.0, ObstacleKind::Fence),
    Obstacle::new(1520.0, 0.0, 16.0, 720.0, ObstacleKind::Fence),
    // Water features
    Obstacle::new(96.0, 480.0, 64.0, 32.0, ObstacleKind::Water),
    Obstacle::new(1376.0, 480.0, 64.0, 32.0, ObstacleKind::Water),
];

/// The static obstacle table, in declaration order.
pub fn obstacles() -> &'static [Obstacle] {
    &OBSTACLES
}

/// Collision rectangle of a house placed at `anchor`.
#[inline]
pub fn house_rect(anchor: Vec2) -> Rect {
    Rect::new(anchor.x, anchor.y, HOUSE_SIZE, HOUSE_SIZE)
}

/// Visual center of a house placed at `anchor`.
///
/// Proximity prompts measure against this point, not the anchor.
#[inline]
pub fn house_center(anchor: Vec2) -> Vec2 {
    Vec2::new(anchor.x + HOUSE_SIZE / 2.0, anchor.y + HOUSE_SIZE / 2.0)
}

/// The playable interior the actor's bounds must stay inside.
///
/// Strictly inside the fence frame, with margin so a centered actor never
/// visually clips the fence sprite.
pub fn map_bounds() -> Rect {
    Rect::new(16.0, 24.0, 1248.0, 672.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_obstacle_table_shape() {
        let obs = obstacles();
        assert_eq!(obs.len(), 14);
        assert_eq!(obs.iter().filter(|o| o.kind == ObstacleKind::Tree).count(), 5);
        assert_eq!(obs.iter().filter(|o| o.kind == ObstacleKind::Bush).count(), 3);
        assert_eq!(obs.iter().filter(|o| o.kind == ObstacleKind::Fence).count(), 4);
        assert_eq!(obs.iter().filter(|o| o.kind == ObstacleKind::Water).count(), 2);
    }

    #[test]
    fn test_fences_frame_the_map() {
        let fences: Vec<_> = obstacles()
            .iter()
            .filter(|o| o.kind == ObstacleKind::Fence)
            .collect();

        // Top, bottom, left, right
        assert!(fences.iter().any(|f| f.rect.top() == 0.0 && f.rect.width == 1536.0));
        assert!(fences.iter().any(|f| f.rect.top() == 704.0 && f.rect.width == 1536.0));
        assert!(fences.iter().any(|f| f.rect.left() == 0.0 && f.rect.height == 720.0));
        assert!(fences.iter().any(|f| f.rect.left() == 1520.0 && f.rect.height == 720.0));
    }

    #[test]
    fn test_bounds_inside_fence_frame() {
        let bounds = map_bounds();
        assert_eq!(bounds.left(), 16.0);
        assert_eq!(bounds.right(), 1264.0);
        assert_eq!(bounds.top(), 24.0);
        assert_eq!(bounds.bottom(), 696.0);
    }

    #[test]
    fn test_house_rect_and_center() {
        let rect = house_rect(Vec2::new(750.0, 200.0));
        assert_eq!(rect.right(), 814.0);
        assert_eq!(rect.bottom(), 264.0);

        let center = house_center(Vec2::new(375.0, 180.0));
        assert_eq!(center, Vec2::new(407.0, 212.0));
    }
}
