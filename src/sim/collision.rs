//! Collision detection
//!
//! Everything is an axis-aligned box: the flyer, each obstacle rectangle, and the two
//! boundary planes tested against the flyer's vertical position.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Axis-aligned bounding box
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Aabb {
    pub min: Vec2,
    pub max: Vec2,
}

impl Aabb {
    pub fn new(min: Vec2, max: Vec2) -> Self {
        Self { min, max }
    }

    /// Box from its bottom-left corner and size
    pub fn from_pos_size(pos: Vec2, size: Vec2) -> Self {
        Self {
            min: pos,
            max: pos + size,
        }
    }

    /// Overlap on both axes. Touching edges count as contact.
    #[inline]
    pub fn overlaps(&self, other: &Aabb) -> bool {
        self.min.x <= other.max.x
            && self.max.x >= other.min.x
            && self.min.y <= other.max.y
            && self.max.y >= other.min.y
    }
}

/// What the flyer ran into
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CollisionKind {
    Obstacle,
    Ground,
    /// Flew off the top of the screen
    Ceiling,
}

/// Find the first collision, if any.
///
/// Obstacles are checked before the boundaries so a crash into a pipe that also dips
/// below the ground line reports the pipe.
pub fn detect(
    flyer: &Aabb,
    obstacles: &[Aabb],
    ground_y: f32,
    ceiling_y: f32,
) -> Option<CollisionKind> {
    if obstacles.iter().any(|o| flyer.overlaps(o)) {
        return Some(CollisionKind::Obstacle);
    }
    if flyer.min.y <= ground_y {
        return Some(CollisionKind::Ground);
    }
    if flyer.min.y > ceiling_y {
        return Some(CollisionKind::Ceiling);
    }
    None
}

pub fn collides(flyer: &Aabb, obstacles: &[Aabb], ground_y: f32, ceiling_y: f32) -> bool {
    detect(flyer, obstacles, ground_y, ceiling_y).is_some()
}
