//! Vertical motion of the flyer
//!
//! One integration step per tick. Velocities are in units/tick, so nothing here is
//! scaled by real elapsed time.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::collision::Aabb;

/// The player-controlled entity. `pos` is the bottom-left corner of its box (y-up).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Flyer {
    pub pos: Vec2,
    pub vel_y: f32,
    pub size: Vec2,
}

impl Flyer {
    pub fn new(pos: Vec2, size: Vec2) -> Self {
        Self {
            pos,
            vel_y: 0.0,
            size,
        }
    }

    pub fn bounds(&self) -> Aabb {
        Aabb::from_pos_size(self.pos, self.size)
    }
}

/// Per-tick physics constants
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Physics {
    pub gravity: f32,
    pub flap_impulse: f32,
    pub max_fall_speed: f32,
}

/// Advance the flyer by one tick.
///
/// A flap *sets* the velocity, so flapping while already rising does not stack.
/// Position is left unclamped; leaving the playfield is a collision, not a wall.
pub fn integrate(mut flyer: Flyer, physics: &Physics, impulse: bool) -> Flyer {
    if impulse {
        flyer.vel_y = physics.flap_impulse;
    } else {
        flyer.vel_y = (flyer.vel_y + physics.gravity).max(-physics.max_fall_speed);
    }
    flyer.pos.y += flyer.vel_y;
    flyer
}
