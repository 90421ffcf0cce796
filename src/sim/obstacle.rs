//! Scrolling obstacle pairs
//!
//! A pair is an upper and a lower rectangle sharing one x coordinate, separated by a
//! gap described by its center and height. Pairs are never destroyed: once the trailing
//! edge leaves the screen they are recycled to the right with a fresh gap.

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::collision::Aabb;

/// Ranges a fresh gap is drawn from. Both are validated by the session config.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GapLayout {
    /// (min, max) gap center height
    pub band: (f32, f32),
    /// (min, max) gap height
    pub range: (f32, f32),
}

impl GapLayout {
    /// Draw an independent center and height
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> (f32, f32) {
        let center = rng.random_range(self.band.0..=self.band.1);
        let height = rng.random_range(self.range.0..=self.range.1);
        (center, height)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ObstaclePair {
    /// Left edge of both rectangles
    pub x: f32,
    pub gap_center: f32,
    pub gap_height: f32,
    /// Size of each rectangle
    pub size: Vec2,
}

impl ObstaclePair {
    pub fn new(x: f32, gap_center: f32, gap_height: f32, size: Vec2) -> Self {
        Self {
            x,
            gap_center,
            gap_height,
            size,
        }
    }

    /// Right edge; scoring and recycling both key off it
    #[inline]
    pub fn trailing_edge(&self) -> f32 {
        self.x + self.size.x
    }

    pub fn gap_top(&self) -> f32 {
        self.gap_center + self.gap_height / 2.0
    }

    pub fn gap_bottom(&self) -> f32 {
        self.gap_center - self.gap_height / 2.0
    }

    /// Rectangle hanging down from above, bottom edge at the top of the gap
    pub fn upper(&self) -> Aabb {
        Aabb::from_pos_size(Vec2::new(self.x, self.gap_top()), self.size)
    }

    /// Rectangle standing below, top edge at the bottom of the gap
    pub fn lower(&self) -> Aabb {
        Aabb::from_pos_size(
            Vec2::new(self.x, self.gap_bottom() - self.size.y),
            self.size,
        )
    }

    pub fn bounds(&self) -> [Aabb; 2] {
        [self.upper(), self.lower()]
    }

    /// Scroll by `speed` (negative = leftward).
    ///
    /// Returns true if the trailing edge crossed `pass_x` during this step. Since the
    /// edge moves monotonically left between recycles, this fires once per traversal
    /// regardless of step size.
    pub fn advance(&mut self, speed: f32, pass_x: f32) -> bool {
        let before = self.trailing_edge();
        self.x += speed;
        let after = self.trailing_edge();
        before >= pass_x && after < pass_x
    }

    /// Fully scrolled past the left edge of the screen
    pub fn is_off_screen(&self) -> bool {
        self.trailing_edge() < 0.0
    }

    /// Move back to `x` with a new gap
    pub fn recycle(&mut self, x: f32, gap_center: f32, gap_height: f32) {
        self.x = x;
        self.gap_center = gap_center;
        self.gap_height = gap_height;
    }
}
