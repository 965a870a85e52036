//! Axis-aligned bounding box collision detection
//!
//! Every pairwise interaction in the game (projectile/enemy, enemy/player,
//! assist/enemy) reduces to the same rectangle overlap test, so it lives
//! here as a pure function with no tolerance epsilon.

use glam::Vec2;
use serde::Serialize;

/// An axis-aligned rectangle: top-left corner plus extent.
///
/// Screen coordinates: x grows right, y grows down, so `pos.y` is the top
/// edge and `pos.y + size.y` the bottom edge.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Aabb {
    /// Top-left corner
    pub pos: Vec2,
    /// Width and height
    pub size: Vec2,
}

impl Aabb {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            pos: Vec2::new(x, y),
            size: Vec2::new(width, height),
        }
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.pos.x
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.pos.x + self.size.x
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.pos.y
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.pos.y + self.size.y
    }

    /// True iff the rectangles intersect with non-zero area.
    ///
    /// Strict inequalities: boxes that merely touch along an edge do not
    /// overlap.
    #[inline]
    pub fn overlaps(&self, other: &Aabb) -> bool {
        self.left() < other.right()
            && self.right() > other.left()
            && self.top() < other.bottom()
            && self.bottom() > other.top()
    }
}
