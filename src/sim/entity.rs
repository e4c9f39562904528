//! Shared position/bounds abstraction for roads and cars
//!
//! Screen space: origin at the top-left, +y pointing down.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Visible play area, read from the host display
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

/// An axis-aligned box
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    /// Top-left corner
    pub pos: Vec2,
    pub size: Vec2,
}

impl Bounds {
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

    /// Inclusive AABB test: true unless strictly separated on either axis.
    ///
    /// Boxes sharing an edge (zero gap) count as overlapping.
    pub fn overlaps(&self, other: &Bounds) -> bool {
        !(self.bottom() < other.top()
            || self.top() > other.bottom()
            || self.right() < other.left()
            || self.left() > other.right())
    }

    /// Keep the box fully inside the viewport.
    ///
    /// A viewport narrower (or shorter) than the box pins it to 0 on that axis.
    pub fn clamp_within(&mut self, viewport: Viewport) {
        let max_x = (viewport.width - self.size.x).max(0.0);
        let max_y = (viewport.height - self.size.y).max(0.0);
        self.pos.x = self.pos.x.clamp(0.0, max_x);
        self.pos.y = self.pos.y.clamp(0.0, max_y);
    }
}
