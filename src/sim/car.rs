//! Player and traffic cars

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::entity::{Bounds, Viewport};

/// Who drives the car
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CarKind {
    /// Moved by input only, clamped to the viewport
    Player,
    /// Scrolls down with the road, unclamped
    Traffic,
}

/// A car entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Car {
    pub id: u32,
    pub kind: CarKind,
    pub bounds: Bounds,
    /// Cleared once a traffic car leaves the bottom edge
    pub alive: bool,
}

impl Car {
    pub fn player(id: u32, pos: Vec2, size: Vec2) -> Self {
        Self {
            id,
            kind: CarKind::Player,
            bounds: Bounds { pos, size },
            alive: true,
        }
    }

    pub fn traffic(id: u32, pos: Vec2, size: Vec2) -> Self {
        Self {
            id,
            kind: CarKind::Traffic,
            bounds: Bounds { pos, size },
            alive: true,
        }
    }

    #[inline]
    pub fn is_player(&self) -> bool {
        self.kind == CarKind::Player
    }

    #[inline]
    pub fn pos(&self) -> Vec2 {
        self.bounds.pos
    }

    #[inline]
    pub fn size(&self) -> Vec2 {
        self.bounds.size
    }

    /// Scroll a traffic car down by `speed`. The player does not scroll.
    ///
    /// The car still moves on the tick it crosses the bottom edge; it is only
    /// flagged dead here and collected by the caller.
    pub fn advance(&mut self, speed: f32, viewport_height: f32) {
        match self.kind {
            CarKind::Player => {}
            CarKind::Traffic => {
                self.bounds.pos.y += speed;
                if self.bounds.pos.y > viewport_height {
                    self.alive = false;
                }
            }
        }
    }

    /// Nudge the player, then clamp it inside the viewport. Ignored for traffic.
    pub fn move_by(&mut self, delta: Vec2, viewport: Viewport) {
        if !self.is_player() {
            return;
        }
        self.bounds.pos += delta;
        self.bounds.clamp_within(viewport);
    }

    pub fn overlaps(&self, other: &Car) -> bool {
        self.bounds.overlaps(&other.bounds)
    }
}
