//! Vertically scrolling road strip

use serde::{Deserialize, Serialize};

/// One tile of the road background
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Road {
    /// Top edge in screen space, kept in [-viewport_height, viewport_height)
    pub offset: f32,
}

impl Road {
    pub fn new(offset: f32) -> Self {
        Self { offset }
    }

    /// Scroll by `speed`, wrapping by one viewport height. Returns true if it wrapped.
    ///
    /// The overshoot carries over so motion stays continuous.
    pub fn advance(&mut self, speed: f32, viewport_height: f32) -> bool {
        self.offset += speed;
        if self.offset >= viewport_height {
            self.offset -= viewport_height;
            true
        } else if self.offset < -viewport_height {
            self.offset += viewport_height;
            true
        } else {
            false
        }
    }

    /// Re-seat this strip one viewport height away from `lead`, on the side
    /// the scroll is coming from, so the pair keeps covering the screen.
    pub fn tile_against(&mut self, lead: &Road, viewport_height: f32) {
        self.offset = if lead.offset >= 0.0 {
            lead.offset - viewport_height
        } else {
            lead.offset + viewport_height
        };
    }
}

/// Move a strip pair onto a new viewport height, keeping the lower strip's
/// scroll phase and seating the other directly above it.
pub fn relay_pair(roads: &mut [Road; 2], viewport_height: f32) {
    let lead = if roads[0].offset >= roads[1].offset { 0 } else { 1 };
    let mut phase = roads[lead].offset.rem_euclid(viewport_height);
    if phase >= viewport_height {
        // rem_euclid of a tiny negative can round up to the divisor
        phase = 0.0;
    }
    roads[lead].offset = phase;
    let anchor = roads[lead];
    roads[1 - lead].tile_against(&anchor, viewport_height);
}
