//! Read-only render snapshot of the game state
//!
//! The simulation never touches the display; a host reads a `Frame` and
//! applies it to whatever surface it draws on.

use glam::Vec2;

use crate::sim::{CarKind, GamePhase, GameState};

/// One car to draw
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sprite {
    pub id: u32,
    pub kind: CarKind,
    pub pos: Vec2,
    pub size: Vec2,
}

/// Everything the render surface needs for one frame
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    /// Top edge of each road strip
    pub road_offsets: [f32; 2],
    pub player: Sprite,
    pub traffic: Vec<Sprite>,
    pub score_text: String,
    pub restart_visible: bool,
    pub paused: bool,
}

impl Frame {
    pub fn capture(state: &GameState) -> Self {
        let sprite = |car: &crate::sim::Car| Sprite {
            id: car.id,
            kind: car.kind,
            pos: car.pos(),
            size: car.size(),
        };

        Self {
            road_offsets: [state.roads[0].offset, state.roads[1].offset],
            player: sprite(&state.player),
            traffic: state.traffic.iter().map(sprite).collect(),
            score_text: score_text(state.score),
            restart_visible: state.phase == GamePhase::GameOver,
            paused: state.phase == GamePhase::Paused,
        }
    }
}

pub fn score_text(score: u64) -> String {
    format!("Score: {}", score)
}
