//! Lane Dodger - A top-down traffic dodging game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (entities, collisions, game loop)
//! - `renderer`: Render snapshots and the DOM writer
//! - `config`: Data-driven game tunables
//! - `audio`: Background music track (web only)

#[cfg(target_arch = "wasm32")]
pub mod audio;
pub mod config;
pub mod renderer;
pub mod sim;

pub use config::{ConfigError, GameConfig};

/// Game configuration constants
pub mod consts {
    /// Fixed simulation rate
    pub const TICK_HZ: u32 = 60;
    /// Maximum ticks run for a single frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 4;

    /// Scroll speed in pixels per tick, also the player's step per key press
    pub const DEFAULT_SPEED: f32 = 8.0;
    /// Chance per tick that a new traffic car appears
    pub const DEFAULT_SPAWN_CHANCE: f32 = 0.03;

    /// Car sprite dimensions
    pub const CAR_WIDTH: f32 = 60.0;
    pub const CAR_HEIGHT: f32 = 120.0;

    /// Background track volume
    pub const DEFAULT_MUSIC_VOLUME: f32 = 0.2;
}
