//! Game state and core simulation types
//!
//! Everything one run needs lives in `GameState`; there are no globals.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::car::Car;
use super::entity::Viewport;
use super::road::{Road, relay_pair};
use crate::config::GameConfig;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Ticks are being scheduled
    Running,
    /// Ticks suspended until the next pause toggle
    Paused,
    /// Player crashed; only a full restart leaves this phase
    GameOver,
}

/// Things that happened during a tick, for the host to react to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    /// A traffic car entered at the top edge
    TrafficSpawned { id: u32 },
    /// A traffic car left the bottom edge and was scored
    TrafficPassed { id: u32, score: u64 },
    /// The player hit a traffic car (terminal)
    Crashed { id: u32 },
}

/// Complete state of one run
#[derive(Debug, Clone)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    rng: Pcg32,
    /// Cars that left the screen
    pub score: u64,
    pub phase: GamePhase,
    /// Scroll speed per tick
    pub speed: f32,
    /// Chance per tick of a new traffic car
    pub spawn_chance: f32,
    pub traffic_size: Vec2,
    pub viewport: Viewport,
    /// Two strips tiled to cover the viewport
    pub roads: [Road; 2],
    pub player: Car,
    /// Active traffic, in spawn order
    pub traffic: Vec<Car>,
    /// Simulation tick counter
    pub time_ticks: u64,
    /// Next entity ID
    next_id: u32,
}

impl GameState {
    /// Fresh run: player centred horizontally, halfway down, no traffic
    pub fn new(config: &GameConfig, viewport: Viewport, seed: u64) -> Self {
        let size = config.player_size;
        let mut player = Car::player(
            0,
            Vec2::new(viewport.width / 2.0 - size.x / 2.0, viewport.height / 2.0),
            size,
        );
        player.bounds.clamp_within(viewport);

        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            score: 0,
            phase: GamePhase::Running,
            speed: config.speed,
            spawn_chance: config.spawn_chance,
            traffic_size: config.traffic_size,
            viewport,
            roads: [Road::new(0.0), Road::new(-viewport.height)],
            player,
            traffic: Vec::new(),
            time_ticks: 0,
            next_id: 1,
        }
    }

    /// Allocate a new entity ID
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Roll the per-tick spawn chance
    pub(crate) fn roll_spawn(&mut self) -> bool {
        self.rng.random::<f32>() < self.spawn_chance
    }

    /// Random x for a new traffic car, fully on-screen horizontally
    pub(crate) fn random_lane_x(&mut self) -> f32 {
        let max_x = (self.viewport.width - self.traffic_size.x).max(0.0);
        self.rng.random::<f32>() * max_x
    }

    /// Add a traffic car at an explicit position and return its ID
    pub fn spawn_traffic_at(&mut self, pos: Vec2) -> u32 {
        let id = self.next_entity_id();
        self.traffic.push(Car::traffic(id, pos, self.traffic_size));
        id
    }

    /// Host viewport changed; keep the player on-screen and the road tiled
    pub fn resize(&mut self, viewport: Viewport) {
        self.viewport = viewport;
        self.player.bounds.clamp_within(viewport);
        relay_pair(&mut self.roads, viewport.height);
    }

    pub fn is_running(&self) -> bool {
        self.phase == GamePhase::Running
    }
}
