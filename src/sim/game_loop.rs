//! The game loop: owns the run state and its tick source

use super::clock::FixedStep;
use super::entity::Viewport;
use super::input::{Effect, InputEvent, handle_input};
use super::state::{GameEvent, GamePhase, GameState};
use super::tick::tick;
use crate::config::GameConfig;

pub struct GameLoop {
    config: GameConfig,
    state: GameState,
    clock: FixedStep,
}

impl GameLoop {
    pub fn new(config: GameConfig, viewport: Viewport, seed: u64) -> Self {
        let state = GameState::new(&config, viewport, seed);
        let clock = FixedStep::new(config.tick_interval_ms());
        log::info!("Game started with seed {}", seed);
        Self {
            config,
            state,
            clock,
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn phase(&self) -> GamePhase {
        self.state.phase
    }

    /// Run the ticks due for `elapsed_ms` of host time.
    ///
    /// Only `Running` produces ticks; stops early if a tick ends the game.
    pub fn frame(&mut self, elapsed_ms: f64) -> Vec<GameEvent> {
        if !self.state.is_running() {
            return Vec::new();
        }

        let due = self.clock.advance(elapsed_ms);
        let mut events = Vec::new();
        for _ in 0..due {
            events.extend(tick(&mut self.state));
            if !self.state.is_running() {
                break;
            }
        }
        events
    }

    /// Route an input event; resuming drops any time that built up while paused
    pub fn input(&mut self, event: InputEvent) -> Option<Effect> {
        let before = self.state.phase;
        let effect = handle_input(&mut self.state, event);
        if before != GamePhase::Running && self.state.is_running() {
            self.clock.reset();
        }
        effect
    }

    pub fn resize(&mut self, viewport: Viewport) {
        self.state.resize(viewport);
    }

    /// Throw the run away and start over from the config
    pub fn restart(&mut self, seed: u64) {
        let viewport = self.state.viewport;
        self.state = GameState::new(&self.config, viewport, seed);
        self.clock.reset();
        log::info!("Game restarted with seed {}", seed);
    }
}
