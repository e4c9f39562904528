//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Ticks are driven from outside, one call at a time
//! - Seeded RNG only
//! - No rendering or platform dependencies

pub mod car;
pub mod clock;
pub mod collision;
pub mod entity;
pub mod game_loop;
pub mod input;
pub mod road;
pub mod state;
pub mod tick;

pub use car::{Car, CarKind};
pub use clock::FixedStep;
pub use collision::check_all;
pub use entity::{Bounds, Viewport};
pub use game_loop::GameLoop;
pub use input::{Direction, Effect, InputEvent, Key, handle_input};
pub use road::Road;
pub use state::{GameEvent, GamePhase, GameState};
pub use tick::{tick, toggle_pause};
