//! Rendering module
//!
//! `frame` snapshots the simulation; `dom` writes a snapshot to the page.

#[cfg(target_arch = "wasm32")]
pub mod dom;
pub mod frame;

#[cfg(target_arch = "wasm32")]
pub use dom::DomRenderer;
pub use frame::{Frame, Sprite, score_text};
