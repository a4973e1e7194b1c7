//! Puzzle game engine
//!
//! Owns a single play session: picks the target, applies keys, evaluates
//! guesses and exposes read-only state for rendering.

mod engine;
mod stats;

pub use engine::{Game, GameState, GuessRecord, KeyOutcome, MAX_ATTEMPTS};
pub use stats::Statistics;
