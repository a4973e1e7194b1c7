//! Code Breaker
//!
//! A six-letter word-guessing puzzle with a terminal front end.
//!
//! # Quick Start
//!
//! ```rust
//! use code_breaker::core::{Key, Word};
//! use code_breaker::game::{Game, GameState};
//! use code_breaker::wordlists::Mode;
//!
//! let mut game = Game::with_target(Word::new("python").unwrap(), Mode::Normal);
//! for c in "PYTHON".chars() {
//!     game.apply_key(Key::from_char(c).unwrap());
//! }
//! game.apply_key(Key::Enter);
//! assert_eq!(game.state(), GameState::Won);
//! ```

// Core domain types
pub mod core;

// Session engine
pub mod game;

// Keyboard and pointer input
pub mod input;

// Word lists
pub mod wordlists;

// Stored settings
pub mod config;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
