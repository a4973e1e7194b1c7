//! Core domain types for the puzzle
//!
//! This module contains the fundamental domain types with no I/O and no
//! randomness. Everything here is pure and directly testable.

mod feedback;
mod key;
mod word;

pub use feedback::{Feedback, LetterStatus};
pub use key::Key;
pub use word::{WORD_LENGTH, Word, WordError};
