//! Formatting utilities for terminal output

use crate::core::{Feedback, LetterStatus, Word};
use crate::game::GuessRecord;
use colored::{ColoredString, Colorize};

/// Colour one letter tile by its status
#[must_use]
pub fn letter_tile(letter: u8, status: LetterStatus) -> ColoredString {
    let tile = format!(" {} ", char::from(letter));
    match status {
        LetterStatus::Correct => tile.white().on_green().bold(),
        LetterStatus::Present => tile.white().on_yellow().bold(),
        LetterStatus::Absent => tile.bright_black().on_black(),
    }
}

/// Render a committed guess as a row of coloured tiles
#[must_use]
pub fn colored_row(word: &Word, feedback: &Feedback) -> String {
    word.letters()
        .iter()
        .zip(feedback.statuses())
        .map(|(&letter, &status)| letter_tile(letter, status).to_string())
        .collect()
}

/// One line of the shareable result, e.g. `2. PYTHOM 🟩🟩🟩🟩🟩⬜`
#[must_use]
pub fn share_line(turn: usize, record: &GuessRecord) -> String {
    format!("{turn}. {} {}", record.word, record.feedback.to_emoji())
}

/// Create a bar showing attempts used out of the maximum
#[must_use]
pub fn attempts_bar(used: usize, max: usize) -> String {
    let used = used.min(max);
    format!("{}{}", "█".repeat(used), "░".repeat(max - used))
}
