//! Colour palettes for normal and secret mode
//!
//! Tile colours are shared; only the accent used for borders, headers and the
//! current row changes with the mode.

use crate::core::LetterStatus;
use crate::wordlists::Mode;
use ratatui::style::Color;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    pub accent: Color,
    pub text: Color,
    pub muted: Color,
    pub correct_bg: Color,
    pub present_bg: Color,
    pub absent_bg: Color,
    pub key_bg: Color,
    pub empty_fg: Color,
    pub error: Color,
}

impl Theme {
    /// Emerald palette
    pub const NORMAL: Self = Self {
        accent: Color::Rgb(16, 185, 129),
        text: Color::Rgb(255, 255, 255),
        muted: Color::Rgb(148, 163, 184),
        correct_bg: Color::Rgb(5, 150, 105),
        present_bg: Color::Rgb(202, 138, 4),
        absent_bg: Color::Rgb(30, 41, 59),
        key_bg: Color::Rgb(51, 65, 85),
        empty_fg: Color::Rgb(71, 85, 105),
        error: Color::Rgb(248, 113, 113),
    };

    /// Pink palette
    pub const SECRET: Self = Self {
        accent: Color::Rgb(236, 72, 153),
        ..Self::NORMAL
    };

    #[must_use]
    pub const fn for_mode(mode: Mode) -> Self {
        match mode {
            Mode::Normal => Self::NORMAL,
            Mode::Secret => Self::SECRET,
        }
    }

    /// Background for a tile or key with a known status
    #[must_use]
    pub const fn status_bg(&self, status: LetterStatus) -> Color {
        match status {
            LetterStatus::Correct => self.correct_bg,
            LetterStatus::Present => self.present_bg,
            LetterStatus::Absent => self.absent_bg,
        }
    }
}
