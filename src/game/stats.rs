//! Per-run play statistics
//!
//! Kept in memory for the lifetime of the front end; nothing is persisted.

use super::engine::{Game, GameState, MAX_ATTEMPTS};

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Statistics {
    pub total_games: usize,
    pub games_won: usize,
    /// Index `n` counts wins in `n` guesses; index 0 is unused
    pub guess_distribution: [usize; MAX_ATTEMPTS + 1],
}

impl Statistics {
    /// Record a finished session; sessions still in play are ignored
    pub fn record(&mut self, game: &Game) {
        match game.state() {
            GameState::Playing => {}
            GameState::Won => {
                self.total_games += 1;
                self.games_won += 1;
                self.guess_distribution[game.attempts_used()] += 1;
            }
            GameState::Lost => self.total_games += 1,
        }
    }

    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.total_games == 0 {
            0.0
        } else {
            self.games_won as f64 / self.total_games as f64 * 100.0
        }
    }
}
