//! Game engine: target selection, key handling and win/loss detection
//!
//! All invalid actions (submitting a short guess, typing past the word length,
//! any key after the game has ended) are silent no-ops. They are reported back
//! as `KeyOutcome::Ignored` so callers can log them, but state is untouched.

use crate::core::{Feedback, Key, LetterStatus, WORD_LENGTH, Word};
use crate::wordlists::{Mode, WordList};
use rand::Rng;
use rustc_hash::FxHashMap;

/// Maximum number of committed guesses per session
pub const MAX_ATTEMPTS: usize = 6;

/// Session state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    Playing,
    Won,
    Lost,
}

impl GameState {
    #[must_use]
    pub const fn is_over(self) -> bool {
        !matches!(self, Self::Playing)
    }
}

/// What a key press did to the session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyOutcome {
    /// Nothing changed
    Ignored,
    /// A letter was appended to the current guess
    Typed(u8),
    /// The last letter of the current guess was removed
    Erased,
    /// The current guess was committed; carries the resulting state
    Committed(GameState),
}

/// A committed guess with its evaluated feedback
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuessRecord {
    pub word: Word,
    pub feedback: Feedback,
}

/// One play-through, from target selection to a terminal state or restart
#[derive(Debug, Clone)]
pub struct Game {
    target: Word,
    mode: Mode,
    guesses: Vec<GuessRecord>,
    current: String,
    state: GameState,
}

impl Game {
    /// Start a session with a random target from `words`
    pub fn new<R: Rng + ?Sized>(words: &WordList, mode: Mode, rng: &mut R) -> Self {
        Self::with_target(pick_target(words, rng), mode)
    }

    /// Start a session with a known target
    #[must_use]
    pub fn with_target(target: Word, mode: Mode) -> Self {
        tracing::info!(%mode, "Started new session");
        Self {
            target,
            mode,
            guesses: Vec::with_capacity(MAX_ATTEMPTS),
            current: String::with_capacity(WORD_LENGTH),
            state: GameState::Playing,
        }
    }

    /// Replace this session with a fresh one
    ///
    /// Valid from any state.
    pub fn restart<R: Rng + ?Sized>(&mut self, words: &WordList, mode: Mode, rng: &mut R) {
        *self = Self::new(words, mode, rng);
    }

    /// Apply a single logical keystroke
    pub fn apply_key(&mut self, key: Key) -> KeyOutcome {
        if self.state.is_over() {
            return KeyOutcome::Ignored;
        }

        let outcome = match key {
            Key::Letter(letter) => self.type_letter(letter),
            Key::Backspace => {
                if self.current.pop().is_some() {
                    KeyOutcome::Erased
                } else {
                    KeyOutcome::Ignored
                }
            }
            Key::Enter => self.submit(),
        };

        tracing::debug!(?key, ?outcome, "Applied key");
        outcome
    }

    fn type_letter(&mut self, letter: u8) -> KeyOutcome {
        if !letter.is_ascii_uppercase() || self.current.len() >= WORD_LENGTH {
            return KeyOutcome::Ignored;
        }
        self.current.push(char::from(letter));
        KeyOutcome::Typed(letter)
    }

    fn submit(&mut self) -> KeyOutcome {
        if self.current.len() != WORD_LENGTH {
            return KeyOutcome::Ignored;
        }
        // The buffer only ever holds uppercase ASCII letters
        let Ok(word) = Word::new(&self.current) else {
            return KeyOutcome::Ignored;
        };
        self.current.clear();

        let feedback = Feedback::evaluate(&word, &self.target);
        let solved = word == self.target;
        self.guesses.push(GuessRecord { word, feedback });

        if solved {
            self.state = GameState::Won;
        } else if self.guesses.len() >= MAX_ATTEMPTS {
            self.state = GameState::Lost;
        }

        if self.state.is_over() {
            tracing::info!(
                state = ?self.state,
                attempts = self.guesses.len(),
                "Session finished"
            );
        }

        KeyOutcome::Committed(self.state)
    }

    #[inline]
    #[must_use]
    pub const fn state(&self) -> GameState {
        self.state
    }

    #[inline]
    #[must_use]
    pub const fn mode(&self) -> Mode {
        self.mode
    }

    /// Letters typed so far for the next guess
    #[inline]
    #[must_use]
    pub fn current_guess(&self) -> &str {
        &self.current
    }

    /// Committed guesses in submission order
    #[inline]
    #[must_use]
    pub fn guesses(&self) -> &[GuessRecord] {
        &self.guesses
    }

    #[must_use]
    pub fn attempts_used(&self) -> usize {
        self.guesses.len()
    }

    #[must_use]
    pub fn attempts_remaining(&self) -> usize {
        MAX_ATTEMPTS - self.guesses.len()
    }

    /// The target, once the session is over
    #[must_use]
    pub fn revealed_target(&self) -> Option<&Word> {
        self.state.is_over().then_some(&self.target)
    }

    /// Best known status for each letter guessed so far
    ///
    /// Letters never guessed are absent from the map.
    #[must_use]
    pub fn letter_hints(&self) -> FxHashMap<u8, LetterStatus> {
        let mut hints: FxHashMap<u8, LetterStatus> = FxHashMap::default();
        for record in &self.guesses {
            for (&letter, &status) in record.word.letters().iter().zip(record.feedback.statuses()) {
                hints
                    .entry(letter)
                    .and_modify(|known| *known = (*known).max(status))
                    .or_insert(status);
            }
        }
        hints
    }
}

fn pick_target<R: Rng + ?Sized>(words: &WordList, rng: &mut R) -> Word {
    // WordList is never empty
    let index = rng.random_range(0..words.len());
    words.words()[index].clone()
}
