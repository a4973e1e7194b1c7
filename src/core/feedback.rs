//! Guess feedback calculation and representation
//!
//! Each position of a committed guess gets one of three statuses:
//! - Correct: the letter is in that exact position of the target
//! - Present: the letter appears somewhere else in the target
//! - Absent: the letter does not appear in the target
//!
//! Presence is a plain containment check. It is not limited by how many times
//! a letter occurs in the target, so guessing `EEEEEE` against `DEPLOY` marks
//! one `E` correct and the other five present.

use super::word::{WORD_LENGTH, Word};

/// Status of a single letter in a committed guess
///
/// Ordered by strength so hints for the same letter can be merged with `max`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum LetterStatus {
    Absent,
    Present,
    Correct,
}

impl LetterStatus {
    /// Emoji square used in shareable rows
    #[must_use]
    pub const fn emoji(self) -> char {
        match self {
            Self::Correct => '🟩',
            Self::Present => '🟨',
            Self::Absent => '⬜',
        }
    }
}

/// Per-position feedback for one committed guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Feedback([LetterStatus; WORD_LENGTH]);

impl Feedback {
    /// All letters correct
    pub const SOLVED: Self = Self([LetterStatus::Correct; WORD_LENGTH]);

    /// Evaluate `guess` against `target`
    ///
    /// # Examples
    /// ```
    /// use code_breaker::core::{Feedback, LetterStatus, Word};
    ///
    /// let guess = Word::new("PYTHOM").unwrap();
    /// let target = Word::new("PYTHON").unwrap();
    /// let feedback = Feedback::evaluate(&guess, &target);
    ///
    /// assert_eq!(feedback.count_correct(), 5);
    /// assert_eq!(feedback.statuses()[5], LetterStatus::Absent);
    /// ```
    #[must_use]
    pub fn evaluate(guess: &Word, target: &Word) -> Self {
        let mut statuses = [LetterStatus::Absent; WORD_LENGTH];

        for (i, status) in statuses.iter_mut().enumerate() {
            let letter = guess.letter_at(i);
            *status = if letter == target.letter_at(i) {
                LetterStatus::Correct
            } else if target.has_letter(letter) {
                LetterStatus::Present
            } else {
                LetterStatus::Absent
            };
        }

        Self(statuses)
    }

    /// Statuses in guess order
    #[inline]
    #[must_use]
    pub const fn statuses(&self) -> &[LetterStatus; WORD_LENGTH] {
        &self.0
    }

    /// Check if every letter is correct
    #[inline]
    #[must_use]
    pub fn is_solved(&self) -> bool {
        *self == Self::SOLVED
    }

    #[must_use]
    pub fn count_correct(&self) -> usize {
        self.count(LetterStatus::Correct)
    }

    #[must_use]
    pub fn count_present(&self) -> usize {
        self.count(LetterStatus::Present)
    }

    fn count(&self, wanted: LetterStatus) -> usize {
        self.0.iter().filter(|&&status| status == wanted).count()
    }

    /// Convert feedback to an emoji string like "🟩🟩🟨⬜⬜🟩"
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.0.iter().map(|status| status.emoji()).collect()
    }
}
