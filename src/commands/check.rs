//! Evaluate a single guess against a given target

use crate::core::{Feedback, Word};
use anyhow::{Context, Result};

/// Result of checking one guess
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckResult {
    pub guess: Word,
    pub target: Word,
    pub feedback: Feedback,
}

/// Validate both words and evaluate `guess` against `target`
///
/// # Errors
///
/// Returns an error if either word is not a valid six-letter word.
pub fn check_guess(guess: &str, target: &str) -> Result<CheckResult> {
    let guess = Word::new(guess).with_context(|| format!("invalid guess '{guess}'"))?;
    let target = Word::new(target).with_context(|| format!("invalid target '{target}'"))?;
    let feedback = Feedback::evaluate(&guess, &target);

    Ok(CheckResult {
        guess,
        target,
        feedback,
    })
}
