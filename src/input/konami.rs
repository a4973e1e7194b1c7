//! Konami code detection
//!
//! Watches the physical key stream for `↑ ↑ ↓ ↓ ← → ← → B A` and reports a
//! hit once per full sequence. The window is cleared after each hit so the
//! same keys cannot trigger twice.

use crossterm::event::KeyCode;
use std::collections::VecDeque;

const SEQUENCE: [KeyCode; 10] = [
    KeyCode::Up,
    KeyCode::Up,
    KeyCode::Down,
    KeyCode::Down,
    KeyCode::Left,
    KeyCode::Right,
    KeyCode::Left,
    KeyCode::Right,
    KeyCode::Char('b'),
    KeyCode::Char('a'),
];

#[derive(Debug, Default)]
pub struct KonamiDetector {
    window: VecDeque<KeyCode>,
}

impl KonamiDetector {
    #[must_use]
    pub fn new() -> Self {
        Self {
            window: VecDeque::with_capacity(SEQUENCE.len()),
        }
    }

    /// Feed one pressed key; returns true when it completes the sequence
    pub fn push(&mut self, code: KeyCode) -> bool {
        let code = match code {
            KeyCode::Char(c) => KeyCode::Char(c.to_ascii_lowercase()),
            other => other,
        };

        if self.window.len() == SEQUENCE.len() {
            self.window.pop_front();
        }
        self.window.push_back(code);

        if self.window.iter().eq(SEQUENCE.iter()) {
            self.window.clear();
            return true;
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn feed(detector: &mut KonamiDetector, codes: &[KeyCode]) -> Vec<bool> {
        codes.iter().map(|&code| detector.push(code)).collect()
    }

    #[test]
    fn full_sequence_triggers_on_last_key() {
        let mut detector = KonamiDetector::new();
        let hits = feed(&mut detector, &SEQUENCE);
        assert_eq!(hits.iter().filter(|&&hit| hit).count(), 1);
        assert_eq!(hits.last(), Some(&true));
    }

    #[test]
    fn sequence_after_noise_still_triggers() {
        let mut detector = KonamiDetector::new();
        feed(&mut detector, &[KeyCode::Char('x'), KeyCode::Enter, KeyCode::Up]);
        assert_eq!(feed(&mut detector, &SEQUENCE).last(), Some(&true));
    }

    #[test]
    fn uppercase_letters_match() {
        let mut detector = KonamiDetector::new();
        let mut codes = SEQUENCE;
        codes[8] = KeyCode::Char('B');
        codes[9] = KeyCode::Char('A');
        assert_eq!(feed(&mut detector, &codes).last(), Some(&true));
    }

    #[test]
    fn broken_sequence_does_not_trigger() {
        let mut detector = KonamiDetector::new();
        let mut codes = SEQUENCE.to_vec();
        codes.insert(5, KeyCode::Char('z'));
        assert!(feed(&mut detector, &codes).iter().all(|&hit| !hit));
    }

    #[test]
    fn window_resets_after_hit() {
        let mut detector = KonamiDetector::new();
        feed(&mut detector, &SEQUENCE);
        // Only the trailing "b a" again is not enough
        assert!(!detector.push(KeyCode::Char('b')));
        assert!(!detector.push(KeyCode::Char('a')));
        assert_eq!(feed(&mut detector, &SEQUENCE).last(), Some(&true));
    }
}
