//! Logical game keys
//!
//! Every input source (physical keyboard, on-screen key grid, line input) is
//! reduced to a `Key` before it reaches the game engine.

/// A single logical keystroke accepted by the game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    /// An uppercase ASCII letter `A`-`Z`
    Letter(u8),
    /// Remove the last letter of the current guess
    Backspace,
    /// Submit the current guess
    Enter,
}

impl Key {
    /// Map a typed character to a letter key
    ///
    /// Lowercase letters are normalised to uppercase. Anything outside
    /// `a-z`/`A-Z` is rejected.
    ///
    /// # Examples
    /// ```
    /// use code_breaker::core::Key;
    ///
    /// assert_eq!(Key::from_char('p'), Some(Key::Letter(b'P')));
    /// assert_eq!(Key::from_char('7'), None);
    /// ```
    #[must_use]
    pub fn from_char(c: char) -> Option<Self> {
        c.is_ascii_alphabetic()
            .then(|| Self::Letter(c.to_ascii_uppercase() as u8))
    }

    /// Map an on-screen key label to a key
    ///
    /// Accepts single letters plus `ENTER` and `DEL`/`BACKSPACE`, in any case.
    #[must_use]
    pub fn from_label(label: &str) -> Option<Self> {
        let label = label.trim();
        if label.eq_ignore_ascii_case("enter") {
            return Some(Self::Enter);
        }
        if label.eq_ignore_ascii_case("del") || label.eq_ignore_ascii_case("backspace") {
            return Some(Self::Backspace);
        }

        let mut chars = label.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Self::from_char(c),
            _ => None,
        }
    }

    /// Label shown on the on-screen key grid
    #[must_use]
    pub fn label(self) -> String {
        match self {
            Self::Letter(letter) => char::from(letter).to_string(),
            Self::Backspace => "DEL".to_string(),
            Self::Enter => "ENTER".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_char_normalizes_case() {
        assert_eq!(Key::from_char('a'), Some(Key::Letter(b'A')));
        assert_eq!(Key::from_char('Z'), Some(Key::Letter(b'Z')));
    }

    #[test]
    fn from_char_rejects_non_letters() {
        for c in ['1', ' ', '-', 'é', '\n'] {
            assert_eq!(Key::from_char(c), None, "{c:?}");
        }
    }

    #[test]
    fn from_label_accepts_controls() {
        assert_eq!(Key::from_label("ENTER"), Some(Key::Enter));
        assert_eq!(Key::from_label("enter"), Some(Key::Enter));
        assert_eq!(Key::from_label("DEL"), Some(Key::Backspace));
        assert_eq!(Key::from_label("Backspace"), Some(Key::Backspace));
        assert_eq!(Key::from_label("q"), Some(Key::Letter(b'Q')));
    }

    #[test]
    fn from_label_rejects_unknown() {
        assert_eq!(Key::from_label("SHIFT"), None);
        assert_eq!(Key::from_label("QW"), None);
        assert_eq!(Key::from_label(""), None);
    }

    #[test]
    fn label_round_trips_through_from_label() {
        for key in [Key::Letter(b'K'), Key::Backspace, Key::Enter] {
            assert_eq!(Key::from_label(&key.label()), Some(key));
        }
    }
}
