//! Word lists for target selection
//!
//! Two disjoint lists are embedded into the binary: one for normal play and
//! one for secret mode. Either can be replaced by a file at startup.

mod embedded;
pub mod loader;

pub use embedded::{SECRET_WORDS, SECRET_WORDS_COUNT, WORDS, WORDS_COUNT};

use crate::core::Word;
use rustc_hash::FxHashSet;
use std::path::Path;
use thiserror::Error;

/// Errors raised while building a word list
#[derive(Debug, Error)]
pub enum WordListError {
    #[error("{0} word list contains no valid six-letter words")]
    Empty(Mode),
    #[error("failed to read {mode} word list from {path}")]
    Io {
        mode: Mode,
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("{word} appears in both the normal and secret word lists")]
    Overlap { word: Word },
}

/// Which word list a session draws its target from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    #[default]
    Normal,
    Secret,
}

impl Mode {
    #[must_use]
    pub const fn from_secret(secret: bool) -> Self {
        if secret { Self::Secret } else { Self::Normal }
    }

    #[must_use]
    pub const fn is_secret(self) -> bool {
        matches!(self, Self::Secret)
    }

    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Normal => Self::Secret,
            Self::Secret => Self::Normal,
        }
    }
}

impl std::fmt::Display for Mode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::Normal => "normal",
            Self::Secret => "secret",
        })
    }
}

/// A non-empty list of candidate target words
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordList {
    words: Vec<Word>,
}

impl WordList {
    /// Build a list, rejecting an empty one
    ///
    /// # Errors
    /// Returns `WordListError::Empty` if `words` is empty.
    pub fn new(mode: Mode, words: Vec<Word>) -> Result<Self, WordListError> {
        if words.is_empty() {
            return Err(WordListError::Empty(mode));
        }
        Ok(Self { words })
    }

    /// Built-in list for `mode`
    ///
    /// # Errors
    /// Returns `WordListError::Empty` if the embedded list has no valid words.
    pub fn embedded(mode: Mode) -> Result<Self, WordListError> {
        let source = match mode {
            Mode::Normal => WORDS,
            Mode::Secret => SECRET_WORDS,
        };
        Self::new(mode, loader::words_from_slice(source))
    }

    /// Load a list for `mode` from a file with one word per line
    ///
    /// # Errors
    /// Returns `WordListError::Io` if the file cannot be read and
    /// `WordListError::Empty` if it holds no valid words.
    pub fn from_file(mode: Mode, path: &Path) -> Result<Self, WordListError> {
        let words = loader::load_from_file(path).map_err(|source| WordListError::Io {
            mode,
            path: path.display().to_string(),
            source,
        })?;
        Self::new(mode, words)
    }

    #[inline]
    #[must_use]
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Always false; kept for API symmetry with slices
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    #[must_use]
    pub fn contains(&self, word: &Word) -> bool {
        self.words.contains(word)
    }
}

/// The normal and secret lists side by side
#[derive(Debug, Clone)]
pub struct WordLists {
    normal: WordList,
    secret: WordList,
}

impl WordLists {
    /// Pair the two lists, rejecting any word that appears in both
    ///
    /// # Errors
    /// Returns `WordListError::Overlap` naming the first shared word.
    pub fn new(normal: WordList, secret: WordList) -> Result<Self, WordListError> {
        let seen: FxHashSet<&Word> = normal.words().iter().collect();
        if let Some(word) = secret.words().iter().find(|word| seen.contains(word)) {
            return Err(WordListError::Overlap { word: word.clone() });
        }
        Ok(Self { normal, secret })
    }

    /// Both built-in lists
    ///
    /// # Errors
    /// Returns `WordListError::Empty` if either embedded list is empty.
    pub fn embedded() -> Result<Self, WordListError> {
        Self::new(
            WordList::embedded(Mode::Normal)?,
            WordList::embedded(Mode::Secret)?,
        )
    }

    /// Load lists, taking each from a file when a path is given
    ///
    /// # Errors
    /// Propagates any `WordListError` from the chosen sources, and returns
    /// `WordListError::Overlap` if the two lists share a word.
    pub fn load(normal: Option<&Path>, secret: Option<&Path>) -> Result<Self, WordListError> {
        let load = |mode, path: Option<&Path>| match path {
            Some(path) => WordList::from_file(mode, path),
            None => WordList::embedded(mode),
        };
        Self::new(load(Mode::Normal, normal)?, load(Mode::Secret, secret)?)
    }

    #[must_use]
    pub const fn for_mode(&self, mode: Mode) -> &WordList {
        match mode {
            Mode::Normal => &self.normal,
            Mode::Secret => &self.secret,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::WORD_LENGTH;

    #[test]
    fn words_count_matches_const() {
        assert_eq!(WORDS.len(), WORDS_COUNT);
        assert_eq!(SECRET_WORDS.len(), SECRET_WORDS_COUNT);
    }

    #[test]
    fn embedded_words_are_valid() {
        for &word in WORDS.iter().chain(SECRET_WORDS) {
            assert_eq!(word.len(), WORD_LENGTH, "Word '{word}' is not 6 letters");
            assert!(
                word.chars().all(|c| c.is_ascii_uppercase()),
                "Word '{word}' contains non-uppercase chars"
            );
        }
    }

    #[test]
    fn embedded_lists_are_disjoint() {
        let normal: std::collections::HashSet<_> = WORDS.iter().collect();
        for word in SECRET_WORDS {
            assert!(!normal.contains(word), "'{word}' is in both lists");
        }
    }

    #[test]
    fn embedded_normal_list_has_tech_words() {
        let list = WordList::embedded(Mode::Normal).unwrap();
        for word in ["PYTHON", "DOCKER", "CODING", "DEPLOY", "SERVER", "SVELTE", "NEXTJS"] {
            assert!(list.contains(&Word::new(word).unwrap()), "missing {word}");
        }
    }

    #[test]
    fn empty_word_list_is_rejected() {
        let err = WordList::new(Mode::Secret, Vec::new()).unwrap_err();
        assert!(matches!(err, WordListError::Empty(Mode::Secret)));
        assert_eq!(
            err.to_string(),
            "secret word list contains no valid six-letter words"
        );
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = WordList::from_file(Mode::Normal, Path::new("/no/such/list.txt")).unwrap_err();
        assert!(matches!(err, WordListError::Io { mode: Mode::Normal, .. }));
    }

    #[test]
    fn word_lists_select_by_mode() {
        let lists = WordLists::embedded().unwrap();
        assert_eq!(lists.for_mode(Mode::Normal).len(), WORDS_COUNT);
        assert_eq!(lists.for_mode(Mode::Secret).len(), SECRET_WORDS_COUNT);
    }

    #[test]
    fn shared_word_is_rejected() {
        let normal = WordList::new(
            Mode::Normal,
            vec![Word::new("PYTHON").unwrap(), Word::new("DOCKER").unwrap()],
        )
        .unwrap();
        let secret = WordList::new(Mode::Secret, vec![Word::new("docker").unwrap()]).unwrap();

        let err = WordLists::new(normal, secret).unwrap_err();
        assert!(matches!(&err, WordListError::Overlap { word } if word.text() == "DOCKER"));
        assert_eq!(
            err.to_string(),
            "DOCKER appears in both the normal and secret word lists"
        );
    }

    #[test]
    fn same_file_for_both_modes_is_rejected() {
        let path = std::env::temp_dir().join(format!(
            "code_breaker_shared_{}.txt",
            std::process::id()
        ));
        std::fs::write(&path, "PYTHON\nDOCKER\n").unwrap();

        let result = WordLists::load(Some(&path), Some(&path));
        std::fs::remove_file(&path).unwrap();

        assert!(matches!(result, Err(WordListError::Overlap { .. })));
    }

    #[test]
    fn file_list_disjoint_from_builtin_secret_list_loads() {
        let path = std::env::temp_dir().join(format!(
            "code_breaker_custom_{}.txt",
            std::process::id()
        ));
        std::fs::write(&path, "GITHUB\nLAMBDA\n").unwrap();

        let result = WordLists::load(Some(&path), None);
        std::fs::remove_file(&path).unwrap();

        let lists = result.unwrap();
        assert_eq!(lists.for_mode(Mode::Normal).len(), 2);
        assert_eq!(lists.for_mode(Mode::Secret).len(), SECRET_WORDS_COUNT);
    }

    #[test]
    fn mode_flag_conversions() {
        assert_eq!(Mode::from_secret(true), Mode::Secret);
        assert_eq!(Mode::from_secret(false), Mode::Normal);
        assert_eq!(Mode::Normal.toggled(), Mode::Secret);
        assert!(Mode::Secret.is_secret());
        assert!(!Mode::Secret.toggled().is_secret());
    }
}
