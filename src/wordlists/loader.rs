//! Word list loading utilities
//!
//! Provides functions to load word lists from files or use embedded constants.

use crate::core::Word;
use std::fs;
use std::io;
use std::path::Path;

/// Load words from a file
///
/// Returns a vector of valid Word instances, skipping blank lines and any
/// entry that is not a six-letter word.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use code_breaker::wordlists::loader::load_from_file;
///
/// let words = load_from_file("data/words.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<Word>> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)?;

    let mut skipped = 0usize;
    let words: Vec<Word> = content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .filter_map(|line| {
            Word::new(line)
                .inspect_err(|_| skipped += 1)
                .ok()
        })
        .collect();

    if skipped > 0 {
        tracing::warn!(path = %path.display(), skipped, "Skipped invalid word list entries");
    }
    tracing::debug!(path = %path.display(), count = words.len(), "Loaded word list");

    Ok(words)
}

/// Convert embedded string slice to Word vector
///
/// # Examples
/// ```
/// use code_breaker::wordlists::loader::words_from_slice;
/// use code_breaker::wordlists::WORDS;
///
/// let words = words_from_slice(WORDS);
/// assert_eq!(words.len(), WORDS.len());
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<Word> {
    slice.iter().filter_map(|&s| Word::new(s).ok()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn words_from_slice_converts_valid_words() {
        let input = &["python", "DOCKER", "Coding"];
        let words = words_from_slice(input);

        assert_eq!(words.len(), 3);
        assert_eq!(words[0].text(), "PYTHON");
        assert_eq!(words[1].text(), "DOCKER");
        assert_eq!(words[2].text(), "CODING");
    }

    #[test]
    fn words_from_slice_skips_invalid() {
        let input = &["REACT", "PYTHON", "KUBERNETES", "CLOUD", "SERVER"];
        let words = words_from_slice(input);

        assert_eq!(words.len(), 2);
        assert_eq!(words[0].text(), "PYTHON");
        assert_eq!(words[1].text(), "SERVER");
    }

    #[test]
    fn words_from_slice_empty() {
        let input: &[&str] = &[];
        assert!(words_from_slice(input).is_empty());
    }

    #[test]
    fn load_from_file_skips_blank_and_invalid_lines() {
        let path = std::env::temp_dir().join(format!(
            "code_breaker_loader_{}.txt",
            std::process::id()
        ));
        {
            let mut file = fs::File::create(&path).unwrap();
            writeln!(file, "deploy").unwrap();
            writeln!(file).unwrap();
            writeln!(file, "  svelte  ").unwrap();
            writeln!(file, "linux").unwrap();
        }

        let words = load_from_file(&path).unwrap();
        fs::remove_file(&path).unwrap();

        assert_eq!(words.len(), 2);
        assert_eq!(words[0].text(), "DEPLOY");
        assert_eq!(words[1].text(), "SVELTE");
    }

    #[test]
    fn load_from_missing_file_is_error() {
        assert!(load_from_file("/definitely/not/here/words.txt").is_err());
    }
}
