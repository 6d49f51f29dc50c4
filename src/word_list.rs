//! Loading and preprocessing a plain word list.
//!
//! The engine itself builds its [`Lexicon`](crate::lexicon::Lexicon) from any
//! iterator of words; this module is the canonical producer of such an
//! iterator for the common case of a one-word-per-line list.
//!
//! Parsing applies the same filter the lexicon build does, so feeding the
//! result to `Lexicon::from_words` never drops anything further:
//! - lines are trimmed; empty lines are skipped,
//! - words shorter than 2 letters are skipped,
//! - words containing anything outside A-Z are skipped (not truncated),
//! - everything is normalized to uppercase.
//!
//! The final list is deduplicated and sorted by length, then alphabetically.
//! `parse_from_str` works on in-memory contents; `load_from_path` is a
//! convenience wrapper for callers that keep their list in a file.

use crate::lexicon::normalize_word;
use std::io;
use std::path::Path;

/// A processed, ready-to-ingest word list (uppercase, filtered, deduplicated).
#[derive(Debug, Clone, Default)]
pub struct WordList {
    pub words: Vec<String>,
}

impl WordList {
    /// Parse raw list contents, one word per line.
    pub fn parse_from_str(contents: &str) -> WordList {
        let mut words: Vec<String> = contents
            .lines()
            .filter_map(|line| String::from_utf8(normalize_word(line)?).ok())
            .collect();

        // Alphabetical sort first: dedup only removes adjacent duplicates.
        words.sort();
        words.dedup();
        words.sort_by(|a, b| a.len().cmp(&b.len()).then_with(|| a.cmp(b)));

        WordList { words }
    }

    /// Read a word list from a file path and parse it.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read.
    pub fn load_from_path<P: AsRef<Path>>(path: P) -> io::Result<WordList> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|e| {
            io::Error::new(e.kind(), format!("failed to read word list from '{}': {e}", path.display()))
        })?;
        Ok(Self::parse_from_str(&contents))
    }
}
