//! Word list loading utilities
//!
//! Word lists are newline-delimited; blank lines are ignored and entries that
//! are not valid 5-letter words are skipped.

use crate::core::Word;
use log::{debug, warn};
use std::fs;
use std::io;
use std::path::Path;

/// Load words from a newline-delimited file
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use wordle_hints::wordlists::loader::load_from_file;
///
/// let words = load_from_file("data/solutions.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<Word>> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)?;
    let words = words_from_str(&content);
    debug!("loaded {} words from {}", words.len(), path.display());
    Ok(words)
}

/// Parse newline-delimited words
///
/// # Examples
/// ```
/// use wordle_hints::wordlists::loader::words_from_str;
///
/// let words = words_from_str("crane\n\nSLATE\nbad\n");
/// assert_eq!(words.len(), 2);
/// assert_eq!(words[1].text(), "slate");
/// ```
#[must_use]
pub fn words_from_str(content: &str) -> Vec<Word> {
    let entries = content.lines().map(str::trim).filter(|line| !line.is_empty());
    collect_valid(entries)
}

/// Convert embedded string slice to Word vector
///
/// # Examples
/// ```
/// use wordle_hints::wordlists::loader::words_from_slice;
/// use wordle_hints::wordlists::SOLUTIONS;
///
/// let words = words_from_slice(SOLUTIONS);
/// assert_eq!(words.len(), SOLUTIONS.len());
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<Word> {
    collect_valid(slice.iter().copied())
}

fn collect_valid<'s>(entries: impl Iterator<Item = &'s str>) -> Vec<Word> {
    let mut skipped = 0usize;
    let words: Vec<Word> = entries
        .filter_map(|entry| match Word::new(entry) {
            Ok(word) => Some(word),
            Err(e) => {
                skipped += 1;
                debug!("skipping word list entry '{entry}': {e}");
                None
            }
        })
        .collect();

    if skipped > 0 {
        warn!("skipped {skipped} invalid word list entries");
    }
    words
}
