//! Word lists for the assistant
//!
//! Provides the default lists compiled into the binary and the immutable
//! [`Vocabulary`] value the solver reads from.

mod embedded;
pub mod loader;

pub use embedded::{GUESSES, GUESSES_COUNT, SOLUTIONS, SOLUTIONS_COUNT};

use crate::core::Word;
use log::info;
use std::fmt;
use std::io;
use std::path::{Path, PathBuf};

/// Error type for vocabularies that cannot be built
#[derive(Debug)]
pub enum VocabularyError {
    Io { path: PathBuf, source: io::Error },
    Empty(&'static str),
}

impl fmt::Display for VocabularyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { path, source } => {
                write!(f, "Failed to read word list {}: {source}", path.display())
            }
            Self::Empty(list) => write!(f, "The {list} word list contains no valid words"),
        }
    }
}

impl std::error::Error for VocabularyError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Empty(_) => None,
        }
    }
}

/// The two fixed word lists: possible targets and allowed guesses
///
/// Built once and shared by reference; never mutated.
#[derive(Debug, Clone)]
pub struct Vocabulary {
    solutions: Vec<Word>,
    guesses: Vec<Word>,
}

impl Vocabulary {
    /// Create a vocabulary from already-parsed lists
    ///
    /// # Errors
    /// Returns `VocabularyError::Empty` if either list is empty.
    pub fn new(solutions: Vec<Word>, guesses: Vec<Word>) -> Result<Self, VocabularyError> {
        if solutions.is_empty() {
            return Err(VocabularyError::Empty("solutions"));
        }
        if guesses.is_empty() {
            return Err(VocabularyError::Empty("guesses"));
        }
        Ok(Self { solutions, guesses })
    }

    /// The lists bundled with the crate
    #[must_use]
    pub fn embedded() -> Self {
        Self {
            solutions: loader::words_from_slice(SOLUTIONS),
            guesses: loader::words_from_slice(GUESSES),
        }
    }

    /// Load both lists from newline-delimited files
    ///
    /// # Errors
    /// Returns `VocabularyError` if a file cannot be read or holds no valid words.
    pub fn from_files(
        solutions_path: impl AsRef<Path>,
        guesses_path: impl AsRef<Path>,
    ) -> Result<Self, VocabularyError> {
        let vocabulary = Self::new(read_list(solutions_path)?, read_list(guesses_path)?)?;
        info!(
            "vocabulary loaded: {} solutions, {} guesses",
            vocabulary.solutions.len(),
            vocabulary.guesses.len()
        );
        Ok(vocabulary)
    }

    /// Candidate targets, in list order
    #[must_use]
    pub fn solutions(&self) -> &[Word] {
        &self.solutions
    }

    /// Words scored by the suggestion ranker
    #[must_use]
    pub fn guesses(&self) -> &[Word] {
        &self.guesses
    }

    /// Whether a word may be entered as a guess
    ///
    /// Accepts words from either list, case-insensitively.
    #[must_use]
    pub fn is_valid_guess(&self, text: &str) -> bool {
        Word::new(text).is_ok_and(|word| {
            self.guesses.contains(&word) || self.solutions.contains(&word)
        })
    }
}

fn read_list(path: impl AsRef<Path>) -> Result<Vec<Word>, VocabularyError> {
    let path = path.as_ref();
    loader::load_from_file(path).map_err(|source| VocabularyError::Io {
        path: path.to_path_buf(),
        source,
    })
}
