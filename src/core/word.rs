//! Five-letter word representation
//!
//! A Word stores a normalised 5-letter word along with per-letter occurrence
//! counts used by feedback simulation and consistency checks.

use std::fmt;

/// Number of letters in every word
pub const WORD_LENGTH: usize = 5;

/// A 5-letter word, normalised to lowercase
///
/// Ordering is lexicographic on the text, which the ranker uses as its final
/// tie-break.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Word {
    text: String,
    chars: [u8; WORD_LENGTH],
    letter_counts: [u8; 26],
}

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordError {
    InvalidLength(usize),
    NonAscii,
    InvalidCharacters,
}

impl fmt::Display for WordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidLength(len) => {
                write!(f, "Word must be exactly {WORD_LENGTH} letters, got {len}")
            }
            Self::NonAscii => write!(f, "Word must contain only ASCII letters"),
            Self::InvalidCharacters => write!(f, "Word contains invalid characters"),
        }
    }
}

impl std::error::Error for WordError {}

impl Word {
    /// Create a new Word from a string
    ///
    /// Input is case-insensitive; the stored text is lowercase.
    ///
    /// # Errors
    /// Returns `WordError` if:
    /// - Length is not exactly 5
    /// - Contains non-ASCII characters
    /// - Contains non-alphabetic characters
    ///
    /// # Examples
    /// ```
    /// use wordle_hints::core::Word;
    ///
    /// let word = Word::new("CRANE").unwrap();
    /// assert_eq!(word.text(), "crane");
    ///
    /// assert!(Word::new("too long").is_err());
    /// assert!(Word::new("sh0rt").is_err());
    /// ```
    pub fn new(text: impl Into<String>) -> Result<Self, WordError> {
        let text: String = text.into().to_lowercase();

        if !text.is_ascii() {
            return Err(WordError::NonAscii);
        }

        let chars: [u8; WORD_LENGTH] = text
            .as_bytes()
            .try_into()
            .map_err(|_| WordError::InvalidLength(text.len()))?;

        if !chars.iter().all(u8::is_ascii_lowercase) {
            return Err(WordError::InvalidCharacters);
        }

        let mut letter_counts = [0u8; 26];
        for &ch in &chars {
            letter_counts[letter_index(ch)] += 1;
        }

        Ok(Self {
            text,
            chars,
            letter_counts,
        })
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the word as a byte array
    #[inline]
    #[must_use]
    pub const fn chars(&self) -> &[u8; WORD_LENGTH] {
        &self.chars
    }

    /// Get the character at a specific position (0-4)
    ///
    /// # Panics
    /// Panics if position >= 5
    #[inline]
    #[must_use]
    pub const fn char_at(&self, position: usize) -> u8 {
        self.chars[position]
    }

    /// Check if the word contains a specific lowercase letter
    #[inline]
    #[must_use]
    pub fn has_letter(&self, letter: u8) -> bool {
        self.count_of(letter) > 0
    }

    /// Number of times a lowercase letter occurs in the word
    #[inline]
    #[must_use]
    pub fn count_of(&self, letter: u8) -> u8 {
        if letter.is_ascii_lowercase() {
            self.letter_counts[letter_index(letter)]
        } else {
            0
        }
    }

    /// Occurrence counts indexed by `letter - b'a'`
    #[inline]
    pub(crate) const fn letter_counts(&self) -> [u8; 26] {
        self.letter_counts
    }

    /// Iterate over the distinct letters of the word, in first-seen order
    pub fn distinct_letters(&self) -> impl Iterator<Item = u8> + '_ {
        self.chars
            .iter()
            .enumerate()
            .filter(|&(i, ch)| !self.chars[..i].contains(ch))
            .map(|(_, &ch)| ch)
    }
}

/// Index of a lowercase ASCII letter in a 26-slot table
#[inline]
pub(crate) const fn letter_index(letter: u8) -> usize {
    (letter - b'a') as usize
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

impl std::str::FromStr for Word {
    type Err = WordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}
