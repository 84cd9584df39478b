//! Guess history records and derived letter knowledge

use super::feedback::{Feedback, FeedbackError, LetterStatus};
use super::word::{WORD_LENGTH, Word, WordError};
use rustc_hash::FxHashMap;
use std::fmt;

/// A guess together with the feedback it received
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct GuessRecord {
    guess: Word,
    feedback: Feedback,
}

/// Error type for history records that cannot be built
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordError {
    /// Guess or feedback is not exactly five positions long
    MalformedRecord {
        guess_len: usize,
        feedback_len: usize,
    },
    /// Text form is missing the `GUESS=FEEDBACK` separator
    MissingFeedback(String),
    Word(WordError),
    Feedback(FeedbackError),
}

impl fmt::Display for RecordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MalformedRecord {
                guess_len,
                feedback_len,
            } => write!(
                f,
                "Guess and feedback must both have {WORD_LENGTH} positions, got {guess_len} and {feedback_len}"
            ),
            Self::MissingFeedback(input) => {
                write!(f, "Expected GUESS=FEEDBACK (e.g. crane=GY---), got '{input}'")
            }
            Self::Word(e) => write!(f, "Invalid guess: {e}"),
            Self::Feedback(e) => write!(f, "Invalid feedback: {e}"),
        }
    }
}

impl std::error::Error for RecordError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Word(e) => Some(e),
            Self::Feedback(e) => Some(e),
            _ => None,
        }
    }
}

impl From<WordError> for RecordError {
    fn from(e: WordError) -> Self {
        Self::Word(e)
    }
}

impl From<FeedbackError> for RecordError {
    fn from(e: FeedbackError) -> Self {
        Self::Feedback(e)
    }
}

impl GuessRecord {
    #[must_use]
    pub const fn new(guess: Word, feedback: Feedback) -> Self {
        Self { guess, feedback }
    }

    /// Record the feedback `guess` would receive if `target` were the answer
    #[must_use]
    pub fn against(guess: Word, target: &Word) -> Self {
        let feedback = Feedback::simulate(&guess, target);
        Self { guess, feedback }
    }

    /// Build a record from raw parts as supplied by a caller
    ///
    /// Length mismatches are rejected rather than truncated or padded.
    ///
    /// # Errors
    /// Returns `RecordError::MalformedRecord` if either part does not have five
    /// positions, or `RecordError::Word` if the guess is not a valid word.
    pub fn from_parts(guess: &str, statuses: &[LetterStatus]) -> Result<Self, RecordError> {
        let guess_len = guess.chars().count();
        if guess_len != WORD_LENGTH || statuses.len() != WORD_LENGTH {
            return Err(RecordError::MalformedRecord {
                guess_len,
                feedback_len: statuses.len(),
            });
        }

        let feedback = Feedback::try_from(statuses)?;
        Ok(Self::new(Word::new(guess)?, feedback))
    }

    /// Parse a guess and its feedback text
    ///
    /// # Errors
    /// Returns `RecordError` if either part has the wrong length or contains
    /// invalid characters.
    ///
    /// # Examples
    /// ```
    /// use wordle_hints::core::{GuessRecord, RecordError};
    ///
    /// let record = GuessRecord::parse("crane", "GY---").unwrap();
    /// assert_eq!(record.guess().text(), "crane");
    ///
    /// assert!(matches!(
    ///     GuessRecord::parse("cranes", "GY---"),
    ///     Err(RecordError::MalformedRecord { guess_len: 6, .. })
    /// ));
    /// ```
    pub fn parse(guess: &str, feedback: &str) -> Result<Self, RecordError> {
        let guess = guess.trim();
        let feedback = feedback.trim();
        let guess_len = guess.chars().count();
        let feedback_len = feedback.chars().count();
        if guess_len != WORD_LENGTH || feedback_len != WORD_LENGTH {
            return Err(RecordError::MalformedRecord {
                guess_len,
                feedback_len,
            });
        }

        Ok(Self::new(Word::new(guess)?, Feedback::parse(feedback)?))
    }

    #[inline]
    #[must_use]
    pub const fn guess(&self) -> &Word {
        &self.guess
    }

    #[inline]
    #[must_use]
    pub const fn feedback(&self) -> &Feedback {
        &self.feedback
    }
}

impl std::str::FromStr for GuessRecord {
    type Err = RecordError;

    /// Parse `GUESS=FEEDBACK`, `GUESS:FEEDBACK` or `GUESS FEEDBACK`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (guess, feedback) = s
            .trim()
            .split_once(['=', ':', ' '])
            .ok_or_else(|| RecordError::MissingFeedback(s.to_string()))?;
        Self::parse(guess, feedback)
    }
}

impl fmt::Display for GuessRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}={}", self.guess, self.feedback)
    }
}

/// Best status observed for each letter across a history
///
/// Precedence is `Correct > Present > Absent`. Letters that never appeared in
/// a guess have no entry.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CharStatusMap {
    statuses: FxHashMap<u8, LetterStatus>,
}

impl CharStatusMap {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Collect the best status per letter from every record
    ///
    /// # Examples
    /// ```
    /// use wordle_hints::core::{CharStatusMap, GuessRecord, LetterStatus};
    ///
    /// let history = [
    ///     GuessRecord::parse("crane", "-Y---").unwrap(),
    ///     GuessRecord::parse("robot", "G----").unwrap(),
    /// ];
    /// let statuses = CharStatusMap::from_history(&history);
    ///
    /// assert_eq!(statuses.get(b'r'), Some(LetterStatus::Correct));
    /// assert_eq!(statuses.get(b'c'), Some(LetterStatus::Absent));
    /// assert_eq!(statuses.get(b'z'), None);
    /// ```
    #[must_use]
    pub fn from_history(history: &[GuessRecord]) -> Self {
        let mut map = Self::new();
        for record in history {
            for (&letter, &status) in record.guess().chars().iter().zip(record.feedback().statuses()) {
                map.record(letter, status);
            }
        }
        map
    }

    /// Note a status for a letter, keeping the higher-precedence one
    pub fn record(&mut self, letter: u8, status: LetterStatus) {
        let letter = letter.to_ascii_lowercase();
        self.statuses
            .entry(letter)
            .and_modify(|best| *best = (*best).max(status))
            .or_insert(status);
    }

    #[must_use]
    pub fn get(&self, letter: u8) -> Option<LetterStatus> {
        self.statuses.get(&letter.to_ascii_lowercase()).copied()
    }

    #[must_use]
    pub fn contains(&self, letter: u8) -> bool {
        self.statuses.contains_key(&letter.to_ascii_lowercase())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.statuses.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.statuses.is_empty()
    }

    /// Count distinct letters of `word` with no status yet
    #[must_use]
    pub fn unused_letters(&self, word: &Word) -> usize {
        word.distinct_letters()
            .filter(|&letter| !self.contains(letter))
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::LetterStatus::{Absent, Correct, Present};
    use super::*;

    #[test]
    fn parse_valid_record() {
        let record = GuessRecord::parse("CRANE", "gy---").unwrap();
        assert_eq!(record.guess().text(), "crane");
        assert_eq!(
            *record.feedback(),
            Feedback::new([Correct, Present, Absent, Absent, Absent])
        );
    }

    #[test]
    fn parse_rejects_wrong_lengths() {
        assert_eq!(
            GuessRecord::parse("cran", "GY---"),
            Err(RecordError::MalformedRecord {
                guess_len: 4,
                feedback_len: 5
            })
        );
        assert_eq!(
            GuessRecord::parse("crane", "GY----"),
            Err(RecordError::MalformedRecord {
                guess_len: 5,
                feedback_len: 6
            })
        );
    }

    #[test]
    fn parse_reports_invalid_parts() {
        assert!(matches!(
            GuessRecord::parse("cr4ne", "GY---"),
            Err(RecordError::Word(WordError::InvalidCharacters))
        ));
        assert!(matches!(
            GuessRecord::parse("crane", "GQ---"),
            Err(RecordError::Feedback(FeedbackError::InvalidSymbol('Q')))
        ));
    }

    #[test]
    fn from_parts_rejects_short_feedback() {
        assert_eq!(
            GuessRecord::from_parts("crane", &[Correct, Absent]),
            Err(RecordError::MalformedRecord {
                guess_len: 5,
                feedback_len: 2
            })
        );
        assert!(GuessRecord::from_parts("crane", &[Absent; 5]).is_ok());
    }

    #[test]
    fn from_str_accepts_separators() {
        for input in ["crane=GY---", "crane:GY---", "crane GY---"] {
            let record: GuessRecord = input.parse().unwrap();
            assert_eq!(record.to_string(), "crane=GY---");
        }
        assert!(matches!(
            "crane".parse::<GuessRecord>(),
            Err(RecordError::MissingFeedback(_))
        ));
    }

    #[test]
    fn against_uses_simulator() {
        let target = Word::new("alarm").unwrap();
        let record = GuessRecord::against(Word::new("llama").unwrap(), &target);
        assert_eq!(
            *record.feedback(),
            Feedback::new([Absent, Correct, Correct, Present, Present])
        );
    }

    #[test]
    fn status_map_keeps_best_status() {
        let mut map = CharStatusMap::new();
        map.record(b'a', Present);
        map.record(b'a', Absent);
        assert_eq!(map.get(b'a'), Some(Present));
        map.record(b'A', Correct);
        assert_eq!(map.get(b'a'), Some(Correct));
        assert_eq!(map.len(), 1);
    }

    #[test]
    fn status_map_from_history_with_duplicates() {
        // Second L of LLAMA is correct, first is absent: L is known correct
        let history = [GuessRecord::parse("llama", "-GGYY").unwrap()];
        let map = CharStatusMap::from_history(&history);

        assert_eq!(map.get(b'l'), Some(Correct));
        assert_eq!(map.get(b'a'), Some(Correct));
        assert_eq!(map.get(b'm'), Some(Present));
        assert_eq!(map.len(), 3);
        assert!(map.contains(b'L'));
        assert!(!map.contains(b'r'));
    }

    #[test]
    fn unused_letters_counts_distinct_unknown() {
        let history = [GuessRecord::parse("crane", "-----").unwrap()];
        let map = CharStatusMap::from_history(&history);

        assert_eq!(map.unused_letters(&Word::new("sloth").unwrap()), 5);
        assert_eq!(map.unused_letters(&Word::new("slate").unwrap()), 3);
        // Repeated unknown letters count once
        assert_eq!(map.unused_letters(&Word::new("sissy").unwrap()), 3);
        assert_eq!(CharStatusMap::new().unused_letters(&Word::new("llama").unwrap()), 3);
    }
}
