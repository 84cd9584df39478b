//! Per-letter feedback simulation and representation
//!
//! Feedback is the sequence of statuses the game shows for one guess. It
//! encodes to a single base-3 number in `0..243`:
//! - 0 = Absent (letter not in word, or no unmatched occurrence left)
//! - 1 = Present (letter in word, wrong position)
//! - 2 = Correct (letter in correct position)
//!
//! Position 0 is the most significant digit.

use super::word::{WORD_LENGTH, Word, letter_index};
use std::fmt;

/// Status of one letter of a guess
///
/// Variants are ordered by precedence: `Correct > Present > Absent`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum LetterStatus {
    Absent,
    Present,
    Correct,
}

impl LetterStatus {
    /// Base-3 digit of this status
    #[inline]
    #[must_use]
    pub const fn digit(self) -> u8 {
        match self {
            Self::Absent => 0,
            Self::Present => 1,
            Self::Correct => 2,
        }
    }

    /// Inverse of [`LetterStatus::digit`]
    #[must_use]
    pub const fn from_digit(digit: u8) -> Option<Self> {
        match digit {
            0 => Some(Self::Absent),
            1 => Some(Self::Present),
            2 => Some(Self::Correct),
            _ => None,
        }
    }

    /// Parse a single feedback symbol
    ///
    /// Accepts `G`/🟩 for correct, `Y`/🟨 for present and `-`/`_`/`.`/`X`/⬜/⬛
    /// for absent (letters are case-insensitive).
    #[must_use]
    pub const fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            'G' | 'g' | '🟩' => Some(Self::Correct),
            'Y' | 'y' | '🟨' => Some(Self::Present),
            '-' | '_' | '.' | 'X' | 'x' | '⬜' | '⬛' => Some(Self::Absent),
            _ => None,
        }
    }

    #[must_use]
    pub const fn emoji(self) -> char {
        match self {
            Self::Correct => '🟩',
            Self::Present => '🟨',
            Self::Absent => '⬜',
        }
    }
}

/// Error type for feedback that cannot be parsed
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FeedbackError {
    InvalidLength(usize),
    InvalidSymbol(char),
    InvalidEncoding(u8),
}

impl fmt::Display for FeedbackError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidLength(len) => {
                write!(f, "Feedback must have exactly {WORD_LENGTH} statuses, got {len}")
            }
            Self::InvalidSymbol(ch) => {
                write!(f, "Invalid feedback symbol '{ch}' (use G, Y or -)")
            }
            Self::InvalidEncoding(value) => {
                write!(f, "Feedback encoding must be below {}, got {value}", Feedback::COUNT)
            }
        }
    }
}

impl std::error::Error for FeedbackError {}

/// Feedback for a single guess: one status per letter position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Feedback([LetterStatus; WORD_LENGTH]);

impl Feedback {
    /// Number of distinct feedback values (3^5)
    pub const COUNT: usize = 243;

    /// All letters correct
    pub const SOLVED: Self = Self([LetterStatus::Correct; WORD_LENGTH]);

    /// No letter in the word
    pub const ALL_ABSENT: Self = Self([LetterStatus::Absent; WORD_LENGTH]);

    #[inline]
    #[must_use]
    pub const fn new(statuses: [LetterStatus; WORD_LENGTH]) -> Self {
        Self(statuses)
    }

    /// Compute the feedback the game shows when `guess` is played against `target`
    ///
    /// Duplicate letters follow the game's rules: exact matches claim their
    /// target letter first, then the remaining guess positions claim any
    /// unmatched occurrences from left to right.
    ///
    /// # Examples
    /// ```
    /// use wordle_hints::core::{Feedback, LetterStatus::*, Word};
    ///
    /// let guess = Word::new("llama").unwrap();
    /// let target = Word::new("alarm").unwrap();
    ///
    /// assert_eq!(
    ///     Feedback::simulate(&guess, &target),
    ///     Feedback::new([Absent, Correct, Correct, Present, Present]),
    /// );
    /// ```
    #[must_use]
    pub fn simulate(guess: &Word, target: &Word) -> Self {
        let mut statuses = [LetterStatus::Absent; WORD_LENGTH];
        let mut unmatched = target.letter_counts();

        // Allow: Index needed to compare guess[i] with target[i] and set statuses[i]
        #[allow(clippy::needless_range_loop)]
        for i in 0..WORD_LENGTH {
            let letter = guess.char_at(i);
            if letter == target.char_at(i) {
                statuses[i] = LetterStatus::Correct;
                unmatched[letter_index(letter)] -= 1;
            }
        }

        #[allow(clippy::needless_range_loop)]
        for i in 0..WORD_LENGTH {
            if statuses[i] == LetterStatus::Correct {
                continue;
            }
            let remaining = &mut unmatched[letter_index(guess.char_at(i))];
            if *remaining > 0 {
                statuses[i] = LetterStatus::Present;
                *remaining -= 1;
            }
        }

        Self(statuses)
    }

    #[inline]
    #[must_use]
    pub const fn statuses(&self) -> &[LetterStatus; WORD_LENGTH] {
        &self.0
    }

    /// Status at a position (0-4)
    ///
    /// # Panics
    /// Panics if position >= 5
    #[inline]
    #[must_use]
    pub const fn status_at(&self, position: usize) -> LetterStatus {
        self.0[position]
    }

    #[must_use]
    pub fn is_solved(&self) -> bool {
        *self == Self::SOLVED
    }

    /// Number of positions with the given status
    #[must_use]
    pub fn count(&self, status: LetterStatus) -> usize {
        self.0.iter().filter(|&&s| s == status).count()
    }

    /// Encode as a base-3 number (0-242), position 0 most significant
    ///
    /// # Examples
    /// ```
    /// use wordle_hints::core::{Feedback, Word};
    ///
    /// let guess = Word::new("crane").unwrap();
    /// let target = Word::new("slate").unwrap();
    ///
    /// // C(absent) R(absent) A(correct) N(absent) E(correct)
    /// // 0×81 + 0×27 + 2×9 + 0×3 + 2 = 20
    /// assert_eq!(Feedback::simulate(&guess, &target).encode(), 20);
    /// ```
    #[must_use]
    pub fn encode(&self) -> u8 {
        self.0
            .iter()
            .fold(0u8, |acc, status| acc * 3 + status.digit())
    }

    /// Decode a value produced by [`Feedback::encode`]
    ///
    /// # Errors
    /// Returns `FeedbackError::InvalidEncoding` if `value >= 243`.
    pub fn decode(value: u8) -> Result<Self, FeedbackError> {
        if usize::from(value) >= Self::COUNT {
            return Err(FeedbackError::InvalidEncoding(value));
        }

        let mut statuses = [LetterStatus::Absent; WORD_LENGTH];
        let mut rest = value;
        for status in statuses.iter_mut().rev() {
            *status = LetterStatus::from_digit(rest % 3).unwrap_or(LetterStatus::Absent);
            rest /= 3;
        }

        Ok(Self(statuses))
    }

    /// Parse feedback from text like `"GY-G-"` or `"🟩🟨⬜🟩⬜"`
    ///
    /// # Errors
    /// Returns `FeedbackError` if the text does not contain exactly five
    /// recognised symbols.
    ///
    /// # Examples
    /// ```
    /// use wordle_hints::core::Feedback;
    ///
    /// let p1 = Feedback::parse("GY-GY").unwrap();
    /// let p2 = Feedback::parse("🟩🟨⬜🟩🟨").unwrap();
    /// assert_eq!(p1, p2);
    /// assert!(Feedback::parse("GYG").is_err());
    /// ```
    pub fn parse(text: &str) -> Result<Self, FeedbackError> {
        let symbols: Vec<char> = text.trim().chars().collect();
        if symbols.len() != WORD_LENGTH {
            return Err(FeedbackError::InvalidLength(symbols.len()));
        }

        let mut statuses = [LetterStatus::Absent; WORD_LENGTH];
        for (status, &symbol) in statuses.iter_mut().zip(&symbols) {
            *status = LetterStatus::from_symbol(symbol).ok_or(FeedbackError::InvalidSymbol(symbol))?;
        }

        Ok(Self(statuses))
    }

    /// Render as an emoji string like "🟩🟨⬜🟩🟨"
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.0.iter().map(|status| status.emoji()).collect()
    }
}

impl TryFrom<&[LetterStatus]> for Feedback {
    type Error = FeedbackError;

    fn try_from(statuses: &[LetterStatus]) -> Result<Self, Self::Error> {
        statuses
            .try_into()
            .map(Self)
            .map_err(|_| FeedbackError::InvalidLength(statuses.len()))
    }
}

impl std::str::FromStr for Feedback {
    type Err = FeedbackError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for status in &self.0 {
            let symbol = match status {
                LetterStatus::Correct => 'G',
                LetterStatus::Present => 'Y',
                LetterStatus::Absent => '-',
            };
            write!(f, "{symbol}")?;
        }
        Ok(())
    }
}

/// Compute the feedback for `guess` played against `target`
///
/// Shorthand for [`Feedback::simulate`].
#[must_use]
pub fn simulate(guess: &Word, target: &Word) -> Feedback {
    Feedback::simulate(guess, target)
}

#[cfg(test)]
mod tests {
    use super::LetterStatus::{Absent, Correct, Present};
    use super::*;

    fn feedback_for(guess: &str, target: &str) -> Feedback {
        Feedback::simulate(&Word::new(guess).unwrap(), &Word::new(target).unwrap())
    }

    #[test]
    fn solved_constant() {
        assert_eq!(Feedback::SOLVED.encode(), 242);
        assert!(Feedback::SOLVED.is_solved());
        assert_eq!(Feedback::SOLVED.count(Correct), 5);
        assert_eq!(Feedback::ALL_ABSENT.encode(), 0);
    }

    #[test]
    fn all_absent() {
        let feedback = feedback_for("abcde", "fghij");
        assert_eq!(feedback, Feedback::ALL_ABSENT);
        assert_eq!(feedback.count(Present), 0);
    }

    #[test]
    fn word_against_itself_is_solved() {
        for word in ["crane", "slate", "audio", "zzzzz", "aaaaa"] {
            assert!(feedback_for(word, word).is_solved());
        }
    }

    #[test]
    fn duplicate_guess_letter_single_in_target() {
        // One L in ALARM, already claimed by the exact match at position 1
        assert_eq!(
            feedback_for("llama", "alarm"),
            Feedback::new([Absent, Correct, Correct, Present, Present])
        );
    }

    #[test]
    fn duplicate_letters_both_present() {
        // ERASE has two E's, neither aligned with SPEED's
        assert_eq!(
            feedback_for("speed", "erase"),
            Feedback::new([Present, Absent, Present, Present, Absent])
        );
    }

    #[test]
    fn duplicate_letters_correct_takes_priority() {
        // Second O of ROBOT is exact, the first claims FLOOR's other O
        assert_eq!(
            feedback_for("robot", "floor"),
            Feedback::new([Present, Present, Absent, Correct, Absent])
        );
    }

    #[test]
    fn present_claimed_left_to_right() {
        // ASKED has one S: only the first S of SASSY is marked
        assert_eq!(
            feedback_for("sassy", "asked"),
            Feedback::new([Present, Present, Absent, Absent, Absent])
        );
        assert_eq!(
            feedback_for("geese", "creep"),
            Feedback::new([Absent, Present, Correct, Absent, Absent])
        );
    }

    #[test]
    fn anagram_is_all_present() {
        assert_eq!(
            feedback_for("alloy", "loyal"),
            Feedback::new([Present; WORD_LENGTH])
        );
    }

    #[test]
    fn encoding_most_significant_first() {
        // P P A C A = 1×81 + 1×27 + 0×9 + 2×3 + 0
        assert_eq!(feedback_for("robot", "floor").encode(), 114);
        assert_eq!(Feedback::new([Correct, Absent, Absent, Absent, Absent]).encode(), 162);
        assert_eq!(Feedback::new([Absent, Absent, Absent, Absent, Present]).encode(), 1);
    }

    #[test]
    fn encoding_round_trips_every_value() {
        let mut seen = std::collections::HashSet::new();
        for value in 0..=242u8 {
            let feedback = Feedback::decode(value).unwrap();
            assert_eq!(feedback.encode(), value);
            assert!(seen.insert(feedback));
        }
        assert_eq!(seen.len(), Feedback::COUNT);
    }

    #[test]
    fn decode_rejects_out_of_range() {
        assert_eq!(Feedback::decode(243), Err(FeedbackError::InvalidEncoding(243)));
    }

    #[test]
    fn parse_accepts_letters_and_emoji() {
        let p1 = Feedback::parse("GYG--").unwrap();
        let p2 = Feedback::parse("🟩🟨🟩⬜⬛").unwrap();
        let p3 = Feedback::parse("gygxx").unwrap();

        assert_eq!(p1, p2);
        assert_eq!(p1, p3);
        assert_eq!(p1, Feedback::new([Correct, Present, Correct, Absent, Absent]));
    }

    #[test]
    fn parse_rejects_bad_input() {
        assert_eq!(Feedback::parse("GYGGYX"), Err(FeedbackError::InvalidLength(6)));
        assert_eq!(Feedback::parse("GYG"), Err(FeedbackError::InvalidLength(3)));
        assert_eq!(Feedback::parse(""), Err(FeedbackError::InvalidLength(0)));
        assert_eq!(Feedback::parse("GZGGY"), Err(FeedbackError::InvalidSymbol('Z')));
    }

    #[test]
    fn try_from_slice_checks_length() {
        let short: &[LetterStatus] = &[Correct, Absent];
        assert_eq!(Feedback::try_from(short), Err(FeedbackError::InvalidLength(2)));

        let full: &[LetterStatus] = &[Correct; WORD_LENGTH];
        assert_eq!(Feedback::try_from(full), Ok(Feedback::SOLVED));
    }

    #[test]
    fn display_and_emoji() {
        let feedback = Feedback::new([Correct, Present, Absent, Correct, Present]);
        assert_eq!(feedback.to_string(), "GY-GY");
        assert_eq!(feedback.to_emoji(), "🟩🟨⬜🟩🟨");
    }

    #[test]
    fn status_precedence() {
        assert!(Correct > Present);
        assert!(Present > Absent);
    }
}
