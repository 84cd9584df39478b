//! Candidate filtering against guess history
//!
//! A candidate survives when it could have produced every recorded feedback.
//! Each record is checked with three rule passes, in order:
//!
//! 1. Correct: the candidate has the guessed letter at that position.
//! 2. Present: the candidate has the letter elsewhere, at least as many times
//!    as the record marks it Correct or Present.
//! 3. Absent: the candidate does not have the letter at that position, and has
//!    no occurrences beyond those marked Correct or Present. With no such marks
//!    the letter must be missing entirely.
//!
//! Present marks are handed out left to right, so an Absent occurrence of a
//! letter followed by a Present occurrence of the same letter can never be
//! produced by the game and rejects every candidate.

use crate::core::{GuessRecord, LetterStatus, WORD_LENGTH, Word, letter_index};
use log::debug;

/// Keep the solutions consistent with every record, in list order
///
/// An empty history keeps every solution. An empty result means the feedback
/// is contradictory or the target is not in the list.
///
/// # Examples
/// ```
/// use wordle_hints::core::{GuessRecord, Word};
/// use wordle_hints::solver::filter_candidates;
///
/// let solutions: Vec<Word> = ["crane", "slate", "irate"]
///     .into_iter()
///     .map(|w| Word::new(w).unwrap())
///     .collect();
/// let history = [GuessRecord::parse("crane", "--G-G").unwrap()];
///
/// let candidates = filter_candidates(&history, &solutions);
/// assert_eq!(candidates.len(), 1);
/// assert_eq!(candidates[0].text(), "slate");
/// ```
#[must_use]
pub fn filter_candidates<'a>(history: &[GuessRecord], solutions: &'a [Word]) -> Vec<&'a Word> {
    let candidates: Vec<&'a Word> = solutions
        .iter()
        .filter(|candidate| is_consistent(candidate, history))
        .collect();

    debug!(
        "{} of {} solutions consistent with {} records",
        candidates.len(),
        solutions.len(),
        history.len()
    );
    candidates
}

/// Whether `candidate` agrees with every record in the history
#[must_use]
pub fn is_consistent(candidate: &Word, history: &[GuessRecord]) -> bool {
    history
        .iter()
        .all(|record| matches_record(candidate, record))
}

/// Whether `candidate`, taken as the target, would produce this record's feedback
#[must_use]
pub fn matches_record(candidate: &Word, record: &GuessRecord) -> bool {
    let guess = record.guess();
    let statuses = record.feedback().statuses();
    // Correct + Present marks per letter, filled by the first two passes
    let mut marked = [0u8; 26];

    for i in positions_with(statuses, LetterStatus::Correct) {
        let letter = guess.char_at(i);
        if candidate.char_at(i) != letter {
            return false;
        }
        marked[letter_index(letter)] += 1;
    }

    for i in positions_with(statuses, LetterStatus::Present) {
        let letter = guess.char_at(i);
        if candidate.char_at(i) == letter || !candidate.has_letter(letter) {
            return false;
        }
        marked[letter_index(letter)] += 1;
    }

    for i in positions_with(statuses, LetterStatus::Present) {
        let letter = guess.char_at(i);
        if candidate.count_of(letter) < marked[letter_index(letter)] {
            return false;
        }
    }

    for i in positions_with(statuses, LetterStatus::Absent) {
        let letter = guess.char_at(i);
        if candidate.char_at(i) == letter || candidate.count_of(letter) != marked[letter_index(letter)] {
            return false;
        }
        let present_later = (i + 1..WORD_LENGTH)
            .any(|j| statuses[j] == LetterStatus::Present && guess.char_at(j) == letter);
        if present_later {
            return false;
        }
    }

    true
}

fn positions_with(
    statuses: &[LetterStatus; WORD_LENGTH],
    wanted: LetterStatus,
) -> impl Iterator<Item = usize> + '_ {
    statuses
        .iter()
        .enumerate()
        .filter(move |&(_, &status)| status == wanted)
        .map(|(i, _)| i)
}
