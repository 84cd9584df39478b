//! Feedback partition statistics for a single guess
//!
//! Given a guess and set of candidates, groups the candidates by the encoded
//! feedback the guess would receive from each of them.

use crate::core::{Feedback, Word};
use rustc_hash::FxHashMap;

/// Size of the largest group of candidates sharing one feedback
///
/// This is how many candidates would remain if the least helpful feedback
/// came back.
///
/// # Examples
/// ```
/// use wordle_hints::core::Word;
/// use wordle_hints::solver::minimax::worst_case_bucket;
///
/// let guess = Word::new("crane").unwrap();
/// let candidates = vec![
///     Word::new("slate").unwrap(),
///     Word::new("irate").unwrap(),
/// ];
/// let candidate_refs: Vec<&Word> = candidates.iter().collect();
///
/// assert!(worst_case_bucket(&guess, &candidate_refs) <= 2);
/// ```
#[must_use]
pub fn worst_case_bucket(guess: &Word, candidates: &[&Word]) -> usize {
    group_by_feedback(guess, candidates)
        .values()
        .max()
        .copied()
        .unwrap_or(0)
}

/// Number of different feedbacks the guess can receive from the candidates
#[must_use]
pub fn distinct_feedbacks(guess: &Word, candidates: &[&Word]) -> usize {
    group_by_feedback(guess, candidates).len()
}

/// Tally candidates by the base-3 encoding of their feedback
fn group_by_feedback(guess: &Word, candidates: &[&Word]) -> FxHashMap<u8, usize> {
    let mut counts = FxHashMap::default();

    for &candidate in candidates {
        let code = Feedback::simulate(guess, candidate).encode();
        *counts.entry(code).or_insert(0) += 1;
    }

    counts
}

#[cfg(test)]
mod tests {
    use super::*;

    fn refs(words: &[Word]) -> Vec<&Word> {
        words.iter().collect()
    }

    #[test]
    fn worst_case_perfect_split() {
        let guess = Word::new("slate").unwrap();
        let candidates = [Word::new("slate").unwrap(), Word::new("zzzzz").unwrap()];

        assert_eq!(worst_case_bucket(&guess, &refs(&candidates)), 1);
        assert_eq!(distinct_feedbacks(&guess, &refs(&candidates)), 2);
    }

    #[test]
    fn worst_case_all_same_feedback() {
        let guess = Word::new("zzzzz").unwrap();
        let candidates = [
            Word::new("aaaaa").unwrap(),
            Word::new("bbbbb").unwrap(),
            Word::new("ccccc").unwrap(),
        ];

        assert_eq!(worst_case_bucket(&guess, &refs(&candidates)), 3);
        assert_eq!(distinct_feedbacks(&guess, &refs(&candidates)), 1);
    }

    #[test]
    fn worst_case_skewed_distribution() {
        // Against CRANE: IRATE and GRATE both give -GG-G, CRATE gives GGG-G
        let guess = Word::new("crane").unwrap();
        let candidates = [
            Word::new("irate").unwrap(),
            Word::new("crate").unwrap(),
            Word::new("grate").unwrap(),
        ];

        assert_eq!(worst_case_bucket(&guess, &refs(&candidates)), 2);
        assert_eq!(distinct_feedbacks(&guess, &refs(&candidates)), 2);
    }

    #[test]
    fn worst_case_empty_candidates() {
        let guess = Word::new("crane").unwrap();
        assert_eq!(worst_case_bucket(&guess, &[]), 0);
        assert_eq!(distinct_feedbacks(&guess, &[]), 0);
    }

    #[test]
    fn buckets_cover_every_candidate() {
        let guess = Word::new("crane").unwrap();
        let candidates = [
            Word::new("slate").unwrap(),
            Word::new("crate").unwrap(),
            Word::new("trace").unwrap(),
            Word::new("caret").unwrap(),
        ];

        let groups = group_by_feedback(&guess, &refs(&candidates));
        assert_eq!(groups.values().sum::<usize>(), candidates.len());
        assert!(groups.keys().all(|&code| usize::from(code) < Feedback::COUNT));
    }
}
