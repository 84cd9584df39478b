//! Next-guess ranking
//!
//! Scores every word of the guess vocabulary against the surviving candidates
//! and keeps the band of words close to the best score, rather than a single
//! winner.

use super::calculator::{distinct_feedbacks, worst_case_bucket};
use crate::core::{CharStatusMap, Word};
use log::{debug, trace};
use rayon::prelude::*;
use std::cmp::Ordering;

/// How the primary ranking key is computed
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RankingPolicy {
    /// Minimise the largest group of candidates sharing one feedback
    #[default]
    Minimax,
    /// Maximise the number of distinct feedbacks over the first `sample` candidates
    Diversity { sample: usize },
}

/// Tuning for [`rank_suggestions`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RankConfig {
    /// Maximum number of suggestions returned
    pub limit: usize,
    /// How far a word's cost may exceed the best cost, further capped at a
    /// tenth of the candidate count
    pub max_solution_size_deviation: usize,
    /// How many fewer unused letters than the best word a word may have
    pub unused_deviation: usize,
    pub policy: RankingPolicy,
}

impl Default for RankConfig {
    fn default() -> Self {
        Self {
            limit: 8,
            max_solution_size_deviation: 3,
            unused_deviation: 0,
            policy: RankingPolicy::Minimax,
        }
    }
}

/// A guess with its ranking keys
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoredGuess<'a> {
    pub word: &'a Word,
    /// Lower is better. Worst-case bucket size under [`RankingPolicy::Minimax`];
    /// sample size minus distinct feedbacks under [`RankingPolicy::Diversity`].
    pub cost: usize,
    /// Distinct letters of the word with no known status. Higher is better.
    pub unused: usize,
}

/// Compute the ranking keys of one guess
#[must_use]
pub fn score_guess<'a>(
    guess: &'a Word,
    candidates: &[&Word],
    statuses: &CharStatusMap,
    policy: RankingPolicy,
) -> ScoredGuess<'a> {
    let cost = match policy {
        RankingPolicy::Minimax => worst_case_bucket(guess, candidates),
        RankingPolicy::Diversity { sample } => {
            let sample = &candidates[..sample.min(candidates.len())];
            sample.len() - distinct_feedbacks(guess, sample)
        }
    };

    ScoredGuess {
        word: guess,
        cost,
        unused: statuses.unused_letters(guess),
    }
}

/// Cost ascending, unused letters descending, then alphabetical
fn compare(a: &ScoredGuess<'_>, b: &ScoredGuess<'_>) -> Ordering {
    a.cost
        .cmp(&b.cost)
        .then(b.unused.cmp(&a.unused))
        .then_with(|| a.word.cmp(b.word))
}

/// Score all guesses and return the near-optimal band, best first
///
/// Returns an empty list when fewer than two candidates remain: there is
/// nothing left to distinguish.
#[must_use]
pub fn scored_suggestions<'a>(
    guesses: &'a [Word],
    candidates: &[&Word],
    statuses: &CharStatusMap,
    config: &RankConfig,
) -> Vec<ScoredGuess<'a>> {
    if candidates.len() < 2 {
        debug!("{} candidates, skipping ranking", candidates.len());
        return Vec::new();
    }

    let mut scored: Vec<ScoredGuess<'a>> = guesses
        .par_iter()
        .map(|guess| score_guess(guess, candidates, statuses, config.policy))
        .collect();
    scored.par_sort_by(compare);

    let Some(best) = scored.first().copied() else {
        return Vec::new();
    };

    let cost_tolerance = config
        .max_solution_size_deviation
        .min(candidates.len() / 10);
    scored.retain(|s| {
        s.cost - best.cost <= cost_tolerance
            && best.unused.saturating_sub(s.unused) <= config.unused_deviation
    });
    let in_band = scored.len();
    scored.truncate(config.limit);

    debug!(
        "ranked {} guesses against {} candidates: best {} (cost {}, unused {}), {in_band} in band",
        guesses.len(),
        candidates.len(),
        best.word,
        best.cost,
        best.unused
    );
    trace!("suggestions: {scored:?}");
    scored
}

/// Recommend next guesses from `guesses`, best first
///
/// # Examples
/// ```
/// use wordle_hints::core::{CharStatusMap, Word};
/// use wordle_hints::solver::minimax::{RankConfig, rank_suggestions};
///
/// let guesses: Vec<Word> = ["crane", "logic", "zzzzz"]
///     .into_iter()
///     .map(|w| Word::new(w).unwrap())
///     .collect();
/// let candidates: Vec<Word> = ["irate", "crate", "grate"]
///     .into_iter()
///     .map(|w| Word::new(w).unwrap())
///     .collect();
/// let candidate_refs: Vec<&Word> = candidates.iter().collect();
///
/// let suggestions = rank_suggestions(
///     &guesses,
///     &candidate_refs,
///     &CharStatusMap::new(),
///     &RankConfig::default(),
/// );
/// // LOGIC separates all three candidates
/// assert_eq!(suggestions[0].text(), "logic");
/// ```
#[must_use]
pub fn rank_suggestions<'a>(
    guesses: &'a [Word],
    candidates: &[&Word],
    statuses: &CharStatusMap,
    config: &RankConfig,
) -> Vec<&'a Word> {
    scored_suggestions(guesses, candidates, statuses, config)
        .into_iter()
        .map(|s| s.word)
        .collect()
}
