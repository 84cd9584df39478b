//! Minimax-based guess ranking
//!
//! Ranks guesses by how small the largest remaining group of candidates can
//! be after their feedback arrives.

mod calculator;
mod selector;

pub use calculator::{distinct_feedbacks, worst_case_bucket};
pub use selector::{
    RankConfig, RankingPolicy, ScoredGuess, rank_suggestions, score_guess, scored_suggestions,
};
