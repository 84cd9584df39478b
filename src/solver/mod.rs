//! Candidate filtering and next-guess ranking
//!
//! Every operation here is a pure function of its arguments: history is
//! passed in on each call and nothing is cached between calls.

mod engine;
mod filter;
pub mod minimax;

pub use engine::{Assistant, Hints};
pub use filter::{filter_candidates, is_consistent, matches_record};
pub use minimax::{RankConfig, RankingPolicy, ScoredGuess, rank_suggestions};
