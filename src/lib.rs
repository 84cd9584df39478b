//! Wordle Hints
//!
//! Narrows a five-letter word game down to the answers consistent with the
//! feedback seen so far, and recommends next guesses that minimise the
//! worst-case number of answers left.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_hints::core::GuessRecord;
//! use wordle_hints::solver::{Assistant, RankConfig};
//! use wordle_hints::wordlists::Vocabulary;
//!
//! let vocabulary = Vocabulary::embedded();
//! let assistant = Assistant::new(&vocabulary, RankConfig::default());
//!
//! let history = [GuessRecord::parse("crane", "-----").unwrap()];
//! let hints = assistant.hints(&history);
//! assert!(hints.candidates.iter().all(|w| !w.has_letter(b'e')));
//! ```

// Core domain types
pub mod core;

// Filtering and ranking
pub mod solver;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
