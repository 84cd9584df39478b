//! Core domain types for the word game
//!
//! Words, per-letter feedback and guess history. Everything here is pure and
//! free of I/O.

mod feedback;
mod history;
mod word;

pub use feedback::{Feedback, FeedbackError, LetterStatus, simulate};
pub use history::{CharStatusMap, GuessRecord, RecordError};
pub use word::{WORD_LENGTH, Word, WordError};
pub(crate) use word::letter_index;
