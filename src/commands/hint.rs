//! One-shot hint command
//!
//! Builds a history from `GUESS=FEEDBACK` arguments.

use crate::core::{GuessRecord, RecordError};

/// Parse history arguments in order
///
/// # Errors
///
/// Returns the first `RecordError` encountered; no partial history is returned.
pub fn parse_history<S: AsRef<str>>(inputs: &[S]) -> Result<Vec<GuessRecord>, RecordError> {
    inputs.iter().map(|input| input.as_ref().parse()).collect()
}
