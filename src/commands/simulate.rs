//! Feedback simulation command

use crate::core::{Feedback, Word, WordError};

/// Parse both words and compute the feedback `guess` gets against `target`
///
/// # Errors
///
/// Returns a `WordError` if either word is invalid.
pub fn simulate_words(guess: &str, target: &str) -> Result<(Word, Word, Feedback), WordError> {
    let guess = Word::new(guess)?;
    let target = Word::new(target)?;
    let feedback = Feedback::simulate(&guess, &target);
    Ok((guess, target, feedback))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn simulates_case_insensitively() {
        let (_, _, feedback) = simulate_words("LLAMA", "alarm").unwrap();
        assert_eq!(feedback.to_string(), "-GGYY");
    }

    #[test]
    fn rejects_invalid_word() {
        assert_eq!(
            simulate_words("crane", "toolong").unwrap_err(),
            WordError::InvalidLength(7)
        );
    }
}
