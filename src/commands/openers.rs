//! First-guess suggestions
//!
//! Ranking against the full solution list is slow, so a spinner runs while
//! the assistant works.

use crate::core::Word;
use crate::solver::Assistant;
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

/// Rank the guess vocabulary against every solution
pub fn run_openers<'a>(assistant: &Assistant<'a>) -> Vec<&'a Word> {
    let vocabulary = assistant.vocabulary();

    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg} [{elapsed}]")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    spinner.set_message(format!(
        "Ranking {} guesses against {} solutions",
        vocabulary.guesses().len(),
        vocabulary.solutions().len()
    ));
    spinner.enable_steady_tick(Duration::from_millis(100));

    let openers = assistant.openers();

    spinner.finish_and_clear();
    openers
}
