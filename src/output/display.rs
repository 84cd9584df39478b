//! Display functions for command results

use super::formatters::{colored_record, solutions_heading, word_preview};
use crate::core::{Feedback, GuessRecord, Word};
use crate::solver::Hints;
use colored::Colorize;
use std::io::{self, Write};

/// Print candidates and suggestions after the latest record
///
/// # Errors
/// Returns any error from the underlying writer.
pub fn write_hints<W: Write>(out: &mut W, hints: &Hints<'_>, candidate_limit: usize) -> io::Result<()> {
    if hints.has_no_solution() {
        writeln!(out, "{}", "No possible solution".red().bold())?;
        writeln!(out, "Check the feedback you entered, or type 'undo'.")?;
        return Ok(());
    }

    writeln!(
        out,
        "{}:",
        solutions_heading(hints.candidates.len()).bright_cyan().bold()
    )?;
    writeln!(out, "{}", word_preview(&hints.candidates, candidate_limit))?;

    if !hints.suggestions.is_empty() {
        writeln!(out, "\n{}", "Suggestions for next guesses:".bright_cyan().bold())?;
        writeln!(
            out,
            "{}",
            word_preview(&hints.suggestions, hints.suggestions.len()).bright_yellow()
        )?;
    }
    Ok(())
}

/// Print the board so far
///
/// # Errors
/// Returns any error from the underlying writer.
pub fn write_history<W: Write>(out: &mut W, history: &[GuessRecord]) -> io::Result<()> {
    for record in history {
        writeln!(out, "  {}", colored_record(record))?;
    }
    Ok(())
}

/// Print a simulated feedback
///
/// # Errors
/// Returns any error from the underlying writer.
pub fn write_feedback<W: Write>(out: &mut W, guess: &Word, feedback: Feedback) -> io::Result<()> {
    let record = GuessRecord::new(guess.clone(), feedback);
    writeln!(
        out,
        "{}  {}  {} (code {})",
        colored_record(&record),
        feedback.to_emoji(),
        feedback,
        feedback.encode()
    )
}

/// Print first-guess suggestions
///
/// # Errors
/// Returns any error from the underlying writer.
pub fn write_openers<W: Write>(out: &mut W, openers: &[&Word]) -> io::Result<()> {
    writeln!(out, "{}", "Try these as your first guess:".bright_cyan().bold())?;
    writeln!(out, "{}", word_preview(openers, openers.len()).bright_yellow())
}
