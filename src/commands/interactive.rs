//! Interactive CLI mode
//!
//! Text-based loop: the player enters each guess with the feedback the game
//! showed, and the assistant prints the remaining candidates and suggestions.

use crate::core::{GuessRecord, Word};
use crate::output::{write_hints, write_history, write_openers};
use crate::solver::Assistant;
use log::debug;
use std::io::{self, BufRead, Write};

/// What the player asked for on one input line
#[derive(Debug, PartialEq, Eq)]
enum Command {
    Record(GuessRecord),
    Undo,
    Reset,
    Help,
    Quit,
    Invalid(String),
}

fn parse_command(line: &str) -> Command {
    match line.trim().to_lowercase().as_str() {
        "quit" | "q" | "exit" => Command::Quit,
        "undo" | "u" => Command::Undo,
        "new" | "n" | "reset" => Command::Reset,
        "help" | "h" | "?" => Command::Help,
        input => match input.parse() {
            Ok(record) => Command::Record(record),
            Err(e) => Command::Invalid(e.to_string()),
        },
    }
}

fn write_help<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "Enter each guess followed by its feedback, e.g. 'crane GY---':")?;
    writeln!(out, "  - G/g/🟩 for correct (right letter, right spot)")?;
    writeln!(out, "  - Y/y/🟨 for present (right letter, wrong spot)")?;
    writeln!(out, "  - -/x/⬜ for absent")?;
    writeln!(out, "Commands: 'undo' last guess, 'new' game, 'quit'\n")
}

/// Run the interactive loop until 'quit' or end of input
///
/// `opening` is shown at the start of each game, when non-empty.
///
/// # Errors
///
/// Returns an error if reading input or writing output fails.
pub fn run_interactive<R: BufRead, W: Write>(
    assistant: &Assistant<'_>,
    opening: &[&Word],
    mut reader: R,
    out: &mut W,
    candidate_limit: usize,
) -> io::Result<()> {
    writeln!(out, "\nWordle Hints - Interactive Mode\n")?;
    write_help(out)?;
    if !opening.is_empty() {
        write_openers(out, opening)?;
    }

    let mut history: Vec<GuessRecord> = Vec::new();
    let mut line = String::new();

    loop {
        write!(out, "\nGuess {} > ", history.len() + 1)?;
        out.flush()?;

        line.clear();
        if reader.read_line(&mut line)? == 0 {
            writeln!(out)?;
            return Ok(());
        }

        match parse_command(&line) {
            Command::Quit => {
                writeln!(out, "Bye!")?;
                return Ok(());
            }
            Command::Help => {
                write_help(out)?;
                continue;
            }
            Command::Reset => {
                history.clear();
                writeln!(out, "New game started.")?;
                if !opening.is_empty() {
                    write_openers(out, opening)?;
                }
                continue;
            }
            Command::Undo => {
                if history.pop().is_none() {
                    writeln!(out, "Nothing to undo!")?;
                    continue;
                }
                if history.is_empty() {
                    writeln!(out, "Back to an empty board.")?;
                    continue;
                }
            }
            Command::Record(record) => {
                if !assistant.is_valid_guess(record.guess().text()) {
                    writeln!(out, "Word not found: {}", record.guess())?;
                    continue;
                }
                history.push(record);
            }
            Command::Invalid(reason) => {
                writeln!(out, "{reason}")?;
                continue;
            }
        }

        debug!("history now has {} records", history.len());
        writeln!(out)?;
        write_history(out, &history)?;
        writeln!(out)?;
        let hints = assistant.hints(&history);
        write_hints(out, &hints, candidate_limit)?;
    }
}
