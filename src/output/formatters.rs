//! Formatting utilities for terminal output

use crate::core::{GuessRecord, LetterStatus, Word};
use colored::{ColoredString, Colorize};

/// Render a guess as coloured letter tiles
#[must_use]
pub fn colored_record(record: &GuessRecord) -> String {
    record
        .guess()
        .chars()
        .iter()
        .zip(record.feedback().statuses())
        .map(|(&letter, &status)| tile(letter, status).to_string())
        .collect()
}

fn tile(letter: u8, status: LetterStatus) -> ColoredString {
    let text = format!(" {} ", char::from(letter.to_ascii_uppercase())).bold();
    match status {
        LetterStatus::Correct => text.black().on_green(),
        LetterStatus::Present => text.black().on_yellow(),
        LetterStatus::Absent => text.white().on_bright_black(),
    }
}

/// Join up to `limit` words, noting how many were left out
#[must_use]
pub fn word_preview(words: &[&Word], limit: usize) -> String {
    let mut preview = words
        .iter()
        .take(limit)
        .map(|w| w.text())
        .collect::<Vec<_>>()
        .join(" ");

    if words.len() > limit {
        preview.push_str(&format!("\nand {} more ...", words.len() - limit));
    }
    preview
}

/// "1 possible solution" / "N possible solutions"
#[must_use]
pub fn solutions_heading(count: usize) -> String {
    let plural = if count == 1 { "" } else { "s" };
    format!("{count} possible solution{plural}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::loader::words_from_slice;

    #[test]
    fn preview_within_limit() {
        let words = words_from_slice(&["crane", "slate"]);
        let refs: Vec<&Word> = words.iter().collect();
        assert_eq!(word_preview(&refs, 20), "crane slate");
    }

    #[test]
    fn preview_truncates_with_remainder() {
        let words = words_from_slice(&["crane", "slate", "irate", "grate"]);
        let refs: Vec<&Word> = words.iter().collect();
        assert_eq!(word_preview(&refs, 2), "crane slate\nand 2 more ...");
    }

    #[test]
    fn preview_empty() {
        assert_eq!(word_preview(&[], 20), "");
    }

    #[test]
    fn heading_pluralises() {
        assert_eq!(solutions_heading(1), "1 possible solution");
        assert_eq!(solutions_heading(3), "3 possible solutions");
    }

    #[test]
    fn colored_record_keeps_letters() {
        colored::control::set_override(false);
        let record = GuessRecord::parse("crane", "GY---").unwrap();
        assert_eq!(colored_record(&record), " C  R  A  N  E ");
    }
}
