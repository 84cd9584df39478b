//! Main assistant interface

use super::filter::filter_candidates;
use super::minimax::{RankConfig, rank_suggestions};
use crate::core::{CharStatusMap, GuessRecord, Word};
use crate::wordlists::Vocabulary;
use log::info;

/// Candidates and next-guess suggestions for one history
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hints<'a> {
    /// Solutions still consistent with the history, in list order
    pub candidates: Vec<&'a Word>,
    /// Recommended next guesses, best first
    pub suggestions: Vec<&'a Word>,
}

impl Hints<'_> {
    /// No solution fits the history
    #[must_use]
    pub fn has_no_solution(&self) -> bool {
        self.candidates.is_empty()
    }

    /// Exactly one solution fits the history
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.candidates.len() == 1
    }
}

/// Stateless hint engine over a shared vocabulary
///
/// Holds no history: every call receives the full history it should use.
#[derive(Debug, Clone, Copy)]
pub struct Assistant<'a> {
    vocabulary: &'a Vocabulary,
    config: RankConfig,
}

impl<'a> Assistant<'a> {
    #[must_use]
    pub const fn new(vocabulary: &'a Vocabulary, config: RankConfig) -> Self {
        Self { vocabulary, config }
    }

    #[must_use]
    pub const fn vocabulary(&self) -> &'a Vocabulary {
        self.vocabulary
    }

    #[must_use]
    pub const fn config(&self) -> &RankConfig {
        &self.config
    }

    /// Solutions consistent with every record of the history
    #[must_use]
    pub fn filter_candidates(&self, history: &[GuessRecord]) -> Vec<&'a Word> {
        filter_candidates(history, self.vocabulary.solutions())
    }

    /// Rank the guess vocabulary against the given candidates
    #[must_use]
    pub fn rank_suggestions(&self, candidates: &[&Word], statuses: &CharStatusMap) -> Vec<&'a Word> {
        rank_suggestions(self.vocabulary.guesses(), candidates, statuses, &self.config)
    }

    /// Filter the solutions, then rank guesses if more than one remains
    ///
    /// # Examples
    /// ```
    /// use wordle_hints::core::GuessRecord;
    /// use wordle_hints::solver::{Assistant, RankConfig};
    /// use wordle_hints::wordlists::Vocabulary;
    ///
    /// let vocabulary = Vocabulary::embedded();
    /// let assistant = Assistant::new(&vocabulary, RankConfig::default());
    ///
    /// let history = [GuessRecord::parse("crane", "GGGGG").unwrap()];
    /// let hints = assistant.hints(&history);
    /// assert!(hints.is_solved());
    /// assert!(hints.suggestions.is_empty());
    /// ```
    #[must_use]
    pub fn hints(&self, history: &[GuessRecord]) -> Hints<'a> {
        let candidates = self.filter_candidates(history);

        let suggestions = if candidates.len() > 1 {
            let statuses = CharStatusMap::from_history(history);
            self.rank_suggestions(&candidates, &statuses)
        } else {
            Vec::new()
        };

        info!(
            "{} records: {} candidates, {} suggestions",
            history.len(),
            candidates.len(),
            suggestions.len()
        );
        Hints {
            candidates,
            suggestions,
        }
    }

    /// Suggestions for the first guess of a game
    ///
    /// Ranks the whole guess vocabulary against every solution, which is the
    /// most expensive call the assistant makes.
    #[must_use]
    pub fn openers(&self) -> Vec<&'a Word> {
        self.hints(&[]).suggestions
    }

    /// Whether the word is in either list of the vocabulary
    #[must_use]
    pub fn is_valid_guess(&self, text: &str) -> bool {
        self.vocabulary.is_valid_guess(text)
    }
}
