//! Single-choice puzzles.

use serde::{Deserialize, Serialize};

use super::verdict::Verdict;

/// A single-choice puzzle: exactly one of the options is correct.
///
/// Also used as every step's second-chance puzzle, regardless of the
/// main puzzle's shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChoicePuzzle {
    /// The options presented to the player.
    pub options: Vec<String>,
    /// Index of the correct option.
    pub correct: usize,
}

impl ChoicePuzzle {
    /// Create a single-choice puzzle.
    pub fn new(options: Vec<String>, correct: usize) -> Self {
        Self { options, correct }
    }

    /// Evaluate a selection. No selection is incomplete; otherwise the
    /// answer is correct iff the selected index matches.
    pub fn evaluate(&self, selected: Option<usize>) -> Verdict {
        match selected {
            None => Verdict::incomplete("no option selected yet"),
            Some(index) => Verdict::answered(index == self.correct),
        }
    }
}
