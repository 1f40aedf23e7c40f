//! Single-true-statement ("logic minefield") puzzles.

use serde::{Deserialize, Serialize};

use super::verdict::Verdict;

/// A single-true-statement puzzle: exactly one statement is true.
///
/// Evaluates like a single-choice puzzle; the distinct kind exists so
/// scoring and presentation can treat it differently.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatementPuzzle {
    /// The statements presented to the player.
    pub statements: Vec<String>,
    /// Index of the one true statement.
    pub correct: usize,
}

impl StatementPuzzle {
    /// Create a single-true-statement puzzle.
    pub fn new(statements: Vec<String>, correct: usize) -> Self {
        Self {
            statements,
            correct,
        }
    }

    /// Evaluate a selection. No selection is incomplete; otherwise the
    /// answer is correct iff the selected statement is the true one.
    pub fn evaluate(&self, selected: Option<usize>) -> Verdict {
        match selected {
            None => Verdict::incomplete("no statement selected yet"),
            Some(index) => Verdict::answered(index == self.correct),
        }
    }
}
