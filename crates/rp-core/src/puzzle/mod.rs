//! The five puzzle shapes and their shared evaluation contract.
//!
//! Every puzzle is evaluated the same way: the interaction surface builds
//! an [`AnswerState`] for the puzzle, lets the player fill it in, and asks
//! for a [`Verdict`] on explicit request. A verdict is either incomplete
//! (with a reason shown to the player, never counted as a wrong answer)
//! or answered with a correctness flag. This keeps the progression engine
//! variant-agnostic: it only branches on puzzle kind to pick a scoring
//! table.

pub mod answer;
pub mod choice;
pub mod matching;
pub mod ordering;
pub mod partition;
pub mod statement;
pub mod verdict;

pub use answer::AnswerState;
pub use choice::ChoicePuzzle;
pub use matching::MatchingPuzzle;
pub use ordering::OrderingPuzzle;
pub use partition::{PartitionItem, PartitionPuzzle};
pub use statement::StatementPuzzle;
pub use verdict::Verdict;

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};

/// A puzzle, one case per interaction shape.
///
/// Index fields inside each variant (`correct`, `basket`, `pairs`) are
/// authoring-time contracts; [`crate::validate_sequence`] checks them at
/// load time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Puzzle {
    /// Pick the one correct option.
    Choice(ChoicePuzzle),
    /// Sort every item into its basket.
    Partition(PartitionPuzzle),
    /// Arrange all elements in their authored order.
    Ordering(OrderingPuzzle),
    /// Pair every left entry with its right entry.
    Matching(MatchingPuzzle),
    /// Find the single true statement.
    TrueStatement(StatementPuzzle),
}

/// Fieldless discriminant of [`Puzzle`], used for scoring tables and display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PuzzleKind {
    /// Single-choice.
    Choice,
    /// Set-partition ("baskets").
    Partition,
    /// Total-order ("chain").
    Ordering,
    /// Bijection ("pair matching").
    Matching,
    /// Single-true-statement.
    TrueStatement,
}

impl std::fmt::Display for PuzzleKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Choice => "choice",
            Self::Partition => "partition",
            Self::Ordering => "ordering",
            Self::Matching => "matching",
            Self::TrueStatement => "true-statement",
        };
        write!(f, "{name}")
    }
}

impl Puzzle {
    /// The kind of this puzzle.
    pub fn kind(&self) -> PuzzleKind {
        match self {
            Self::Choice(_) => PuzzleKind::Choice,
            Self::Partition(_) => PuzzleKind::Partition,
            Self::Ordering(_) => PuzzleKind::Ordering,
            Self::Matching(_) => PuzzleKind::Matching,
            Self::TrueStatement(_) => PuzzleKind::TrueStatement,
        }
    }

    /// Evaluate a player's in-progress answer against this puzzle.
    ///
    /// Returns an error if the answer state was built for a different
    /// puzzle shape (or a differently sized puzzle of the same shape);
    /// the surface avoids this by building the state via
    /// [`AnswerState::for_puzzle`].
    pub fn evaluate(&self, answer: &AnswerState) -> CoreResult<Verdict> {
        match (self, answer) {
            (Self::Choice(p), AnswerState::Choice { selected }) => Ok(p.evaluate(*selected)),
            (Self::Partition(p), AnswerState::Partition { assignments })
                if assignments.len() == p.items.len() =>
            {
                Ok(p.evaluate(assignments))
            }
            (Self::Ordering(p), AnswerState::Ordering { slots })
                if slots.len() == p.elements.len() =>
            {
                Ok(p.evaluate(slots))
            }
            (Self::Matching(p), AnswerState::Matching { assignments })
                if assignments.len() == p.left.len() =>
            {
                Ok(p.evaluate(assignments))
            }
            (Self::TrueStatement(p), AnswerState::Statement { selected }) => {
                Ok(p.evaluate(*selected))
            }
            _ => Err(CoreError::AnswerMismatch {
                puzzle: self.kind(),
                answer: answer.kind(),
            }),
        }
    }
}
