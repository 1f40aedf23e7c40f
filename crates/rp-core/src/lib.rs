//! Core content model for Riddlepath.
//!
//! Defines the playable data types (sequences, intro slides, steps, and
//! the five puzzle shapes) together with the answer-state and evaluation
//! contract the progression engine builds on, and a validation pass for
//! authored content.

pub mod error;
pub mod passage;
pub mod puzzle;
pub mod sequence;
pub mod step;
pub mod validate;

pub use error::{CoreError, CoreResult};
pub use passage::{IntroSlide, Passage};
pub use puzzle::{
    AnswerState, ChoicePuzzle, MatchingPuzzle, OrderingPuzzle, PartitionItem, PartitionPuzzle,
    Puzzle, PuzzleKind, StatementPuzzle, Verdict,
};
pub use sequence::{Sequence, SequenceId};
pub use step::Step;
pub use validate::{ValidationIssue, validate_sequence};
