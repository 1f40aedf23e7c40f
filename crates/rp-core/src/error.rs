//! Error types for the content model.

use crate::puzzle::PuzzleKind;

/// Alias for `Result<T, CoreError>`.
pub type CoreResult<T> = Result<T, CoreError>;

/// Errors that can occur when building or evaluating content.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// A sequence was constructed without any steps.
    #[error("a sequence needs at least one step")]
    EmptySequence,

    /// An answer state of one shape was evaluated against a puzzle of another.
    #[error("answer state for a {answer} puzzle does not fit a {puzzle} puzzle")]
    AnswerMismatch {
        /// The kind of the puzzle being evaluated.
        puzzle: PuzzleKind,
        /// The kind the answer state was built for.
        answer: PuzzleKind,
    },

    /// An answer-state operation was called on the wrong answer shape.
    #[error("cannot {action} on a {kind} answer")]
    WrongAnswerOperation {
        /// The operation that was attempted.
        action: &'static str,
        /// The kind of the answer state it was attempted on.
        kind: PuzzleKind,
    },

    /// An index was outside the bounds of its companion list.
    #[error("index {index} out of range (len {len})")]
    IndexOutOfRange {
        /// The offending index.
        index: usize,
        /// The length of the list it was checked against.
        len: usize,
    },
}
