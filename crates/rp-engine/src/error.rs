//! Error types for the progression engine.

use crate::phase::Phase;

/// Alias for `Result<T, EngineError>`.
pub type EngineResult<T> = Result<T, EngineError>;

/// Errors that can occur while driving a play session.
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    /// A session was started on a sequence with no steps.
    #[error("cannot play a sequence with no steps")]
    EmptySequence,

    /// A player action arrived in a phase that does not accept it.
    #[error("\"{action}\" is not available during the {phase} phase")]
    ActionNotAvailable {
        /// The action that was attempted.
        action: &'static str,
        /// The phase it was attempted in.
        phase: Phase,
    },

    /// A content-model error surfaced during evaluation.
    #[error(transparent)]
    Core(#[from] rp_core::CoreError),
}
