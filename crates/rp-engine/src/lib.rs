//! Progression engine for Riddlepath.
//!
//! Drives a player through one sequence: intro slides, then per step a
//! main attempt, a single-choice second chance, an explanation, and an
//! optional context, ending at the end screen. Layers a scoring and
//! streak system over the puzzle verdicts and records one statistics
//! write per completed run through the [`LibraryStore`] boundary.

pub mod error;
pub mod phase;
pub mod score;
pub mod session;
pub mod store;

pub use error::{EngineError, EngineResult};
pub use phase::{Phase, Progress};
pub use score::{
    Attempt, SECOND_CHANCE_POINTS, STREAK_BONUS_AT, Scored, base_gain, base_loss, score_outcome,
};
pub use session::{ActionOutcome, PlaySession, PlayerAction};
pub use store::LibraryStore;
