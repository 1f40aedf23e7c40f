//! Library entries: a sequence plus its accumulated statistics.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use rp_core::Sequence;

/// Accumulated statistics across all completed runs of one sequence.
///
/// Mutated exactly once per completed run, by the engine's terminal
/// transition through the store boundary.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunTotals {
    /// Number of completed runs.
    pub runs: u32,
    /// Points earned across all runs.
    pub points: i64,
    /// Riddle steps played across all runs.
    pub riddles: u64,
}

/// One sequence in the library, with its statistics.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LibraryEntry {
    /// The playable sequence.
    pub sequence: Sequence,
    /// Accumulated run statistics.
    #[serde(default)]
    pub totals: RunTotals,
    /// When the sequence was last played to completion.
    #[serde(default)]
    pub last_played: Option<DateTime<Utc>>,
}

impl LibraryEntry {
    /// Wrap a sequence with zeroed statistics.
    pub fn new(sequence: Sequence) -> Self {
        Self {
            sequence,
            totals: RunTotals::default(),
            last_played: None,
        }
    }
}
