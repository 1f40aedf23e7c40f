//! The boundary between the engine and the sequence library.

use rp_core::{Sequence, SequenceId};

/// Read and write access the progression engine needs from a library.
///
/// Deliberately narrow: the engine reads the ordered sequence list and
/// performs a single fire-and-forget statistics write per completed run.
/// Persistence format, migration, and deduplication are the store's
/// concern; the engine treats sequences as already-valid, immutable
/// data.
pub trait LibraryStore {
    /// All playable sequences, in library order.
    fn sequences(&self) -> Vec<&Sequence>;

    /// Record one completed run: bump the run counter and add the earned
    /// points and played step count to the sequence's accumulated
    /// totals. No acknowledgement; an unknown id is ignored.
    fn record_run(&mut self, id: SequenceId, points: i32, steps: u32);
}
