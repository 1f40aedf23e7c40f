//! Persisted sequence library for Riddlepath.
//!
//! Owns the ordered list of playable sequences and their accumulated
//! run statistics, stored as a JSON file with a versioned schema and an
//! explicit migration per version. Implements the engine's
//! [`rp_engine::LibraryStore`] boundary.

pub mod builtin;
pub mod entry;
pub mod error;
pub mod format;
pub mod library;

pub use builtin::starter_sequences;
pub use entry::{LibraryEntry, RunTotals};
pub use error::{LibraryError, LibraryResult};
pub use format::{LibraryFile, SCHEMA_VERSION, migrate};
pub use library::Library;
