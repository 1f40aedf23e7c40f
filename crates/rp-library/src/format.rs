//! On-disk library format and schema migration.
//!
//! The library file carries an explicit `schema_version`; every older
//! version has its own migration function that upgrades it to the
//! current shape. Version 0 is the legacy format: a bare JSON array of
//! sequences, possibly without ids, possibly with duplicated titles.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use rp_core::Sequence;

use crate::entry::LibraryEntry;
use crate::error::{LibraryError, LibraryResult};

/// The schema version this build reads and writes.
pub const SCHEMA_VERSION: u32 = 1;

/// The persisted shape of a library.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LibraryFile {
    /// Format version of this file.
    pub schema_version: u32,
    /// When the file was written.
    pub saved_at: DateTime<Utc>,
    /// The library entries, in display order.
    pub entries: Vec<LibraryEntry>,
}

/// Upgrade a parsed library file of any supported version to the
/// current schema.
pub fn migrate(value: serde_json::Value) -> LibraryResult<LibraryFile> {
    let version = value
        .get("schema_version")
        .and_then(serde_json::Value::as_u64)
        .unwrap_or(0);
    match version {
        0 => migrate_v0(value),
        1 => Ok(serde_json::from_value(value)?),
        other => Err(LibraryError::UnsupportedVersion(other)),
    }
}

/// Version 0: a bare array of sequences.
///
/// Ids missing from old files are backfilled during deserialization;
/// duplicate titles keep their first occurrence and drop the rest.
fn migrate_v0(value: serde_json::Value) -> LibraryResult<LibraryFile> {
    if !value.is_array() {
        return Err(LibraryError::InvalidFormat(
            "a version 0 library must be an array of sequences".to_string(),
        ));
    }
    let sequences: Vec<Sequence> = serde_json::from_value(value)?;

    let mut entries: Vec<LibraryEntry> = Vec::with_capacity(sequences.len());
    for sequence in sequences {
        let duplicate = entries
            .iter()
            .any(|e| e.sequence.title.eq_ignore_ascii_case(&sequence.title));
        if !duplicate {
            entries.push(LibraryEntry::new(sequence));
        }
    }

    Ok(LibraryFile {
        schema_version: SCHEMA_VERSION,
        saved_at: Utc::now(),
        entries,
    })
}
