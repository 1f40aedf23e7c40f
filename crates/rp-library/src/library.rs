//! The in-memory library and its persistence.

use std::fs;
use std::path::Path;

use chrono::Utc;
use strsim::jaro_winkler;

use rp_core::{Sequence, SequenceId, ValidationIssue, validate_sequence};
use rp_engine::LibraryStore;

use crate::entry::LibraryEntry;
use crate::error::{LibraryError, LibraryResult};
use crate::format::{LibraryFile, SCHEMA_VERSION, migrate};

/// Minimum similarity for fuzzy title resolution (0.0-1.0).
const FUZZY_THRESHOLD: f64 = 0.8;

/// The ordered sequence library.
///
/// Sequences are validated on the way in: error-level issues fail the
/// load, so the engine only ever sees well-formed content. Statistics
/// writes go through the [`LibraryStore`] implementation; durability is
/// the caller's concern via [`Library::save`].
#[derive(Debug, Clone, Default)]
pub struct Library {
    entries: Vec<LibraryEntry>,
}

impl Library {
    /// Create an empty library.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a library with the built-in starter sequences.
    pub fn with_starter() -> Self {
        let entries = crate::builtin::starter_sequences()
            .into_iter()
            .map(LibraryEntry::new)
            .collect();
        Self { entries }
    }

    /// Build a library from entries, rejecting duplicate titles and
    /// invalid sequences.
    pub fn from_entries(entries: Vec<LibraryEntry>) -> LibraryResult<Self> {
        let mut library = Self::new();
        for entry in entries {
            library.insert(entry)?;
        }
        Ok(library)
    }

    /// Load a library file, migrating older schema versions.
    pub fn load(path: &Path) -> LibraryResult<Self> {
        let text = fs::read_to_string(path)?;
        let value: serde_json::Value = serde_json::from_str(&text)?;
        let file = migrate(value)?;
        Self::from_entries(file.entries)
    }

    /// Write the library to a file in the current schema.
    pub fn save(&self, path: &Path) -> LibraryResult<()> {
        let file = LibraryFile {
            schema_version: SCHEMA_VERSION,
            saved_at: Utc::now(),
            entries: self.entries.clone(),
        };
        let text = serde_json::to_string_pretty(&file)?;
        fs::write(path, text)?;
        Ok(())
    }

    /// Add a sequence with zeroed statistics.
    pub fn add(&mut self, sequence: Sequence) -> LibraryResult<()> {
        self.insert(LibraryEntry::new(sequence))
    }

    /// All entries, in display order.
    pub fn entries(&self) -> &[LibraryEntry] {
        &self.entries
    }

    /// Number of sequences in the library.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the library has no sequences.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The entry for a sequence id.
    pub fn entry(&self, id: SequenceId) -> Option<&LibraryEntry> {
        self.entries.iter().find(|e| e.sequence.id == id)
    }

    /// Resolve a player-typed title to a sequence id, exact
    /// (case-insensitive) first, then fuzzy.
    pub fn resolve_title(&self, input: &str) -> Option<SequenceId> {
        let input_lower = input.to_lowercase();
        if let Some(entry) = self
            .entries
            .iter()
            .find(|e| e.sequence.title.to_lowercase() == input_lower)
        {
            return Some(entry.sequence.id);
        }

        self.entries
            .iter()
            .map(|e| {
                let score = jaro_winkler(&input_lower, &e.sequence.title.to_lowercase());
                (e.sequence.id, score)
            })
            .filter(|(_, score)| *score >= FUZZY_THRESHOLD)
            .max_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(std::cmp::Ordering::Equal))
            .map(|(id, _)| id)
    }

    /// Run the content validation pass over every sequence.
    ///
    /// Loaded libraries are already free of error-level issues, so for
    /// them this surfaces warnings only.
    pub fn check(&self) -> Vec<ValidationIssue> {
        self.entries
            .iter()
            .flat_map(|e| validate_sequence(&e.sequence))
            .collect()
    }

    fn insert(&mut self, entry: LibraryEntry) -> LibraryResult<()> {
        let title = &entry.sequence.title;
        if self
            .entries
            .iter()
            .any(|e| e.sequence.title.eq_ignore_ascii_case(title))
        {
            return Err(LibraryError::DuplicateTitle(title.clone()));
        }
        if let Some(issue) = validate_sequence(&entry.sequence)
            .into_iter()
            .find(|i| i.is_error)
        {
            return Err(LibraryError::InvalidSequence {
                title: title.clone(),
                message: issue.to_string(),
            });
        }
        self.entries.push(entry);
        Ok(())
    }
}

impl LibraryStore for Library {
    fn sequences(&self) -> Vec<&Sequence> {
        self.entries.iter().map(|e| &e.sequence).collect()
    }

    fn record_run(&mut self, id: SequenceId, points: i32, steps: u32) {
        if let Some(entry) = self.entries.iter_mut().find(|e| e.sequence.id == id) {
            entry.totals.runs += 1;
            entry.totals.points += i64::from(points);
            entry.totals.riddles += u64::from(steps);
            entry.last_played = Some(Utc::now());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rp_core::{ChoicePuzzle, Passage, Puzzle, Step};

    fn sequence(title: &str) -> Sequence {
        Sequence::new(
            title,
            vec![Step::new(
                "Only",
                Puzzle::Choice(ChoicePuzzle::new(vec!["a".into(), "b".into()], 0)),
                ChoicePuzzle::new(vec!["x".into(), "y".into()], 1),
                Passage::new("Why."),
            )],
            Passage::new("end"),
        )
        .unwrap()
    }

    #[test]
    fn starter_library_is_valid() {
        let library = Library::with_starter();
        assert!(!library.is_empty());
        assert!(library.check().iter().all(|i| !i.is_error));
    }

    #[test]
    fn rejects_duplicate_titles() {
        let mut library = Library::new();
        library.add(sequence("Same")).unwrap();
        let err = library.add(sequence("same")).unwrap_err();
        assert!(matches!(err, LibraryError::DuplicateTitle(_)));
    }

    #[test]
    fn rejects_invalid_sequences() {
        let mut bad = sequence("Broken");
        bad.steps[0].main = Puzzle::Choice(ChoicePuzzle::new(vec!["a".into(), "b".into()], 9));
        let err = Library::from_entries(vec![LibraryEntry::new(bad)]).unwrap_err();
        assert!(matches!(err, LibraryError::InvalidSequence { .. }));
    }

    #[test]
    fn resolve_title_exact_and_fuzzy() {
        let mut library = Library::new();
        let seq = sequence("Across the Night Sky");
        let id = seq.id;
        library.add(seq).unwrap();
        library.add(sequence("Something Else")).unwrap();

        assert_eq!(library.resolve_title("across the night sky"), Some(id));
        assert_eq!(library.resolve_title("Across the Nigth Sky"), Some(id));
        assert_eq!(library.resolve_title("unrelated words"), None);
    }

    #[test]
    fn record_run_accumulates() {
        let mut library = Library::new();
        let seq = sequence("Tracked");
        let id = seq.id;
        library.add(seq).unwrap();

        library.record_run(id, 23, 5);
        library.record_run(id, -4, 5);

        let entry = library.entry(id).unwrap();
        assert_eq!(entry.totals.runs, 2);
        assert_eq!(entry.totals.points, 19);
        assert_eq!(entry.totals.riddles, 10);
        assert!(entry.last_played.is_some());
    }

    #[test]
    fn record_run_ignores_unknown_ids() {
        let mut library = Library::new();
        library.add(sequence("Known")).unwrap();
        library.record_run(SequenceId::new(), 10, 1);
        assert_eq!(library.entries()[0].totals.runs, 0);
    }

    #[test]
    fn save_and_load_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("library.json");

        let mut library = Library::with_starter();
        let id = library.entries()[0].sequence.id;
        library.record_run(id, 50, 5);
        library.save(&path).unwrap();

        let loaded = Library::load(&path).unwrap();
        assert_eq!(loaded.len(), library.len());
        assert_eq!(loaded.entry(id).unwrap().totals.runs, 1);
        assert_eq!(loaded.entry(id).unwrap().totals.points, 50);
    }

    #[test]
    fn load_migrates_legacy_array() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("library.json");
        fs::write(
            &path,
            r#"[{
                "title": "Legacy",
                "steps": [{
                    "name": "Only",
                    "main": {"kind": "choice", "options": ["a", "b"], "correct": 0},
                    "second_chance": {"options": ["x", "y"], "correct": 1},
                    "explanation": {"text": "Why."}
                }],
                "end_screen": {"text": "bye"}
            }]"#,
        )
        .unwrap();

        let library = Library::load(&path).unwrap();
        assert_eq!(library.len(), 1);
        assert_eq!(library.entries()[0].sequence.title, "Legacy");
        assert_eq!(library.entries()[0].totals.runs, 0);
    }
}
