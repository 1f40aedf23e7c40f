#![allow(deprecated)] // Command::cargo_bin - macro replacement not yet stable
#![allow(missing_docs)]

use std::fs;
use std::path::PathBuf;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

use rp_core::{ChoicePuzzle, Passage, Puzzle, Sequence, Step};
use rp_library::Library;

fn riddlepath() -> Command {
    Command::cargo_bin("riddlepath").unwrap()
}

fn library_path(dir: &TempDir) -> PathBuf {
    dir.path().join("library.json")
}

/// A library with one single-step choice sequence and no intro, so a
/// scripted run is short.
fn tiny_library(dir: &TempDir) -> PathBuf {
    let step = Step::new(
        "Two Doors",
        Puzzle::Choice(ChoicePuzzle::new(
            vec!["The left door".into(), "The right door".into()],
            0,
        )),
        ChoicePuzzle::new(vec!["Up".into(), "Down".into()], 1),
        Passage::new("It was always the left door."),
    );
    let sequence = Sequence::new("Two Doors", vec![step], Passage::new("That's the lot.")).unwrap();
    let mut library = Library::new();
    library.add(sequence).unwrap();

    let path = library_path(dir);
    library.save(&path).unwrap();
    path
}

#[test]
fn init_creates_a_starter_library() {
    let dir = TempDir::new().unwrap();
    let path = library_path(&dir);

    riddlepath()
        .args(["init", "-f"])
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("starter sequence"));
    assert!(path.exists());

    riddlepath()
        .args(["list", "-f"])
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Across the Night Sky"));
}

#[test]
fn init_refuses_to_overwrite_without_force() {
    let dir = TempDir::new().unwrap();
    let path = library_path(&dir);
    fs::write(&path, "{}").unwrap();

    riddlepath()
        .args(["init", "-f"])
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));

    riddlepath()
        .args(["init", "--force", "-f"])
        .arg(&path)
        .assert()
        .success();
}

#[test]
fn list_without_a_library_hints_at_init() {
    let dir = TempDir::new().unwrap();
    riddlepath()
        .args(["list", "-f"])
        .arg(library_path(&dir))
        .assert()
        .failure()
        .stderr(predicate::str::contains("riddlepath init"));
}

#[test]
fn check_passes_on_starter_content() {
    let dir = TempDir::new().unwrap();
    let path = library_path(&dir);
    riddlepath().args(["init", "-f"]).arg(&path).assert().success();

    riddlepath()
        .args(["check", "-f"])
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("no issues"));
}

#[test]
fn check_reports_broken_content() {
    let dir = TempDir::new().unwrap();
    let path = library_path(&dir);
    fs::write(
        &path,
        r#"{
            "schema_version": 1,
            "saved_at": "2026-01-01T00:00:00Z",
            "entries": [{
                "sequence": {
                    "title": "Broken",
                    "steps": [{
                        "name": "Bad",
                        "main": {"kind": "choice", "options": ["a", "b"], "correct": 9},
                        "second_chance": {"options": ["x", "y"], "correct": 0},
                        "explanation": {"text": "..."}
                    }],
                    "end_screen": {"text": "bye"}
                }
            }]
        }"#,
    )
    .unwrap();

    riddlepath()
        .args(["check", "-f"])
        .arg(&path)
        .assert()
        .failure()
        .stdout(predicate::str::contains("out of range"));
}

#[test]
fn legacy_array_files_are_migrated() {
    let dir = TempDir::new().unwrap();
    let path = library_path(&dir);
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

    riddlepath()
        .args(["list", "-f"])
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Legacy"));
}

#[test]
fn stats_start_at_zero() {
    let dir = TempDir::new().unwrap();
    let path = tiny_library(&dir);

    riddlepath()
        .args(["stats", "-f"])
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("never"));
}

#[test]
fn play_with_unknown_title_fails() {
    let dir = TempDir::new().unwrap();
    let path = tiny_library(&dir);

    riddlepath()
        .args(["play", "no such thing", "-f"])
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("no sequence matching"));
}

#[test]
fn a_scripted_run_records_statistics() {
    let dir = TempDir::new().unwrap();
    let path = tiny_library(&dir);

    // Select option 1 (correct) and check; the run ends and is saved.
    riddlepath()
        .args(["play", "-f"])
        .arg(&path)
        .write_stdin("1\ncheck\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Correct!"))
        .stdout(predicate::str::contains("Final score:"))
        .stdout(predicate::str::contains("Library updated."));

    riddlepath()
        .args(["stats", "-f"])
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Two Doors"))
        .stdout(predicate::str::contains("8"));

    let loaded = Library::load(&path).unwrap();
    assert_eq!(loaded.entries()[0].totals.runs, 1);
    assert_eq!(loaded.entries()[0].totals.points, 8);
    assert_eq!(loaded.entries()[0].totals.riddles, 1);
}

#[test]
fn a_failed_run_still_reaches_the_end() {
    let dir = TempDir::new().unwrap();
    let path = tiny_library(&dir);

    // Wrong main answer (2), wrong second chance (1), continue past the
    // explanation into the end screen.
    riddlepath()
        .args(["play", "-f"])
        .arg(&path)
        .write_stdin("2\ncheck\n1\ncheck\n\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Not quite."))
        .stdout(predicate::str::contains("It was always the left door."))
        .stdout(predicate::str::contains("Final score:"));

    let loaded = Library::load(&path).unwrap();
    assert_eq!(loaded.entries()[0].totals.runs, 1);
    assert_eq!(loaded.entries()[0].totals.points, -13);
}
