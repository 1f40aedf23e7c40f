//! Playable sequences.

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{CoreError, CoreResult};
use crate::passage::{IntroSlide, Passage};
use crate::step::Step;

/// Unique identifier of a sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SequenceId(pub Uuid);

impl SequenceId {
    /// Generate a new random sequence ID.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for SequenceId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for SequenceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", &self.0.to_string()[..8])
    }
}

/// One full playable unit: intro slides, ordered steps, and an end screen.
///
/// Immutable during a play-through; run statistics live in the library,
/// not on the sequence. Deserialized sequences bypass the constructor,
/// so the library runs [`crate::validate_sequence`] on load.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sequence {
    /// Stable identifier, generated when absent from older files.
    #[serde(default)]
    pub id: SequenceId,
    /// Display title.
    pub title: String,
    /// Slides shown before the first step. May be empty.
    #[serde(default)]
    pub intro: Vec<IntroSlide>,
    /// The riddle steps, in play order. Never empty.
    pub steps: Vec<Step>,
    /// Shown when the run completes.
    pub end_screen: Passage,
}

impl Sequence {
    /// Create a sequence without intro slides.
    ///
    /// Fails if `steps` is empty; a sequence must have at least one
    /// step.
    pub fn new(
        title: impl Into<String>,
        steps: Vec<Step>,
        end_screen: Passage,
    ) -> CoreResult<Self> {
        if steps.is_empty() {
            return Err(CoreError::EmptySequence);
        }
        Ok(Self {
            id: SequenceId::new(),
            title: title.into(),
            intro: Vec::new(),
            steps,
            end_screen,
        })
    }

    /// Attach intro slides.
    pub fn with_intro(mut self, intro: Vec<IntroSlide>) -> Self {
        self.intro = intro;
        self
    }

    /// The step at the given index.
    pub fn step(&self, index: usize) -> Option<&Step> {
        self.steps.get(index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::puzzle::{ChoicePuzzle, Puzzle};

    fn one_step() -> Step {
        Step::new(
            "Only",
            Puzzle::Choice(ChoicePuzzle::new(vec!["a".into(), "b".into()], 0)),
            ChoicePuzzle::new(vec!["x".into(), "y".into()], 1),
            Passage::new("Why."),
        )
    }

    #[test]
    fn rejects_empty_steps() {
        let err = Sequence::new("Empty", vec![], Passage::new("end")).unwrap_err();
        assert!(matches!(err, CoreError::EmptySequence));
    }

    #[test]
    fn builds_with_intro() {
        let seq = Sequence::new("One", vec![one_step()], Passage::new("end"))
            .unwrap()
            .with_intro(vec![Passage::new("hello")]);
        assert_eq!(seq.intro.len(), 1);
        assert!(seq.step(0).is_some());
        assert!(seq.step(1).is_none());
    }

    #[test]
    fn ids_are_unique() {
        let a = Sequence::new("A", vec![one_step()], Passage::new("end")).unwrap();
        let b = Sequence::new("B", vec![one_step()], Passage::new("end")).unwrap();
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn id_backfilled_when_missing_from_json() {
        let json = r#"{
            "title": "Legacy",
            "steps": [{
                "name": "Only",
                "main": {"kind": "choice", "options": ["a", "b"], "correct": 0},
                "second_chance": {"options": ["x", "y"], "correct": 1},
                "explanation": {"text": "Why."}
            }],
            "end_screen": {"text": "bye"}
        }"#;
        let seq: Sequence = serde_json::from_str(json).unwrap();
        assert_eq!(seq.title, "Legacy");
        assert!(seq.intro.is_empty());
        assert!(seq.steps[0].context.is_none());
    }

    #[test]
    fn round_trip_serde() {
        let seq = Sequence::new("Round", vec![one_step()], Passage::new("end")).unwrap();
        let json = serde_json::to_string(&seq).unwrap();
        let back: Sequence = serde_json::from_str(&json).unwrap();
        assert_eq!(back, seq);
    }
}
