//! A single riddle step.

use serde::{Deserialize, Serialize};

use crate::passage::Passage;
use crate::puzzle::{ChoicePuzzle, Puzzle};

/// One riddle: a main puzzle, its fallback, and the accompanying text.
///
/// The second chance is always a single-choice puzzle regardless of the
/// main puzzle's shape; the field type makes that invariant impossible
/// to violate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Step {
    /// Display name of the step.
    pub name: String,
    /// The main puzzle, attempted first.
    pub main: Puzzle,
    /// The fallback puzzle offered after a wrong main answer.
    pub second_chance: ChoicePuzzle,
    /// Explanation shown when both attempts fail.
    pub explanation: Passage,
    /// Optional background text shown after the step resolves.
    pub context: Option<Passage>,
}

impl Step {
    /// Create a step without context.
    pub fn new(
        name: impl Into<String>,
        main: Puzzle,
        second_chance: ChoicePuzzle,
        explanation: Passage,
    ) -> Self {
        Self {
            name: name.into(),
            main,
            second_chance,
            explanation,
            context: None,
        }
    }

    /// Attach a context passage.
    pub fn with_context(mut self, context: Passage) -> Self {
        self.context = Some(context);
        self
    }

    /// Whether this step has a context phase to show.
    ///
    /// A present but blank context counts as absent; the progression
    /// engine skips the context phase entirely for such steps.
    pub fn has_context(&self) -> bool {
        self.context.as_ref().is_some_and(|c| !c.is_blank())
    }
}
