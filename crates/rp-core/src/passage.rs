//! Narrative text blocks.

use serde::{Deserialize, Serialize};

/// A block of narrative text with an optional heading.
///
/// Used for intro slides, step explanations, step contexts, and end
/// screens. Purely presentational; the engine never inspects the text
/// beyond checking for blankness.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Passage {
    /// Optional heading shown above the text.
    pub title: Option<String>,
    /// The body text.
    pub text: String,
}

impl Passage {
    /// Create an untitled passage.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            title: None,
            text: text.into(),
        }
    }

    /// Create a titled passage.
    pub fn titled(title: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            text: text.into(),
        }
    }

    /// Whether the passage has no visible body text.
    pub fn is_blank(&self) -> bool {
        self.text.trim().is_empty()
    }
}

/// One slide of a sequence's introduction.
pub type IntroSlide = Passage;
