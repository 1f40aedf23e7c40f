//! Play-through phases and running progression state.

use serde::{Deserialize, Serialize};

/// The phase a play-through is in.
///
/// Transitions are owned by [`crate::PlaySession`]; rendering code only
/// ever reads the phase and shows the matching surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    /// Stepping through the intro slides.
    Intro,
    /// The current step's main puzzle is on screen.
    Main,
    /// The fallback single-choice puzzle is on screen.
    SecondChance,
    /// The step's explanation is on screen.
    Explanation,
    /// The step's context passage is on screen.
    Context,
    /// The end screen; the run is complete.
    Done,
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Intro => "intro",
            Self::Main => "main",
            Self::SecondChance => "second chance",
            Self::Explanation => "explanation",
            Self::Context => "context",
            Self::Done => "done",
        };
        write!(f, "{name}")
    }
}

/// Running state of one play-through.
///
/// Owned exclusively by a [`crate::PlaySession`] and mutated only by its
/// transition methods; reset to initial values whenever a new sequence
/// is entered or the run is restarted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Progress {
    pub(crate) phase: Phase,
    pub(crate) intro_index: usize,
    pub(crate) step_index: usize,
    pub(crate) score: i32,
    pub(crate) current_step_score: i32,
    pub(crate) last_step_score: i32,
    pub(crate) streak: u32,
    pub(crate) stats_recorded: bool,
}

impl Progress {
    /// Initial state for a sequence. Starts in the intro, or directly in
    /// the first step's main phase when there are no intro slides.
    pub fn start(has_intro: bool) -> Self {
        Self {
            phase: if has_intro { Phase::Intro } else { Phase::Main },
            intro_index: 0,
            step_index: 0,
            score: 0,
            current_step_score: 0,
            last_step_score: 0,
            streak: 0,
            stats_recorded: false,
        }
    }

    /// Reset to initial values without leaving the sequence.
    pub fn reset(&mut self, has_intro: bool) {
        *self = Self::start(has_intro);
    }

    /// The current phase.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Index of the intro slide on screen (meaningful in [`Phase::Intro`]).
    pub fn intro_index(&self) -> usize {
        self.intro_index
    }

    /// Index of the current step.
    pub fn step_index(&self) -> usize {
        self.step_index
    }

    /// Total points earned this run.
    pub fn score(&self) -> i32 {
        self.score
    }

    /// Points earned so far while resolving the current step.
    pub fn current_step_score(&self) -> i32 {
        self.current_step_score
    }

    /// The final score of the most recently concluded step.
    pub fn last_step_score(&self) -> i32 {
        self.last_step_score
    }

    /// Consecutive correct main-phase answers so far.
    pub fn streak(&self) -> u32 {
        self.streak
    }

    /// Whether this run's statistics have been written to the library.
    pub fn stats_recorded(&self) -> bool {
        self.stats_recorded
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_in_intro_with_slides() {
        let p = Progress::start(true);
        assert_eq!(p.phase(), Phase::Intro);
        assert_eq!(p.score(), 0);
        assert!(!p.stats_recorded());
    }

    #[test]
    fn skips_intro_without_slides() {
        assert_eq!(Progress::start(false).phase(), Phase::Main);
    }

    #[test]
    fn reset_restores_initial_values() {
        let mut p = Progress::start(true);
        p.phase = Phase::Explanation;
        p.score = 42;
        p.streak = 2;
        p.stats_recorded = true;
        p.reset(true);
        assert_eq!(p, Progress::start(true));
    }

    #[test]
    fn phase_display() {
        assert_eq!(Phase::SecondChance.to_string(), "second chance");
        assert_eq!(Phase::Done.to_string(), "done");
    }
}
