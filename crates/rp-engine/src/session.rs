//! Play session management.
//!
//! `PlaySession` owns one play-through of a sequence: the sequence data,
//! the progression state, and the active answer state. All transitions
//! happen synchronously in response to explicit player actions; there is
//! no hidden global state, so independent sessions can coexist.

use rp_core::{AnswerState, CoreError, IntroSlide, PuzzleKind, Sequence, Step, Verdict};

use crate::error::{EngineError, EngineResult};
use crate::phase::{Phase, Progress};
use crate::score::{Attempt, score_outcome};
use crate::store::LibraryStore;

/// A discrete action taken by the player.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerAction {
    /// Advance past the current slide, explanation, or context.
    Next,
    /// Evaluate the current answer state against the current puzzle.
    CheckAnswer,
    /// Give up on the current attempt and show the explanation.
    Skip,
    /// Restart the run from the beginning (explanation phase only).
    Restart,
}

/// What happened in response to a player action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActionOutcome {
    /// The phase changed (or the run was reset) without an evaluation.
    Moved,
    /// The current answer is incomplete; the phase did not change.
    Incomplete {
        /// Player-facing reason the answer is incomplete.
        reason: String,
    },
    /// The answer was evaluated and scored.
    Answered {
        /// Whether the answer was correct.
        correct: bool,
        /// Points added to the running score (negative when wrong).
        delta: i32,
        /// Whether the streak bonus doubled the delta.
        doubled: bool,
    },
}

/// One play-through of a sequence.
pub struct PlaySession {
    sequence: Sequence,
    progress: Progress,
    answer: AnswerState,
}

impl PlaySession {
    /// Start a session on a sequence.
    ///
    /// Begins in the intro, or directly at the first step's main puzzle
    /// when the sequence has no intro slides.
    pub fn new(sequence: Sequence) -> EngineResult<Self> {
        let first = sequence.steps.first().ok_or(EngineError::EmptySequence)?;
        let answer = AnswerState::for_puzzle(&first.main);
        let progress = Progress::start(!sequence.intro.is_empty());
        Ok(Self {
            sequence,
            progress,
            answer,
        })
    }

    /// The sequence being played.
    pub fn sequence(&self) -> &Sequence {
        &self.sequence
    }

    /// The progression state.
    pub fn progress(&self) -> &Progress {
        &self.progress
    }

    /// The current phase.
    pub fn phase(&self) -> Phase {
        self.progress.phase
    }

    /// The intro slide on screen, if the session is in the intro.
    pub fn current_slide(&self) -> Option<&IntroSlide> {
        match self.progress.phase {
            Phase::Intro => self.sequence.intro.get(self.progress.intro_index),
            _ => None,
        }
    }

    /// The step being resolved, if the session is inside a step phase.
    pub fn current_step(&self) -> Option<&Step> {
        match self.progress.phase {
            Phase::Main | Phase::SecondChance | Phase::Explanation | Phase::Context => {
                self.sequence.steps.get(self.progress.step_index)
            }
            Phase::Intro | Phase::Done => None,
        }
    }

    /// The player's in-progress answer for the active puzzle.
    pub fn answer(&self) -> &AnswerState {
        &self.answer
    }

    /// Mutable access for the interaction surface to fill in the answer.
    pub fn answer_mut(&mut self) -> &mut AnswerState {
        &mut self.answer
    }

    /// Dispatch a player action.
    pub fn apply(
        &mut self,
        action: PlayerAction,
        store: &mut dyn LibraryStore,
    ) -> EngineResult<ActionOutcome> {
        match action {
            PlayerAction::Next => {
                self.advance(store)?;
                Ok(ActionOutcome::Moved)
            }
            PlayerAction::CheckAnswer => self.check_answer(store),
            PlayerAction::Skip => {
                self.skip()?;
                Ok(ActionOutcome::Moved)
            }
            PlayerAction::Restart => {
                self.restart()?;
                Ok(ActionOutcome::Moved)
            }
        }
    }

    /// Advance past the current slide, explanation, or context.
    ///
    /// Accepted in the intro, explanation, and context phases; the
    /// store is needed because advancing past the last step enters the
    /// end screen and records the run.
    pub fn advance(&mut self, store: &mut dyn LibraryStore) -> EngineResult<()> {
        match self.progress.phase {
            Phase::Intro => {
                if self.progress.intro_index + 1 < self.sequence.intro.len() {
                    self.progress.intro_index += 1;
                } else {
                    self.enter_main(0);
                }
                Ok(())
            }
            Phase::Explanation => {
                self.finish_step(store);
                Ok(())
            }
            Phase::Context => {
                self.next_step_or_done(store);
                Ok(())
            }
            phase => Err(EngineError::ActionNotAvailable {
                action: "next",
                phase,
            }),
        }
    }

    /// Evaluate the current answer against the current puzzle and apply
    /// scoring.
    ///
    /// An incomplete answer surfaces its reason and leaves the phase
    /// unchanged. A wrong main answer opens the second chance; a wrong
    /// second chance opens the explanation; a correct answer concludes
    /// the step.
    pub fn check_answer(&mut self, store: &mut dyn LibraryStore) -> EngineResult<ActionOutcome> {
        match self.progress.phase {
            Phase::Main => {
                let step = &self.sequence.steps[self.progress.step_index];
                let kind = step.main.kind();
                let verdict = step.main.evaluate(&self.answer)?;
                match verdict {
                    Verdict::Incomplete(reason) => Ok(ActionOutcome::Incomplete { reason }),
                    Verdict::Answered { correct } => {
                        let scored =
                            score_outcome(Attempt::Main, kind, correct, self.progress.streak);
                        self.progress.streak = scored.streak;
                        self.apply_delta(scored.delta);
                        if correct {
                            self.conclude_success(store);
                        } else {
                            self.progress.phase = Phase::SecondChance;
                            self.answer = AnswerState::choice();
                        }
                        Ok(ActionOutcome::Answered {
                            correct,
                            delta: scored.delta,
                            doubled: scored.doubled,
                        })
                    }
                }
            }
            Phase::SecondChance => {
                let step = &self.sequence.steps[self.progress.step_index];
                let selected = match &self.answer {
                    AnswerState::Choice { selected } => *selected,
                    other => {
                        return Err(EngineError::Core(CoreError::AnswerMismatch {
                            puzzle: PuzzleKind::Choice,
                            answer: other.kind(),
                        }));
                    }
                };
                match step.second_chance.evaluate(selected) {
                    Verdict::Incomplete(reason) => Ok(ActionOutcome::Incomplete { reason }),
                    Verdict::Answered { correct } => {
                        let scored = score_outcome(
                            Attempt::SecondChance,
                            PuzzleKind::Choice,
                            correct,
                            self.progress.streak,
                        );
                        self.apply_delta(scored.delta);
                        if correct {
                            self.conclude_success(store);
                        } else {
                            self.enter_explanation();
                        }
                        Ok(ActionOutcome::Answered {
                            correct,
                            delta: scored.delta,
                            doubled: scored.doubled,
                        })
                    }
                }
            }
            phase => Err(EngineError::ActionNotAvailable {
                action: "check answer",
                phase,
            }),
        }
    }

    /// Give up on the current attempt and show the explanation.
    ///
    /// No points change hands, but skipping a main puzzle resets the
    /// streak exactly like a wrong answer, since no evaluation happened.
    pub fn skip(&mut self) -> EngineResult<()> {
        match self.progress.phase {
            Phase::Main => {
                self.progress.streak = 0;
                self.enter_explanation();
                Ok(())
            }
            Phase::SecondChance => {
                self.enter_explanation();
                Ok(())
            }
            phase => Err(EngineError::ActionNotAvailable {
                action: "skip",
                phase,
            }),
        }
    }

    /// Restart the run from the beginning without leaving the sequence.
    ///
    /// Only offered in the explanation phase.
    pub fn restart(&mut self) -> EngineResult<()> {
        match self.progress.phase {
            Phase::Explanation => {
                self.progress.reset(!self.sequence.intro.is_empty());
                self.answer = AnswerState::for_puzzle(&self.sequence.steps[0].main);
                Ok(())
            }
            phase => Err(EngineError::ActionNotAvailable {
                action: "restart",
                phase,
            }),
        }
    }

    fn apply_delta(&mut self, delta: i32) {
        self.progress.score += delta;
        self.progress.current_step_score += delta;
    }

    /// Step solved: freeze the step score, then branch to context, the
    /// next step, or the end screen.
    fn conclude_success(&mut self, store: &mut dyn LibraryStore) {
        self.progress.last_step_score = self.progress.current_step_score;
        self.finish_step(store);
    }

    /// Both attempts failed (or were skipped): freeze the step score and
    /// show the explanation.
    fn enter_explanation(&mut self) {
        self.progress.last_step_score = self.progress.current_step_score;
        self.progress.phase = Phase::Explanation;
    }

    /// Leave the resolved part of a step: context if the step has one,
    /// otherwise the next step or the end screen.
    fn finish_step(&mut self, store: &mut dyn LibraryStore) {
        if self.sequence.steps[self.progress.step_index].has_context() {
            self.progress.phase = Phase::Context;
        } else {
            self.next_step_or_done(store);
        }
    }

    fn next_step_or_done(&mut self, store: &mut dyn LibraryStore) {
        let next = self.progress.step_index + 1;
        if next < self.sequence.steps.len() {
            self.enter_main(next);
        } else {
            self.enter_done(store);
        }
    }

    fn enter_main(&mut self, index: usize) {
        self.progress.step_index = index;
        self.progress.phase = Phase::Main;
        self.progress.current_step_score = 0;
        self.answer = AnswerState::for_puzzle(&self.sequence.steps[index].main);
    }

    /// First entry into the end screen writes the run's statistics once;
    /// the guard keeps a re-rendered end screen from double-counting.
    fn enter_done(&mut self, store: &mut dyn LibraryStore) {
        self.progress.phase = Phase::Done;
        if !self.progress.stats_recorded {
            store.record_run(
                self.sequence.id,
                self.progress.score,
                self.sequence.steps.len() as u32,
            );
            self.progress.stats_recorded = true;
        }
    }
}
