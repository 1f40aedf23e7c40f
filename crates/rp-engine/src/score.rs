//! Scoring tables and the streak rule.
//!
//! Pure functions: the session feeds in the attempt kind, puzzle kind,
//! correctness, and the running streak, and gets back a point delta and
//! the updated streak. Base weights reflect authored difficulty, not
//! anything measured at runtime.

use rp_core::PuzzleKind;

/// Streak length at which the bonus fires: the answer that brings the
/// streak to this count earns double points, and the streak resets.
pub const STREAK_BONUS_AT: u32 = 3;

/// Points gained or lost on a second-chance attempt.
pub const SECOND_CHANCE_POINTS: i32 = 5;

/// Which attempt of a step is being scored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Attempt {
    /// The first attempt, on the step's main puzzle.
    Main,
    /// The fallback attempt, on the single-choice second chance.
    SecondChance,
}

/// The outcome of scoring one answered attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Scored {
    /// Points to add to the running score (negative on a wrong answer).
    pub delta: i32,
    /// The streak value after this attempt.
    pub streak: u32,
    /// Whether the streak bonus doubled this delta.
    pub doubled: bool,
}

/// Points gained for a correct main-phase answer, by puzzle kind.
pub fn base_gain(kind: PuzzleKind) -> i32 {
    match kind {
        PuzzleKind::Choice => 8,
        PuzzleKind::Partition => 20,
        PuzzleKind::Ordering => 30,
        PuzzleKind::Matching | PuzzleKind::TrueStatement => 15,
    }
}

/// Points lost for a wrong main-phase answer, by puzzle kind.
pub fn base_loss(kind: PuzzleKind) -> i32 {
    match kind {
        PuzzleKind::Choice => 8,
        PuzzleKind::Partition => 15,
        PuzzleKind::Ordering | PuzzleKind::Matching | PuzzleKind::TrueStatement => 10,
    }
}

/// Score one answered attempt.
///
/// Second chances are flat `±`[`SECOND_CHANCE_POINTS`] and never touch
/// the streak. Main attempts use the per-kind base weights; every
/// [`STREAK_BONUS_AT`]th consecutive correct answer earns double points
/// and resets the streak, and any wrong answer resets it too.
pub fn score_outcome(attempt: Attempt, kind: PuzzleKind, correct: bool, streak_in: u32) -> Scored {
    match attempt {
        Attempt::SecondChance => Scored {
            delta: if correct {
                SECOND_CHANCE_POINTS
            } else {
                -SECOND_CHANCE_POINTS
            },
            streak: streak_in,
            doubled: false,
        },
        Attempt::Main if correct => {
            let streak = streak_in + 1;
            if streak >= STREAK_BONUS_AT {
                Scored {
                    delta: 2 * base_gain(kind),
                    streak: 0,
                    doubled: true,
                }
            } else {
                Scored {
                    delta: base_gain(kind),
                    streak,
                    doubled: false,
                }
            }
        }
        Attempt::Main => Scored {
            delta: -base_loss(kind),
            streak: 0,
            doubled: false,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn second_chance_is_flat_and_streak_neutral() {
        let s = score_outcome(Attempt::SecondChance, PuzzleKind::Ordering, true, 2);
        assert_eq!(s, Scored { delta: 5, streak: 2, doubled: false });
        let s = score_outcome(Attempt::SecondChance, PuzzleKind::Choice, false, 2);
        assert_eq!(s, Scored { delta: -5, streak: 2, doubled: false });
    }

    #[test]
    fn main_gains_by_kind() {
        assert_eq!(score_outcome(Attempt::Main, PuzzleKind::Choice, true, 0).delta, 8);
        assert_eq!(score_outcome(Attempt::Main, PuzzleKind::Partition, true, 0).delta, 20);
        assert_eq!(score_outcome(Attempt::Main, PuzzleKind::Ordering, true, 0).delta, 30);
        assert_eq!(score_outcome(Attempt::Main, PuzzleKind::Matching, true, 0).delta, 15);
        assert_eq!(
            score_outcome(Attempt::Main, PuzzleKind::TrueStatement, true, 0).delta,
            15
        );
    }

    #[test]
    fn main_losses_by_kind() {
        assert_eq!(score_outcome(Attempt::Main, PuzzleKind::Choice, false, 0).delta, -8);
        assert_eq!(
            score_outcome(Attempt::Main, PuzzleKind::Partition, false, 0).delta,
            -15
        );
        assert_eq!(
            score_outcome(Attempt::Main, PuzzleKind::Ordering, false, 0).delta,
            -10
        );
    }

    #[test]
    fn third_consecutive_correct_doubles_and_resets() {
        let s = score_outcome(Attempt::Main, PuzzleKind::Partition, true, 2);
        assert_eq!(s.delta, 40);
        assert_eq!(s.streak, 0);
        assert!(s.doubled);
    }

    #[test]
    fn wrong_answer_resets_streak() {
        let s = score_outcome(Attempt::Main, PuzzleKind::Choice, false, 2);
        assert_eq!(s.streak, 0);
        assert!(!s.doubled);
    }

    proptest! {
        #[test]
        fn streak_never_reaches_the_bonus_threshold(
            kinds in proptest::collection::vec(0usize..5, 1..40),
            corrects in proptest::collection::vec(proptest::bool::ANY, 1..40),
        ) {
            let all_kinds = [
                PuzzleKind::Choice,
                PuzzleKind::Partition,
                PuzzleKind::Ordering,
                PuzzleKind::Matching,
                PuzzleKind::TrueStatement,
            ];
            let mut streak = 0;
            for (k, correct) in kinds.iter().zip(corrects) {
                let kind = all_kinds[*k];
                let scored = score_outcome(Attempt::Main, kind, correct, streak);
                if scored.doubled {
                    prop_assert_eq!(scored.delta, 2 * base_gain(kind));
                }
                streak = scored.streak;
                prop_assert!(streak < STREAK_BONUS_AT);
            }
        }
    }
}
