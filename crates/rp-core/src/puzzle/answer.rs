//! Per-puzzle in-progress answer state.

use super::{Puzzle, PuzzleKind};
use crate::error::{CoreError, CoreResult};

/// A player's in-progress answer for one puzzle instance.
///
/// Owned by the active puzzle's interaction surface and discarded when
/// the phase changes; never persisted. The container sizes are fixed by
/// [`AnswerState::for_puzzle`]; the mutators only check positions, so a
/// surface can represent transient states (such as a right-hand entry
/// claimed twice) that evaluation then reports as incomplete.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnswerState {
    /// Selection for a single-choice puzzle.
    Choice {
        /// The selected option index, if any.
        selected: Option<usize>,
    },
    /// Basket assignments for a set-partition puzzle, one slot per item.
    Partition {
        /// For each item, the basket it has been placed in.
        assignments: Vec<Option<usize>>,
    },
    /// Slot placements for a total-order puzzle, one slot per position.
    Ordering {
        /// For each slot, the element index placed there.
        slots: Vec<Option<usize>>,
    },
    /// Pairings for a matching puzzle, one slot per left entry.
    Matching {
        /// For each left entry, the right index assigned to it.
        assignments: Vec<Option<usize>>,
    },
    /// Selection for a single-true-statement puzzle.
    Statement {
        /// The selected statement index, if any.
        selected: Option<usize>,
    },
}

impl AnswerState {
    /// Build an empty answer state shaped for the given puzzle.
    pub fn for_puzzle(puzzle: &Puzzle) -> Self {
        match puzzle {
            Puzzle::Choice(_) => Self::Choice { selected: None },
            Puzzle::Partition(p) => Self::Partition {
                assignments: vec![None; p.items.len()],
            },
            Puzzle::Ordering(p) => Self::Ordering {
                slots: vec![None; p.elements.len()],
            },
            Puzzle::Matching(p) => Self::Matching {
                assignments: vec![None; p.left.len()],
            },
            Puzzle::TrueStatement(_) => Self::Statement { selected: None },
        }
    }

    /// Build an empty single-choice answer (used for second chances).
    pub fn choice() -> Self {
        Self::Choice { selected: None }
    }

    /// The puzzle kind this answer state was built for.
    pub fn kind(&self) -> PuzzleKind {
        match self {
            Self::Choice { .. } => PuzzleKind::Choice,
            Self::Partition { .. } => PuzzleKind::Partition,
            Self::Ordering { .. } => PuzzleKind::Ordering,
            Self::Matching { .. } => PuzzleKind::Matching,
            Self::Statement { .. } => PuzzleKind::TrueStatement,
        }
    }

    /// Select an option or statement.
    pub fn select(&mut self, index: usize) -> CoreResult<()> {
        match self {
            Self::Choice { selected } | Self::Statement { selected } => {
                *selected = Some(index);
                Ok(())
            }
            _ => Err(self.wrong_operation("select")),
        }
    }

    /// Put an item into a basket.
    pub fn assign(&mut self, item: usize, basket: usize) -> CoreResult<()> {
        match self {
            Self::Partition { assignments } => {
                *slot_mut(assignments, item)? = Some(basket);
                Ok(())
            }
            _ => Err(self.wrong_operation("assign")),
        }
    }

    /// Take an item back out of its basket.
    pub fn unassign(&mut self, item: usize) -> CoreResult<()> {
        match self {
            Self::Partition { assignments } => {
                *slot_mut(assignments, item)? = None;
                Ok(())
            }
            _ => Err(self.wrong_operation("unassign")),
        }
    }

    /// Place an element into an ordering slot.
    pub fn place(&mut self, slot: usize, element: usize) -> CoreResult<()> {
        match self {
            Self::Ordering { slots } => {
                *slot_mut(slots, slot)? = Some(element);
                Ok(())
            }
            _ => Err(self.wrong_operation("place")),
        }
    }

    /// Empty an ordering slot.
    pub fn clear_slot(&mut self, slot: usize) -> CoreResult<()> {
        match self {
            Self::Ordering { slots } => {
                *slot_mut(slots, slot)? = None;
                Ok(())
            }
            _ => Err(self.wrong_operation("clear a slot")),
        }
    }

    /// Pair a left entry with a right entry.
    pub fn pair(&mut self, left: usize, right: usize) -> CoreResult<()> {
        match self {
            Self::Matching { assignments } => {
                *slot_mut(assignments, left)? = Some(right);
                Ok(())
            }
            _ => Err(self.wrong_operation("pair")),
        }
    }

    /// Remove the pairing of a left entry.
    pub fn unpair(&mut self, left: usize) -> CoreResult<()> {
        match self {
            Self::Matching { assignments } => {
                *slot_mut(assignments, left)? = None;
                Ok(())
            }
            _ => Err(self.wrong_operation("unpair")),
        }
    }

    /// Reset all input, keeping the shape.
    pub fn clear(&mut self) {
        match self {
            Self::Choice { selected } | Self::Statement { selected } => *selected = None,
            Self::Partition { assignments } | Self::Matching { assignments } => {
                assignments.iter_mut().for_each(|slot| *slot = None);
            }
            Self::Ordering { slots } => slots.iter_mut().for_each(|slot| *slot = None),
        }
    }

    fn wrong_operation(&self, action: &'static str) -> CoreError {
        CoreError::WrongAnswerOperation {
            action,
            kind: self.kind(),
        }
    }
}

fn slot_mut(slots: &mut [Option<usize>], index: usize) -> CoreResult<&mut Option<usize>> {
    let len = slots.len();
    slots
        .get_mut(index)
        .ok_or(CoreError::IndexOutOfRange { index, len })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::puzzle::{ChoicePuzzle, OrderingPuzzle, PartitionItem, PartitionPuzzle};

    #[test]
    fn shaped_for_puzzle() {
        let p = Puzzle::Partition(PartitionPuzzle::new(
            vec!["a".into(), "b".into()],
            vec![PartitionItem::new("x", 0), PartitionItem::new("y", 1)],
        ));
        match AnswerState::for_puzzle(&p) {
            AnswerState::Partition { assignments } => assert_eq!(assignments.len(), 2),
            other => panic!("unexpected shape: {other:?}"),
        }
    }

    #[test]
    fn select_and_clear() {
        let p = Puzzle::Choice(ChoicePuzzle::new(vec!["a".into(), "b".into()], 0));
        let mut answer = AnswerState::for_puzzle(&p);
        answer.select(1).unwrap();
        assert_eq!(answer, AnswerState::Choice { selected: Some(1) });
        answer.clear();
        assert_eq!(answer, AnswerState::Choice { selected: None });
    }

    #[test]
    fn select_on_ordering_is_an_error() {
        let p = Puzzle::Ordering(OrderingPuzzle::new(vec!["a".into(), "b".into()]));
        let mut answer = AnswerState::for_puzzle(&p);
        let err = answer.select(0).unwrap_err();
        assert!(matches!(err, CoreError::WrongAnswerOperation { .. }));
    }

    #[test]
    fn out_of_range_position() {
        let p = Puzzle::Ordering(OrderingPuzzle::new(vec!["a".into(), "b".into()]));
        let mut answer = AnswerState::for_puzzle(&p);
        let err = answer.place(5, 0).unwrap_err();
        assert!(matches!(
            err,
            CoreError::IndexOutOfRange { index: 5, len: 2 }
        ));
    }

    #[test]
    fn assign_and_unassign() {
        let p = Puzzle::Partition(PartitionPuzzle::new(
            vec!["a".into(), "b".into()],
            vec![PartitionItem::new("x", 0), PartitionItem::new("y", 1)],
        ));
        let mut answer = AnswerState::for_puzzle(&p);
        answer.assign(0, 1).unwrap();
        answer.assign(1, 0).unwrap();
        answer.unassign(0).unwrap();
        assert_eq!(
            answer,
            AnswerState::Partition {
                assignments: vec![None, Some(0)],
            }
        );
    }
}
