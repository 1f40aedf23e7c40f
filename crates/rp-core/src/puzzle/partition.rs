//! Set-partition ("basket") puzzles.

use serde::{Deserialize, Serialize};

use super::verdict::Verdict;

/// One item to be sorted into a basket.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PartitionItem {
    /// The label shown to the player.
    pub label: String,
    /// Index of the basket this item belongs in.
    pub basket: usize,
}

impl PartitionItem {
    /// Create an item belonging to the given basket.
    pub fn new(label: impl Into<String>, basket: usize) -> Self {
        Self {
            label: label.into(),
            basket,
        }
    }
}

/// A set-partition puzzle: sort every item into the right basket.
///
/// Authored content uses two baskets of five items, but evaluation
/// generalizes to any basket and item counts. Correctness is
/// all-or-nothing; there is no partial credit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PartitionPuzzle {
    /// The basket labels.
    pub baskets: Vec<String>,
    /// The items to sort.
    pub items: Vec<PartitionItem>,
}

impl PartitionPuzzle {
    /// Create a set-partition puzzle.
    pub fn new(baskets: Vec<String>, items: Vec<PartitionItem>) -> Self {
        Self { baskets, items }
    }

    /// Evaluate basket assignments, one slot per item.
    ///
    /// Incomplete while any item is unassigned; correct iff every item
    /// sits in its authored basket.
    pub fn evaluate(&self, assignments: &[Option<usize>]) -> Verdict {
        let open = assignments.iter().filter(|slot| slot.is_none()).count();
        if open > 0 {
            let noun = if open == 1 { "item is" } else { "items are" };
            return Verdict::incomplete(format!("{open} {noun} not sorted into a basket yet"));
        }
        let correct = self
            .items
            .iter()
            .zip(assignments)
            .all(|(item, slot)| *slot == Some(item.basket));
        Verdict::answered(correct)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn puzzle() -> PartitionPuzzle {
        PartitionPuzzle::new(
            vec!["Even".into(), "Odd".into()],
            vec![
                PartitionItem::new("two", 0),
                PartitionItem::new("three", 1),
                PartitionItem::new("four", 0),
            ],
        )
    }

    #[test]
    fn unassigned_items_are_incomplete() {
        let v = puzzle().evaluate(&[Some(0), None, None]);
        match v {
            Verdict::Incomplete(reason) => assert!(reason.contains("2 items")),
            Verdict::Answered { .. } => panic!("expected incomplete"),
        }
    }

    #[test]
    fn all_correct() {
        assert!(puzzle().evaluate(&[Some(0), Some(1), Some(0)]).is_correct());
    }

    #[test]
    fn one_wrong_assignment_fails_the_whole_puzzle() {
        let v = puzzle().evaluate(&[Some(0), Some(1), Some(1)]);
        assert!(v.is_complete());
        assert!(!v.is_correct());
    }

    #[test]
    fn singular_reason_for_one_open_item() {
        let v = puzzle().evaluate(&[Some(0), Some(1), None]);
        match v {
            Verdict::Incomplete(reason) => assert!(reason.contains("1 item is")),
            Verdict::Answered { .. } => panic!("expected incomplete"),
        }
    }
}
