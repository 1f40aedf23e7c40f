//! Total-order ("chain") puzzles.

use serde::{Deserialize, Serialize};

use super::verdict::Verdict;

/// A total-order puzzle: arrange all elements in their authored order.
///
/// The authored `elements` array *is* the correct order; the surface
/// shuffles the presentation. Slot `i` must end up holding element `i`.
/// A correct prefix earns nothing on its own.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderingPuzzle {
    /// The elements in their correct order.
    pub elements: Vec<String>,
}

impl OrderingPuzzle {
    /// Create a total-order puzzle from elements in correct order.
    pub fn new(elements: Vec<String>) -> Self {
        Self { elements }
    }

    /// Evaluate slot placements, one slot per position, holding element
    /// indices.
    ///
    /// Incomplete while a slot is empty or an element occupies two
    /// slots; correct iff slot `i` holds element `i` for every `i`.
    pub fn evaluate(&self, slots: &[Option<usize>]) -> Verdict {
        let open = slots.iter().filter(|slot| slot.is_none()).count();
        if open > 0 {
            let noun = if open == 1 { "slot is" } else { "slots are" };
            return Verdict::incomplete(format!("{open} {noun} still empty"));
        }
        let mut seen = vec![false; self.elements.len()];
        for slot in slots.iter().flatten() {
            if seen.get(*slot).copied().unwrap_or(false) {
                return Verdict::incomplete("the same element occupies two slots".to_string());
            }
            if let Some(flag) = seen.get_mut(*slot) {
                *flag = true;
            }
        }
        let correct = slots
            .iter()
            .enumerate()
            .all(|(position, slot)| *slot == Some(position));
        Verdict::answered(correct)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn puzzle() -> OrderingPuzzle {
        OrderingPuzzle::new(vec!["first".into(), "second".into(), "third".into()])
    }

    #[test]
    fn empty_slot_is_incomplete() {
        assert!(!puzzle().evaluate(&[Some(0), None, Some(2)]).is_complete());
    }

    #[test]
    fn duplicate_element_is_incomplete() {
        let v = puzzle().evaluate(&[Some(0), Some(0), Some(2)]);
        assert!(!v.is_complete());
    }

    #[test]
    fn authored_order_is_correct() {
        assert!(puzzle().evaluate(&[Some(0), Some(1), Some(2)]).is_correct());
    }

    #[test]
    fn adjacent_transposition_is_wrong() {
        let v = puzzle().evaluate(&[Some(0), Some(2), Some(1)]);
        assert!(v.is_complete());
        assert!(!v.is_correct());
    }
}
