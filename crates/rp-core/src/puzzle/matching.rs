//! Bijection ("pair matching") puzzles.

use serde::{Deserialize, Serialize};

use super::verdict::Verdict;

/// A pair-matching puzzle: connect every left entry to its right entry.
///
/// `pairs[i]` is the correct right-hand index for `left[i]`. The answer
/// must be a complete one-to-one mapping before it is judged; a right
/// entry claimed by two left entries keeps the answer incomplete.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchingPuzzle {
    /// The left-hand entries.
    pub left: Vec<String>,
    /// The right-hand entries.
    pub right: Vec<String>,
    /// For each left entry, the index of its correct right entry.
    pub pairs: Vec<usize>,
}

impl MatchingPuzzle {
    /// Create a pair-matching puzzle.
    pub fn new(left: Vec<String>, right: Vec<String>, pairs: Vec<usize>) -> Self {
        Self { left, right, pairs }
    }

    /// Evaluate pairings, one slot per left entry, holding right indices.
    pub fn evaluate(&self, assignments: &[Option<usize>]) -> Verdict {
        let open = assignments.iter().filter(|slot| slot.is_none()).count();
        if open > 0 {
            let noun = if open == 1 { "pair is" } else { "pairs are" };
            return Verdict::incomplete(format!("{open} {noun} still open"));
        }
        let mut used = vec![false; self.right.len()];
        for slot in assignments.iter().flatten() {
            if used.get(*slot).copied().unwrap_or(false) {
                return Verdict::incomplete("a right-hand entry is used twice".to_string());
            }
            if let Some(flag) = used.get_mut(*slot) {
                *flag = true;
            }
        }
        let correct = self
            .pairs
            .iter()
            .zip(assignments)
            .all(|(target, slot)| *slot == Some(*target));
        Verdict::answered(correct)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn puzzle() -> MatchingPuzzle {
        MatchingPuzzle::new(
            vec!["one".into(), "two".into(), "three".into()],
            vec!["1".into(), "2".into(), "3".into()],
            vec![0, 1, 2],
        )
    }

    #[test]
    fn open_pairs_are_incomplete() {
        assert!(!puzzle().evaluate(&[Some(0), None, None]).is_complete());
    }

    #[test]
    fn reused_right_entry_stays_incomplete() {
        let v = puzzle().evaluate(&[Some(0), Some(0), Some(2)]);
        match v {
            Verdict::Incomplete(reason) => assert!(reason.contains("used twice")),
            Verdict::Answered { .. } => panic!("expected incomplete"),
        }
    }

    #[test]
    fn correct_bijection() {
        assert!(puzzle().evaluate(&[Some(0), Some(1), Some(2)]).is_correct());
    }

    #[test]
    fn swapped_pairing_is_wrong() {
        let v = puzzle().evaluate(&[Some(1), Some(0), Some(2)]);
        assert!(v.is_complete());
        assert!(!v.is_correct());
    }
}
