//! Built-in starter content.
//!
//! One small sequence exercising every puzzle shape, used by the CLI's
//! `init` command and as a fixture in tests.

use rp_core::{
    ChoicePuzzle, MatchingPuzzle, OrderingPuzzle, PartitionItem, PartitionPuzzle, Passage, Puzzle,
    Sequence, StatementPuzzle, Step,
};

/// The sequences shipped with a freshly initialized library.
pub fn starter_sequences() -> Vec<Sequence> {
    vec![night_sky()]
}

fn night_sky() -> Sequence {
    let steps = vec![
        Step::new(
            "The Innermost World",
            Puzzle::Choice(ChoicePuzzle::new(
                vec![
                    "Mercury orbits closest to the Sun".to_string(),
                    "Venus orbits closest to the Sun".to_string(),
                ],
                0,
            )),
            ChoicePuzzle::new(
                vec![
                    "The closest planet is also the smallest".to_string(),
                    "The closest planet is the hottest".to_string(),
                ],
                0,
            ),
            Passage::titled(
                "Small and swift",
                "Mercury circles the Sun in 88 days, closer than any other planet. \
                 Venus is hotter, but only because of its dense atmosphere.",
            ),
        )
        .with_context(Passage::new(
            "Because Mercury has almost no atmosphere, its surface swings from \
             430 degrees Celsius by day to -180 at night.",
        )),
        Step::new(
            "Planet or Moon?",
            Puzzle::Partition(PartitionPuzzle::new(
                vec!["Planet".to_string(), "Moon".to_string()],
                vec![
                    PartitionItem::new("Mars", 0),
                    PartitionItem::new("Europa", 1),
                    PartitionItem::new("Titan", 1),
                    PartitionItem::new("Neptune", 0),
                    PartitionItem::new("Callisto", 1),
                ],
            )),
            ChoicePuzzle::new(
                vec![
                    "Europa circles Jupiter".to_string(),
                    "Europa circles Saturn".to_string(),
                ],
                0,
            ),
            Passage::new(
                "Mars and Neptune orbit the Sun directly; Europa and Callisto \
                 belong to Jupiter, Titan to Saturn.",
            ),
        ),
        Step::new(
            "Chain of Orbits",
            Puzzle::Ordering(OrderingPuzzle::new(vec![
                "Mercury".to_string(),
                "Earth".to_string(),
                "Jupiter".to_string(),
            ])),
            ChoicePuzzle::new(
                vec![
                    "Jupiter lies beyond the asteroid belt".to_string(),
                    "Jupiter lies inside Earth's orbit".to_string(),
                ],
                0,
            ),
            Passage::new(
                "From the Sun outward: Mercury, then Earth, then Jupiter beyond \
                 the asteroid belt.",
            ),
        )
        .with_context(Passage::titled(
            "A matter of scale",
            "If the Sun were a beach ball, Mercury would sit about 25 meters \
             away and Jupiter a quarter of a kilometer.",
        )),
        Step::new(
            "Moons and Their Worlds",
            Puzzle::Matching(MatchingPuzzle::new(
                vec![
                    "Phobos".to_string(),
                    "Titan".to_string(),
                    "the Moon".to_string(),
                ],
                vec!["Mars".to_string(), "Saturn".to_string(), "Earth".to_string()],
                vec![0, 1, 2],
            )),
            ChoicePuzzle::new(
                vec![
                    "Phobos is one of two Martian moons".to_string(),
                    "Phobos is Saturn's largest moon".to_string(),
                ],
                0,
            ),
            Passage::new(
                "Phobos races around Mars three times a day, Titan hides \
                 Saturn's surface under orange haze, and the Moon is ours.",
            ),
        ),
        Step::new(
            "One True Statement",
            Puzzle::TrueStatement(StatementPuzzle::new(
                vec![
                    "The Sun is a planet".to_string(),
                    "A day on Venus is longer than its year".to_string(),
                    "Jupiter has no moons".to_string(),
                    "Mars is larger than Earth".to_string(),
                ],
                1,
            )),
            ChoicePuzzle::new(
                vec![
                    "Venus rotates slower than it orbits".to_string(),
                    "Venus rotates faster than it orbits".to_string(),
                ],
                0,
            ),
            Passage::new(
                "Venus takes 243 Earth days to turn once but only 225 to round \
                 the Sun, so its day really is longer than its year.",
            ),
        )
        .with_context(Passage::new(
            "Venus also spins backwards: on Venus, the Sun rises in the west.",
        )),
    ];

    Sequence::new(
        "Across the Night Sky",
        steps,
        Passage::titled(
            "Journey's end",
            "You have crossed the night sky from the Sun's doorstep to the \
             outer moons. Come back any time — the sky isn't going anywhere.",
        ),
    )
    .expect("starter sequence has steps")
    .with_intro(vec![
        Passage::titled(
            "Across the Night Sky",
            "Five riddles about the neighborhood we all live in. No telescope \
             required.",
        ),
        Passage::new(
            "Each riddle gives you one main puzzle and, if it goes wrong, a \
             second chance. Answer three in a row to double your points.",
        ),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use rp_core::validate_sequence;

    #[test]
    fn starter_content_is_well_formed() {
        for sequence in starter_sequences() {
            let issues = validate_sequence(&sequence);
            assert!(issues.is_empty(), "issues in starter content: {issues:?}");
        }
    }

    #[test]
    fn starter_covers_every_puzzle_kind() {
        use rp_core::PuzzleKind;
        let kinds: Vec<PuzzleKind> = starter_sequences()
            .iter()
            .flat_map(|s| s.steps.iter().map(|step| step.main.kind()))
            .collect();
        for kind in [
            PuzzleKind::Choice,
            PuzzleKind::Partition,
            PuzzleKind::Ordering,
            PuzzleKind::Matching,
            PuzzleKind::TrueStatement,
        ] {
            assert!(kinds.contains(&kind), "missing {kind}");
        }
    }
}
