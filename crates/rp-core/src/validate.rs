//! Validation of authored sequence content.
//!
//! Checks the authoring-time contracts the engine itself trusts: index
//! fields in bounds, option lists large enough to be a puzzle, pairing
//! tables that form a true bijection, and non-blank narrative text.
//! The library rejects sequences with error-level issues at load time.

use crate::puzzle::Puzzle;
use crate::sequence::Sequence;
use crate::step::Step;

/// A problem found in authored content.
#[derive(Debug, Clone)]
pub struct ValidationIssue {
    /// Where the issue was found (sequence, step, or puzzle).
    pub location: String,
    /// A human-readable description of the issue.
    pub message: String,
    /// Whether this is an error (true) or a warning (false).
    pub is_error: bool,
}

impl ValidationIssue {
    fn error(location: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            location: location.into(),
            message: message.into(),
            is_error: true,
        }
    }

    fn warning(location: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            location: location.into(),
            message: message.into(),
            is_error: false,
        }
    }
}

impl std::fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let level = if self.is_error { "error" } else { "warning" };
        write!(f, "{level}: {}: {}", self.location, self.message)
    }
}

/// Validate a sequence's authored invariants.
///
/// Returns all issues found; an empty list means the sequence is safe
/// to hand to the progression engine.
pub fn validate_sequence(sequence: &Sequence) -> Vec<ValidationIssue> {
    let mut issues = Vec::new();
    let seq_loc = format!("sequence \"{}\"", sequence.title);

    if sequence.title.trim().is_empty() {
        issues.push(ValidationIssue::warning(&seq_loc, "title is blank"));
    }
    if sequence.steps.is_empty() {
        issues.push(ValidationIssue::error(&seq_loc, "has no steps"));
    }
    if sequence.end_screen.is_blank() {
        issues.push(ValidationIssue::warning(&seq_loc, "end screen is blank"));
    }

    for (index, slide) in sequence.intro.iter().enumerate() {
        if slide.is_blank() {
            issues.push(ValidationIssue::error(
                format!("{seq_loc}, intro slide {}", index + 1),
                "slide text is empty",
            ));
        }
    }

    for (index, step) in sequence.steps.iter().enumerate() {
        validate_step(step, index, &seq_loc, &mut issues);
    }

    issues
}

fn validate_step(step: &Step, index: usize, seq_loc: &str, issues: &mut Vec<ValidationIssue>) {
    let step_loc = format!("{seq_loc}, step {} \"{}\"", index + 1, step.name);

    if step.name.trim().is_empty() {
        issues.push(ValidationIssue::warning(&step_loc, "step name is blank"));
    }
    if step.explanation.is_blank() {
        issues.push(ValidationIssue::warning(&step_loc, "explanation is blank"));
    }

    validate_puzzle(&step.main, &format!("{step_loc}, main puzzle"), issues);

    let sc_loc = format!("{step_loc}, second chance");
    validate_options(
        &step.second_chance.options,
        step.second_chance.correct,
        &sc_loc,
        issues,
    );
}

fn validate_puzzle(puzzle: &Puzzle, location: &str, issues: &mut Vec<ValidationIssue>) {
    match puzzle {
        Puzzle::Choice(p) => validate_options(&p.options, p.correct, location, issues),
        Puzzle::TrueStatement(p) => validate_options(&p.statements, p.correct, location, issues),
        Puzzle::Partition(p) => {
            if p.baskets.len() < 2 {
                issues.push(ValidationIssue::error(
                    location,
                    "needs at least two baskets",
                ));
            }
            if p.items.is_empty() {
                issues.push(ValidationIssue::error(location, "has no items to sort"));
            }
            for item in &p.items {
                if item.basket >= p.baskets.len() {
                    issues.push(ValidationIssue::error(
                        location,
                        format!(
                            "item \"{}\" references basket {} but only {} exist",
                            item.label,
                            item.basket,
                            p.baskets.len()
                        ),
                    ));
                }
            }
        }
        Puzzle::Ordering(p) => {
            if p.elements.len() < 2 {
                issues.push(ValidationIssue::error(
                    location,
                    "needs at least two elements to order",
                ));
            }
        }
        Puzzle::Matching(p) => {
            if p.left.len() != p.pairs.len() {
                issues.push(ValidationIssue::error(
                    location,
                    format!(
                        "has {} left entries but {} pairings",
                        p.left.len(),
                        p.pairs.len()
                    ),
                ));
            }
            if p.left.is_empty() {
                issues.push(ValidationIssue::error(location, "has no pairs to match"));
            }
            let mut used = vec![false; p.right.len()];
            for target in &p.pairs {
                if *target >= p.right.len() {
                    issues.push(ValidationIssue::error(
                        location,
                        format!(
                            "pairing references right entry {} but only {} exist",
                            target,
                            p.right.len()
                        ),
                    ));
                } else if used[*target] {
                    issues.push(ValidationIssue::error(
                        location,
                        "two left entries map to the same right entry",
                    ));
                } else {
                    used[*target] = true;
                }
            }
        }
    }
}

fn validate_options(
    options: &[String],
    correct: usize,
    location: &str,
    issues: &mut Vec<ValidationIssue>,
) {
    if options.len() < 2 {
        issues.push(ValidationIssue::error(
            location,
            "needs at least two options",
        ));
    }
    if correct >= options.len() {
        issues.push(ValidationIssue::error(
            location,
            format!(
                "correct index {} is out of range ({} options)",
                correct,
                options.len()
            ),
        ));
    }
}
