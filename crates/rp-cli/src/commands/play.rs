use std::io::{self, BufRead, Write};
use std::path::Path;

use colored::Colorize;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;

use rp_core::{AnswerState, Puzzle, SequenceId, Step};
use rp_engine::{ActionOutcome, Phase, PlaySession, PlayerAction};
use rp_library::Library;

pub fn run(file: &Path, title: Option<&str>) -> Result<(), String> {
    let mut library = super::load_library(file)?;
    if library.is_empty() {
        return Err("the library is empty; add sequences or re-run `riddlepath init`".into());
    }

    let stdin = io::stdin();
    let mut reader = stdin.lock();

    let id = match title {
        Some(t) => library
            .resolve_title(t)
            .ok_or_else(|| format!("no sequence matching \"{t}\""))?,
        None => choose_sequence(&library, &mut reader)?,
    };
    let sequence = library
        .entry(id)
        .map(|e| e.sequence.clone())
        .ok_or("sequence not found")?;

    let mut session = PlaySession::new(sequence).map_err(|e| e.to_string())?;
    let mut line = String::new();

    loop {
        println!();
        render(&session);

        if session.phase() == Phase::Done {
            library
                .save(file)
                .map_err(|e| format!("run finished but saving failed: {e}"))?;
            println!();
            println!("  Library updated.");
            break;
        }

        print!("> ");
        io::stdout().flush().map_err(|e| e.to_string())?;

        line.clear();
        match reader.read_line(&mut line) {
            Ok(0) => break, // EOF
            Err(e) => return Err(e.to_string()),
            _ => {}
        }

        let input = line.trim();
        if input.eq_ignore_ascii_case("quit") || input.eq_ignore_ascii_case("q") {
            println!("Goodbye!");
            break;
        }

        match handle_input(&mut session, &mut library, input) {
            Ok(output) => {
                if !output.is_empty() {
                    println!("{output}");
                }
            }
            Err(e) => println!("{}", e.yellow()),
        }
    }

    Ok(())
}

/// Prompt for a sequence when the library has several and none was named.
fn choose_sequence(library: &Library, reader: &mut impl BufRead) -> Result<SequenceId, String> {
    if library.len() == 1 {
        return Ok(library.entries()[0].sequence.id);
    }

    println!("Choose a sequence:");
    for (i, entry) in library.entries().iter().enumerate() {
        println!("  {}. {}", i + 1, entry.sequence.title);
    }

    let mut line = String::new();
    loop {
        print!("> ");
        io::stdout().flush().map_err(|e| e.to_string())?;
        line.clear();
        match reader.read_line(&mut line) {
            Ok(0) => return Err("no sequence chosen".into()),
            Err(e) => return Err(e.to_string()),
            _ => {}
        }
        match parse_index(line.trim(), library.len(), "sequence") {
            Ok(index) => return Ok(library.entries()[index].sequence.id),
            Err(e) => println!("{}", e.yellow()),
        }
    }
}

fn handle_input(
    session: &mut PlaySession,
    library: &mut Library,
    input: &str,
) -> Result<String, String> {
    match session.phase() {
        Phase::Intro | Phase::Context => {
            if input.is_empty() {
                session
                    .apply(PlayerAction::Next, library)
                    .map_err(|e| e.to_string())?;
                Ok(String::new())
            } else {
                Err("press Enter to continue".into())
            }
        }
        Phase::Explanation => {
            if input.is_empty() {
                session
                    .apply(PlayerAction::Next, library)
                    .map_err(|e| e.to_string())?;
                Ok(String::new())
            } else if input.eq_ignore_ascii_case("restart") {
                session
                    .apply(PlayerAction::Restart, library)
                    .map_err(|e| e.to_string())?;
                Ok("Starting over from the top.".to_string())
            } else {
                Err("press Enter to continue, or type 'restart'".into())
            }
        }
        Phase::Main | Phase::SecondChance => apply_puzzle_input(session, library, input),
        Phase::Done => Ok(String::new()),
    }
}

/// How the active puzzle is driven from the prompt.
enum Shape {
    Select { count: usize },
    Assign { items: usize, baskets: usize },
    Place { slots: usize, display: Vec<usize> },
    Pair { left: usize, display: Vec<usize> },
}

fn puzzle_shape(session: &PlaySession) -> Result<Shape, String> {
    let step = session.current_step().ok_or("no active step")?;
    let step_index = session.progress().step_index();
    let shape = if session.phase() == Phase::SecondChance {
        Shape::Select {
            count: step.second_chance.options.len(),
        }
    } else {
        match &step.main {
            Puzzle::Choice(p) => Shape::Select {
                count: p.options.len(),
            },
            Puzzle::TrueStatement(p) => Shape::Select {
                count: p.statements.len(),
            },
            Puzzle::Partition(p) => Shape::Assign {
                items: p.items.len(),
                baskets: p.baskets.len(),
            },
            Puzzle::Ordering(p) => Shape::Place {
                slots: p.elements.len(),
                display: ordering_display(p.elements.len(), step_index),
            },
            Puzzle::Matching(p) => Shape::Pair {
                left: p.left.len(),
                display: matching_display(p.right.len(), step_index),
            },
        }
    };
    Ok(shape)
}

fn apply_puzzle_input(
    session: &mut PlaySession,
    library: &mut Library,
    input: &str,
) -> Result<String, String> {
    match input {
        "check" | "c" => {
            let outcome = session
                .apply(PlayerAction::CheckAnswer, library)
                .map_err(|e| e.to_string())?;
            return Ok(describe_outcome(&outcome, session));
        }
        "skip" => {
            session
                .apply(PlayerAction::Skip, library)
                .map_err(|e| e.to_string())?;
            return Ok("Skipped. The explanation is below.".to_string());
        }
        "clear" => {
            session.answer_mut().clear();
            return Ok(String::new());
        }
        _ => {}
    }

    let shape = puzzle_shape(session)?;
    let tokens: Vec<&str> = input.split_whitespace().collect();

    match shape {
        Shape::Select { count } => match tokens.as_slice() {
            &[token] => {
                let index = parse_index(token, count, "option")?;
                session.answer_mut().select(index).map_err(|e| e.to_string())?;
                Ok(String::new())
            }
            _ => Err("type the option number, then 'check'".into()),
        },
        Shape::Assign { items, baskets } => match tokens.as_slice() {
            &["clear", token] => {
                let item = parse_index(token, items, "item")?;
                session.answer_mut().unassign(item).map_err(|e| e.to_string())?;
                Ok(String::new())
            }
            &[a, b] => {
                let item = parse_index(a, items, "item")?;
                let basket = parse_index(b, baskets, "basket")?;
                session
                    .answer_mut()
                    .assign(item, basket)
                    .map_err(|e| e.to_string())?;
                Ok(String::new())
            }
            _ => Err("type '<item> <basket>', 'clear <item>', or 'check'".into()),
        },
        Shape::Place { slots, display } => match tokens.as_slice() {
            &["clear", token] => {
                let slot = parse_index(token, slots, "slot")?;
                session
                    .answer_mut()
                    .clear_slot(slot)
                    .map_err(|e| e.to_string())?;
                Ok(String::new())
            }
            &[a, b] => {
                let slot = parse_index(a, slots, "slot")?;
                let pick = parse_index(b, slots, "element")?;
                session
                    .answer_mut()
                    .place(slot, display[pick])
                    .map_err(|e| e.to_string())?;
                Ok(String::new())
            }
            _ => Err("type '<slot> <element>', 'clear <slot>', or 'check'".into()),
        },
        Shape::Pair { left, display } => match tokens.as_slice() {
            &["clear", token] => {
                let index = parse_index(token, left, "left entry")?;
                session.answer_mut().unpair(index).map_err(|e| e.to_string())?;
                Ok(String::new())
            }
            &[a, b] => {
                let index = parse_index(a, left, "left entry")?;
                let pick = parse_index(b, display.len(), "right entry")?;
                session
                    .answer_mut()
                    .pair(index, display[pick])
                    .map_err(|e| e.to_string())?;
                Ok(String::new())
            }
            _ => Err("type '<left> <right>', 'clear <left>', or 'check'".into()),
        },
    }
}

fn describe_outcome(outcome: &ActionOutcome, session: &PlaySession) -> String {
    match outcome {
        ActionOutcome::Moved => String::new(),
        ActionOutcome::Incomplete { reason } => reason.yellow().to_string(),
        ActionOutcome::Answered {
            correct: true,
            delta,
            doubled,
        } => {
            let mut out = format!("{} +{delta} points", "Correct!".green().bold());
            if *doubled {
                out.push_str(&format!(" ({})", "streak bonus: doubled".cyan()));
            }
            out
        }
        ActionOutcome::Answered { correct: false, delta, .. } => {
            let mut out = format!("{} {delta} points.", "Not quite.".red().bold());
            if session.phase() == Phase::SecondChance {
                out.push_str(" One more try below.");
            }
            out
        }
    }
}

/// Parse a 1-based index typed by the player.
fn parse_index(token: &str, max: usize, what: &str) -> Result<usize, String> {
    token
        .parse::<usize>()
        .ok()
        .filter(|n| (1..=max).contains(n))
        .map(|n| n - 1)
        .ok_or_else(|| format!("expected a {what} number between 1 and {max}"))
}

/// Display order for ordering elements. Never presents the authored
/// (solution) order; stable for the whole step.
fn ordering_display(len: usize, step_index: usize) -> Vec<usize> {
    shuffled_indices(len, step_index as u64 ^ 0x5eed_0001)
}

/// Display order for the right-hand column of a matching puzzle.
fn matching_display(len: usize, step_index: usize) -> Vec<usize> {
    shuffled_indices(len, step_index as u64 ^ 0x5eed_0002)
}

fn shuffled_indices(len: usize, seed: u64) -> Vec<usize> {
    let mut indices: Vec<usize> = (0..len).collect();
    let mut rng = StdRng::seed_from_u64(seed);
    indices.shuffle(&mut rng);
    if len > 1 && indices.iter().enumerate().all(|(i, e)| i == *e) {
        indices.rotate_left(1);
    }
    indices
}

// ---------------------------------------------------------------------------
// Rendering
// ---------------------------------------------------------------------------

fn render(session: &PlaySession) {
    match session.phase() {
        Phase::Intro => {
            if let Some(slide) = session.current_slide() {
                if let Some(title) = &slide.title {
                    println!("{}", title.bold());
                }
                println!("{}", slide.text);
                println!();
                println!("  [Enter] continue");
            }
        }
        Phase::Main => {
            if let Some(step) = session.current_step() {
                let number = session.progress().step_index() + 1;
                let total = session.sequence().steps.len();
                println!("{} ({number}/{total})", step.name.bold());
                println!();
                render_puzzle(step, session);
                println!();
                println!("  'check' when ready · 'skip' to give up · 'quit' to leave");
            }
        }
        Phase::SecondChance => {
            if let Some(step) = session.current_step() {
                println!("{}", "Second chance".bold());
                render_options(
                    &step.second_chance.options,
                    selected_of(session.answer()),
                );
                println!();
                println!("  'check' when ready · 'skip' to give up");
            }
        }
        Phase::Explanation => {
            if let Some(step) = session.current_step() {
                let heading = step
                    .explanation
                    .title
                    .clone()
                    .unwrap_or_else(|| "Explanation".to_string());
                println!("{}", heading.bold());
                println!("{}", step.explanation.text);
                println!();
                println!(
                    "  Step score: {:+} · total {}",
                    session.progress().last_step_score(),
                    session.progress().score()
                );
                println!("  [Enter] continue · 'restart' to start over");
            }
        }
        Phase::Context => {
            if let Some(step) = session.current_step()
                && let Some(context) = &step.context
            {
                if let Some(title) = &context.title {
                    println!("{}", title.bold());
                }
                println!("{}", context.text);
                println!();
                println!("  [Enter] continue");
            }
        }
        Phase::Done => {
            let end = &session.sequence().end_screen;
            if let Some(title) = &end.title {
                println!("{}", title.bold());
            }
            println!("{}", end.text);
            println!();
            println!(
                "  {} {} points",
                "Final score:".bold(),
                session.progress().score()
            );
        }
    }
}

fn render_puzzle(step: &Step, session: &PlaySession) {
    let answer = session.answer();
    let step_index = session.progress().step_index();
    match &step.main {
        Puzzle::Choice(p) => {
            println!("Pick the correct answer:");
            render_options(&p.options, selected_of(answer));
        }
        Puzzle::TrueStatement(p) => {
            println!("Exactly one of these is true:");
            render_options(&p.statements, selected_of(answer));
        }
        Puzzle::Partition(p) => {
            println!("Baskets:");
            for (i, basket) in p.baskets.iter().enumerate() {
                println!("  {}. {}", i + 1, basket);
            }
            println!("Sort every item ('<item> <basket>'):");
            let assignments = match answer {
                AnswerState::Partition { assignments } => assignments.as_slice(),
                _ => &[],
            };
            for (i, item) in p.items.iter().enumerate() {
                let placed = assignments
                    .get(i)
                    .copied()
                    .flatten()
                    .and_then(|b| p.baskets.get(b))
                    .map_or("(unsorted)".to_string(), |b| format!("-> {b}"));
                println!("  {}. {:<16} {placed}", i + 1, item.label);
            }
        }
        Puzzle::Ordering(p) => {
            let display = ordering_display(p.elements.len(), step_index);
            println!("Elements:");
            for (position, element) in display.iter().enumerate() {
                println!("  {}. {}", position + 1, p.elements[*element]);
            }
            println!("Fill the slots in order ('<slot> <element>'):");
            let slots = match answer {
                AnswerState::Ordering { slots } => slots.as_slice(),
                _ => &[],
            };
            for (i, slot) in slots.iter().enumerate() {
                let placed = slot
                    .and_then(|e| p.elements.get(e))
                    .map_or("(empty)", |label| label.as_str());
                println!("  {}. {placed}", i + 1);
            }
        }
        Puzzle::Matching(p) => {
            let display = matching_display(p.right.len(), step_index);
            println!("Right-hand choices:");
            for (position, right) in display.iter().enumerate() {
                println!("  {}. {}", position + 1, p.right[*right]);
            }
            println!("Pair every entry ('<left> <right>'):");
            let assignments = match answer {
                AnswerState::Matching { assignments } => assignments.as_slice(),
                _ => &[],
            };
            for (i, left) in p.left.iter().enumerate() {
                let paired = assignments
                    .get(i)
                    .copied()
                    .flatten()
                    .and_then(|r| p.right.get(r))
                    .map_or("(open)".to_string(), |r| format!("-> {r}"));
                println!("  {}. {:<16} {paired}", i + 1, left);
            }
        }
    }
}

fn render_options(options: &[String], selected: Option<usize>) {
    for (i, option) in options.iter().enumerate() {
        let marker = if selected == Some(i) { ">" } else { " " };
        println!("{marker} {}. {option}", i + 1);
    }
}

fn selected_of(answer: &AnswerState) -> Option<usize> {
    match answer {
        AnswerState::Choice { selected } | AnswerState::Statement { selected } => *selected,
        _ => None,
    }
}
