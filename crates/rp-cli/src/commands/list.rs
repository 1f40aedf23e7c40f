use std::path::Path;

use comfy_table::{ContentArrangement, Table};

pub fn run(file: &Path) -> Result<(), String> {
    let library = super::load_library(file)?;

    if library.is_empty() {
        println!("  The library is empty.");
        return Ok(());
    }

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Title", "Steps", "Intro slides", "Runs"]);

    for entry in library.entries() {
        table.add_row(vec![
            entry.sequence.title.clone(),
            entry.sequence.steps.len().to_string(),
            entry.sequence.intro.len().to_string(),
            entry.totals.runs.to_string(),
        ]);
    }

    println!("{table}");
    println!();
    println!(
        "  {} sequence{}",
        library.len(),
        if library.len() == 1 { "" } else { "s" }
    );

    Ok(())
}
