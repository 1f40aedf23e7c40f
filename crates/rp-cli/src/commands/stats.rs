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
    table.set_header(vec!["Title", "Runs", "Riddles", "Points", "Last played"]);

    for entry in library.entries() {
        let last = entry
            .last_played
            .map(|t| t.format("%Y-%m-%d %H:%M").to_string())
            .unwrap_or_else(|| "never".to_string());
        table.add_row(vec![
            entry.sequence.title.clone(),
            entry.totals.runs.to_string(),
            entry.totals.riddles.to_string(),
            entry.totals.points.to_string(),
            last,
        ]);
    }

    println!("{table}");

    Ok(())
}
