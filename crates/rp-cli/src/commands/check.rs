use std::fs;
use std::path::Path;

use rp_core::validate_sequence;
use rp_library::migrate;

/// Validate a library file without the loader's fail-fast, so every
/// issue in a hand-edited file gets reported.
pub fn run(file: &Path) -> Result<(), String> {
    let text = fs::read_to_string(file).map_err(|e| format!("cannot read '{}': {e}", file.display()))?;
    let value: serde_json::Value =
        serde_json::from_str(&text).map_err(|e| format!("not valid JSON: {e}"))?;
    let parsed = migrate(value).map_err(|e| e.to_string())?;

    let mut errors = 0;
    let mut warnings = 0;
    for entry in &parsed.entries {
        for issue in validate_sequence(&entry.sequence) {
            println!("{issue}");
            if issue.is_error {
                errors += 1;
            } else {
                warnings += 1;
            }
        }
    }

    if errors > 0 || warnings > 0 {
        println!();
        println!(
            "  {} error{}, {} warning{}",
            errors,
            if errors == 1 { "" } else { "s" },
            warnings,
            if warnings == 1 { "" } else { "s" },
        );
    } else {
        println!(
            "  {} sequence{} checked, no issues.",
            parsed.entries.len(),
            if parsed.entries.len() == 1 { "" } else { "s" }
        );
    }

    if errors > 0 {
        Err("validation failed with errors".into())
    } else {
        Ok(())
    }
}
