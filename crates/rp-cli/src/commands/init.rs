use std::path::Path;

use rp_library::Library;

pub fn run(file: &Path, force: bool) -> Result<(), String> {
    if file.exists() && !force {
        return Err(format!(
            "'{}' already exists (use --force to overwrite)",
            file.display()
        ));
    }

    let library = Library::with_starter();
    library
        .save(file)
        .map_err(|e| format!("cannot write '{}': {e}", file.display()))?;

    println!(
        "Created '{}' with {} starter sequence{}.",
        file.display(),
        library.len(),
        if library.len() == 1 { "" } else { "s" }
    );
    println!();
    println!("Get started:");
    println!("  riddlepath list          # See what's playable");
    println!("  riddlepath play          # Play the first sequence");
    println!("  riddlepath stats         # Accumulated results");

    Ok(())
}
