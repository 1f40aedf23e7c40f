pub mod check;
pub mod init;
pub mod list;
pub mod play;
pub mod stats;

use std::path::Path;

use rp_library::Library;

/// Load a library file, with a helpful hint when none exists yet.
fn load_library(path: &Path) -> Result<Library, String> {
    if !path.exists() {
        return Err(format!(
            "library file '{}' not found. Create one with: riddlepath init",
            path.display()
        ));
    }
    Library::load(path).map_err(|e| e.to_string())
}
