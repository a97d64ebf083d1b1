pub mod ops_build;
pub mod ops_check;
pub mod ops_deps;

use std::path::Path;

/// Extension name reported for a properties file: its file stem.
pub fn extension_name(path: &Path) -> String {
    path.file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
