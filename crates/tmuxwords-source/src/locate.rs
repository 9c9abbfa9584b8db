//! Executable lookup.

use std::path::PathBuf;

/// Resolve `name` to an executable: searched for on `PATH` when bare,
/// checked directly when it contains a path separator.
pub fn find_executable(name: &str) -> Option<PathBuf> {
    if name.is_empty() {
        return None;
    }
    which::which(name).ok()
}
