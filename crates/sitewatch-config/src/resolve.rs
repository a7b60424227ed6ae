//! Path resolution for configured paths.
//!
//! A leading `~` expands to the home directory. Relative paths are joined
//! onto the base directory. Absolute paths are returned as written.

use std::path::{Path, PathBuf};

/// Resolve a configured path against `base_dir`.
pub fn resolve_path(base_dir: &Path, raw: &str) -> PathBuf {
    let path = expand_home(raw);
    if path.is_absolute() {
        path
    } else {
        base_dir.join(path)
    }
}

/// Expand `~` and `~/...`. Left untouched when no home directory is known.
fn expand_home(raw: &str) -> PathBuf {
    if raw == "~" {
        if let Some(home) = dirs::home_dir() {
            return home;
        }
    } else if let Some(rest) = raw.strip_prefix("~/") {
        if let Some(home) = dirs::home_dir() {
            return home.join(rest);
        }
    }
    PathBuf::from(raw)
}
