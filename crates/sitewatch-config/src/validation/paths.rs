//! Directory checks for `working_directory` and `server_root`.

use std::path::Path;

/// Push an error unless `resolved` is an existing, listable directory.
pub(crate) fn validate_directory(errors: &mut Vec<String>, name: &str, raw: &str, resolved: &Path) {
    if raw.trim().is_empty() {
        errors.push(format!("{name} is empty"));
        return;
    }

    let metadata = match std::fs::metadata(resolved) {
        Ok(m) => m,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            errors.push(format!("{name}: {} does not exist", resolved.display()));
            return;
        }
        Err(e) => {
            errors.push(format!("{name}: cannot stat {}: {e}", resolved.display()));
            return;
        }
    };

    if !metadata.is_dir() {
        errors.push(format!("{name}: {} is not a directory", resolved.display()));
        return;
    }

    if let Err(e) = std::fs::read_dir(resolved) {
        errors.push(format!("{name}: {} is not readable: {e}", resolved.display()));
    }
}
