//! TLS credential checks.
//!
//! A `[tls]` table that is present but incomplete or points at missing files
//! is an error. TLS is never dropped to get a config that loads.

use crate::resolve::resolve_path;
use crate::schema::{TlsConfig, TlsFile};
use std::fs::File;
use std::path::{Path, PathBuf};

pub(crate) fn validate_tls(
    errors: &mut Vec<String>,
    tls: Option<&TlsFile>,
    base_dir: &Path,
) -> Option<TlsConfig> {
    let tls = tls?;
    let key = validate_credential(errors, "tls.key_path", tls.key_path.as_deref(), base_dir);
    let cert = validate_credential(errors, "tls.cert_path", tls.cert_path.as_deref(), base_dir);
    match (key, cert) {
        (Some(key), Some(cert)) => Some(TlsConfig::new(key, cert)),
        _ => None,
    }
}

fn validate_credential(
    errors: &mut Vec<String>,
    name: &str,
    raw: Option<&str>,
    base_dir: &Path,
) -> Option<PathBuf> {
    let Some(raw) = raw.filter(|r| !r.trim().is_empty()) else {
        errors.push(format!("{name} is not set"));
        return None;
    };
    let path = resolve_path(base_dir, raw);

    match std::fs::metadata(&path) {
        Ok(m) if m.is_file() => {}
        Ok(_) => {
            errors.push(format!("{name}: {} is not a regular file", path.display()));
            return None;
        }
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            errors.push(format!("{name}: {} does not exist", path.display()));
            return None;
        }
        Err(e) => {
            errors.push(format!("{name}: cannot stat {}: {e}", path.display()));
            return None;
        }
    }

    if let Err(e) = File::open(&path) {
        errors.push(format!("{name}: {} is not readable: {e}", path.display()));
        return None;
    }

    Some(path)
}
