//! Configuration validation.
//!
//! Checks run in a fixed order: directories, watch patterns, TLS
//! credentials, then scalar values. Each group collects every problem it
//! finds; the first group with problems decides the error kind.

mod helpers;
mod paths;
mod patterns;
mod tls;
mod values;


use crate::resolve::resolve_path;
use crate::schema::{ConfigFile, Configuration, ConfigurationParts};
use helpers::finish;
use sitewatch_common::ConfigError;
use std::path::Path;

/// Validate raw settings, resolving relative paths against `base_dir`.
///
/// Performs read-only filesystem checks and nothing else.
pub fn validate(file: &ConfigFile, base_dir: &Path) -> Result<Configuration, ConfigError> {
    let working_directory = resolve_path(base_dir, &file.working_directory);
    let server_root = resolve_path(base_dir, &file.server_root);

    let mut errors = Vec::new();
    paths::validate_directory(
        &mut errors,
        "working_directory",
        &file.working_directory,
        &working_directory,
    );
    paths::validate_directory(&mut errors, "server_root", &file.server_root, &server_root);
    finish(errors, ConfigError::InvalidPath)?;

    let mut errors = Vec::new();
    patterns::validate_patterns(&mut errors, &file.watch_patterns);
    finish(errors, ConfigError::InvalidPattern)?;

    let mut errors = Vec::new();
    let tls = tls::validate_tls(&mut errors, file.tls.as_ref(), base_dir);
    finish(errors, ConfigError::MissingCredential)?;

    let mut errors = Vec::new();
    let reload_delay_ms = values::validate_reload_delay(&mut errors, &file.reload_delay_ms);
    finish(errors, ConfigError::InvalidValue)?;

    Ok(Configuration::from_parts(ConfigurationParts {
        working_directory,
        server_root,
        watch_patterns: file.watch_patterns.clone(),
        notify_enabled: file.notify,
        debug_enabled: file.debug,
        tls,
        reload_delay_ms,
    }))
}
