//! Core loading: read a source, apply environment overrides, validate.

use crate::env;
use crate::schema::{ConfigFile, Configuration};
use crate::validation;
use sitewatch_common::ConfigError;
use std::path::{Path, PathBuf};
use tracing::info;

use super::discovery::discover;
use super::format::SourceFormat;

/// Load the configuration for the current directory.
///
/// Looks for `SITEWATCH_CONFIG`, then `./sitewatch.toml`, then the per-user
/// config file, and falls back to defaults. Environment overrides apply on top.
pub fn load() -> Result<Configuration, ConfigError> {
    load_with_env(env::process_env)
}

/// [`load`] with an explicit environment lookup.
pub fn load_with_env<F>(lookup: F) -> Result<Configuration, ConfigError>
where
    F: Fn(&str) -> Result<Option<String>, ConfigError>,
{
    let cwd = current_dir()?;
    match discover(&cwd, &lookup)? {
        Some(path) => load_from_path_with_env(&path, lookup),
        None => finish(ConfigFile::default(), &cwd, lookup, None),
    }
}

/// Load from a specific file. It must exist; its format follows the extension.
pub fn load_from_path(path: &Path) -> Result<Configuration, ConfigError> {
    load_from_path_with_env(path, env::process_env)
}

/// [`load_from_path`] with an explicit environment lookup.
pub fn load_from_path_with_env<F>(path: &Path, lookup: F) -> Result<Configuration, ConfigError>
where
    F: Fn(&str) -> Result<Option<String>, ConfigError>,
{
    let file = read_config_file(path)?;
    let base_dir = base_dir_of(path)?;
    finish(file, &base_dir, lookup, Some(path))
}

/// Load from in-memory source text. No environment overrides are applied.
pub fn load_from_str(
    content: &str,
    format: SourceFormat,
    base_dir: &Path,
) -> Result<Configuration, ConfigError> {
    let file = format.parse(content)?;
    finish(file, base_dir, env::no_env, None)
}

fn finish<F>(
    mut file: ConfigFile,
    base_dir: &Path,
    lookup: F,
    source: Option<&Path>,
) -> Result<Configuration, ConfigError>
where
    F: Fn(&str) -> Result<Option<String>, ConfigError>,
{
    env::apply_overrides(&mut file, lookup)?;
    let config = validation::validate(&file, base_dir)?;

    match source {
        Some(path) => info!("loaded config from {}", path.display()),
        None => info!("loaded default config for {}", base_dir.display()),
    }
    Ok(config)
}

fn read_config_file(path: &Path) -> Result<ConfigFile, ConfigError> {
    if !path.exists() {
        return Err(ConfigError::FileNotFound(path.to_path_buf()));
    }

    let content = std::fs::read_to_string(path)
        .map_err(|e| ConfigError::Parse(format!("failed to read {}: {e}", path.display())))?;

    SourceFormat::from_path(path)
        .parse(&content)
        .map_err(|e| match e {
            ConfigError::Parse(msg) => ConfigError::Parse(format!("{}: {msg}", path.display())),
            other => other,
        })
}

/// Directory relative paths in `path` resolve against. Always absolute.
fn base_dir_of(path: &Path) -> Result<PathBuf, ConfigError> {
    match path.parent().filter(|p| !p.as_os_str().is_empty()) {
        Some(parent) if parent.is_absolute() => Ok(parent.to_path_buf()),
        Some(parent) => Ok(current_dir()?.join(parent)),
        None => current_dir(),
    }
}

fn current_dir() -> Result<PathBuf, ConfigError> {
    std::env::current_dir().map_err(|e| {
        ConfigError::InvalidPath(format!("cannot determine current directory: {e}"))
    })
}
