//! Config file discovery and starter file creation.

use crate::env::CONFIG_PATH_VAR;
use crate::resolve::resolve_path;
use sitewatch_common::ConfigError;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use super::template::default_config_toml;

/// File name looked up in the current directory.
pub const LOCAL_CONFIG_FILE: &str = "sitewatch.toml";

/// Per-user config file path.
///
/// On macOS: `~/Library/Application Support/sitewatch/config.toml`
/// On Linux: `~/.config/sitewatch/config.toml`
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("sitewatch").join("config.toml"))
}

/// Find the config file to load.
///
/// An explicit `SITEWATCH_CONFIG` must exist. The local and per-user files
/// are optional; `None` means "use defaults".
pub fn discover<F>(cwd: &Path, lookup: &F) -> Result<Option<PathBuf>, ConfigError>
where
    F: Fn(&str) -> Result<Option<String>, ConfigError>,
{
    if let Some(explicit) = lookup(CONFIG_PATH_VAR)?.filter(|v| !v.trim().is_empty()) {
        let path = resolve_path(cwd, &explicit);
        if !path.exists() {
            return Err(ConfigError::FileNotFound(path));
        }
        debug!("using config from {CONFIG_PATH_VAR}: {}", path.display());
        return Ok(Some(path));
    }

    let local = cwd.join(LOCAL_CONFIG_FILE);
    if local.is_file() {
        debug!("found local config at {}", local.display());
        return Ok(Some(local));
    }

    if let Some(user) = default_config_path().filter(|p| p.is_file()) {
        debug!("found user config at {}", user.display());
        return Ok(Some(user));
    }

    debug!("no config file found, using defaults");
    Ok(None)
}

/// Write the documented starter file to `path`, creating parent directories.
///
/// Refuses to replace an existing file unless `overwrite` is set.
pub fn create_default_config(path: &Path, overwrite: bool) -> Result<(), ConfigError> {
    if path.exists() && !overwrite {
        return Err(ConfigError::Write(format!(
            "{} already exists",
            path.display()
        )));
    }

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| {
            ConfigError::Write(format!(
                "failed to create config directory {}: {e}",
                parent.display()
            ))
        })?;
    }

    std::fs::write(path, default_config_toml()).map_err(|e| {
        ConfigError::Write(format!(
            "failed to write starter config to {}: {e}",
            path.display()
        ))
    })?;

    info!("created starter config at {}", path.display());
    Ok(())
}
