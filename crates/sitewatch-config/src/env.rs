//! Environment variable overrides.
//!
//! Applied on top of whatever the config file says, before validation.
//! The lookup is a plain function so callers (and tests) decide where the
//! values come from; [`process_env`] reads the real process environment.

use crate::schema::{ConfigFile, TlsFile};
use sitewatch_common::ConfigError;
use std::env::VarError;
use tracing::debug;

/// Path of the config file to load, overriding discovery.
pub const CONFIG_PATH_VAR: &str = "SITEWATCH_CONFIG";

pub const WORKING_DIRECTORY_VAR: &str = "SITEWATCH_WORKING_DIRECTORY";
pub const SERVER_ROOT_VAR: &str = "SITEWATCH_SERVER_ROOT";
/// Comma-separated glob list.
pub const WATCH_PATTERNS_VAR: &str = "SITEWATCH_WATCH_PATTERNS";
pub const NOTIFY_VAR: &str = "SITEWATCH_NOTIFY";
pub const DEBUG_VAR: &str = "SITEWATCH_DEBUG";
pub const TLS_KEY_VAR: &str = "SITEWATCH_TLS_KEY";
pub const TLS_CERT_VAR: &str = "SITEWATCH_TLS_CERT";
pub const RELOAD_DELAY_VAR: &str = "SITEWATCH_RELOAD_DELAY_MS";

/// Read a variable from the process environment. Blank values count as unset.
///
/// A value that is not valid UTF-8 is an error rather than being skipped.
pub fn process_env(key: &str) -> Result<Option<String>, ConfigError> {
    match std::env::var(key) {
        Ok(value) if value.trim().is_empty() => Ok(None),
        Ok(value) => Ok(Some(value)),
        Err(VarError::NotPresent) => Ok(None),
        Err(VarError::NotUnicode(raw)) => Err(ConfigError::InvalidValue(format!(
            "{key} = {raw:?} is not valid UTF-8"
        ))),
    }
}

/// Lookup that never finds anything, for loading a file exactly as written.
pub fn no_env(_key: &str) -> Result<Option<String>, ConfigError> {
    Ok(None)
}

/// Apply every override `lookup` knows about to `file`.
pub fn apply_overrides<F>(file: &mut ConfigFile, lookup: F) -> Result<(), ConfigError>
where
    F: Fn(&str) -> Result<Option<String>, ConfigError>,
{
    let get = |key: &str| -> Result<Option<String>, ConfigError> {
        let value = lookup(key)?.filter(|v| !v.trim().is_empty());
        if value.is_some() {
            debug!("applying override from {key}");
        }
        Ok(value)
    };

    if let Some(dir) = get(WORKING_DIRECTORY_VAR)? {
        file.working_directory = dir;
    }
    if let Some(root) = get(SERVER_ROOT_VAR)? {
        file.server_root = root;
    }
    if let Some(patterns) = get(WATCH_PATTERNS_VAR)? {
        file.watch_patterns = split_patterns(&patterns);
    }
    if let Some(value) = get(NOTIFY_VAR)? {
        file.notify = parse_bool(NOTIFY_VAR, &value)?;
    }
    if let Some(value) = get(DEBUG_VAR)? {
        file.debug = parse_bool(DEBUG_VAR, &value)?;
    }
    if let Some(key_path) = get(TLS_KEY_VAR)? {
        file.tls.get_or_insert_with(TlsFile::default).key_path = Some(key_path);
    }
    if let Some(cert_path) = get(TLS_CERT_VAR)? {
        file.tls.get_or_insert_with(TlsFile::default).cert_path = Some(cert_path);
    }
    if let Some(value) = get(RELOAD_DELAY_VAR)? {
        let ms: i64 = value.trim().parse().map_err(|e| {
            ConfigError::InvalidValue(format!("{RELOAD_DELAY_VAR} = {value:?} is not an integer: {e}"))
        })?;
        file.reload_delay_ms = ms.into();
    }

    Ok(())
}

fn split_patterns(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .map(String::from)
        .collect()
}

fn parse_bool(key: &str, raw: &str) -> Result<bool, ConfigError> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::InvalidValue(format!(
            "{key} = {raw:?} is not a boolean"
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::ReloadDelay;
    use std::collections::HashMap;

    fn lookup_from(
        pairs: &[(&str, &str)],
    ) -> impl Fn(&str) -> Result<Option<String>, ConfigError> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| Ok(map.get(key).cloned())
    }

    #[test]
    fn no_overrides_leaves_file_untouched() {
        let mut file = ConfigFile::default();
        apply_overrides(&mut file, no_env).unwrap();
        assert_eq!(file, ConfigFile::default());
    }

    #[test]
    fn overrides_replace_file_values() {
        let mut file = ConfigFile::default();
        let lookup = lookup_from(&[
            (WORKING_DIRECTORY_VAR, "/srv/site"),
            (SERVER_ROOT_VAR, "/srv/site/dist"),
            (WATCH_PATTERNS_VAR, "**/*.md, ,**/*.toml"),
            (NOTIFY_VAR, "yes"),
            (DEBUG_VAR, "0"),
            (RELOAD_DELAY_VAR, " 1200 "),
        ]);
        apply_overrides(&mut file, lookup).unwrap();

        assert_eq!(file.working_directory, "/srv/site");
        assert_eq!(file.server_root, "/srv/site/dist");
        assert_eq!(file.watch_patterns, vec!["**/*.md", "**/*.toml"]);
        assert!(file.notify);
        assert!(!file.debug);
        assert_eq!(file.reload_delay_ms, ReloadDelay::Integer(1200));
    }

    #[test]
    fn tls_override_creates_table() {
        let mut file = ConfigFile::default();
        apply_overrides(&mut file, lookup_from(&[(TLS_KEY_VAR, "/certs/k.pem")])).unwrap();
        let tls = file.tls.unwrap();
        assert_eq!(tls.key_path.as_deref(), Some("/certs/k.pem"));
        assert!(tls.cert_path.is_none());
    }

    #[test]
    fn blank_values_are_ignored() {
        let mut file = ConfigFile::default();
        apply_overrides(&mut file, lookup_from(&[(SERVER_ROOT_VAR, "   ")])).unwrap();
        assert_eq!(file.server_root, "public");
    }

    #[test]
    fn malformed_bool_is_invalid_value() {
        let mut file = ConfigFile::default();
        let err = apply_overrides(&mut file, lookup_from(&[(NOTIFY_VAR, "maybe")])).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue(_)));
        assert!(err.to_string().contains(NOTIFY_VAR));
    }

    #[test]
    fn malformed_delay_is_invalid_value() {
        let mut file = ConfigFile::default();
        let err =
            apply_overrides(&mut file, lookup_from(&[(RELOAD_DELAY_VAR, "soon")])).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue(_)));
    }

    #[test]
    fn negative_delay_parses_for_validation_to_reject() {
        let mut file = ConfigFile::default();
        apply_overrides(&mut file, lookup_from(&[(RELOAD_DELAY_VAR, "-5")])).unwrap();
        assert_eq!(file.reload_delay_ms, ReloadDelay::Integer(-5));
    }

    #[test]
    fn lookup_errors_are_propagated() {
        let mut file = ConfigFile::default();
        let failing = |key: &str| -> Result<Option<String>, ConfigError> {
            Err(ConfigError::InvalidValue(format!("{key} is broken")))
        };
        let err = apply_overrides(&mut file, failing).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue(_)));
    }

    #[test]
    fn process_env_treats_missing_as_unset() {
        assert_eq!(process_env("SITEWATCH_TEST_NEVER_SET").unwrap(), None);
    }

    #[cfg(unix)]
    #[test]
    fn process_env_rejects_non_utf8_values() {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;

        let key = "SITEWATCH_TEST_NON_UTF8_VALUE";
        std::env::set_var(key, OsStr::from_bytes(b"/srv/\xff"));
        let err = process_env(key).unwrap_err();
        std::env::remove_var(key);

        assert!(matches!(err, ConfigError::InvalidValue(_)));
        assert!(err.to_string().contains(key));
    }
}
