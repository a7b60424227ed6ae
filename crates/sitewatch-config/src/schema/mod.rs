//! Configuration schema types.
//!
//! [`ConfigFile`] is the deserialized source with defaults filled in.
//! [`Configuration`] is the validated value handed to the host tool; it can
//! only be produced by [`crate::validation::validate`] and is read-only.

mod file;

pub use file::*;

use crate::matcher::WatchMatcher;
use serde::Serialize;
use sitewatch_common::ConfigError;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Validated live-reload server configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Configuration {
    working_directory: PathBuf,
    server_root: PathBuf,
    watch_patterns: Vec<String>,
    notify_enabled: bool,
    debug_enabled: bool,
    tls: Option<TlsConfig>,
    reload_delay_ms: u64,
}

/// Private key and certificate used to serve over HTTPS.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TlsConfig {
    key_path: PathBuf,
    cert_path: PathBuf,
}

impl TlsConfig {
    pub(crate) fn new(key_path: PathBuf, cert_path: PathBuf) -> Self {
        Self {
            key_path,
            cert_path,
        }
    }

    pub fn key_path(&self) -> &Path {
        &self.key_path
    }

    pub fn cert_path(&self) -> &Path {
        &self.cert_path
    }
}

/// Field values for [`Configuration`], assembled by validation.
pub(crate) struct ConfigurationParts {
    pub working_directory: PathBuf,
    pub server_root: PathBuf,
    pub watch_patterns: Vec<String>,
    pub notify_enabled: bool,
    pub debug_enabled: bool,
    pub tls: Option<TlsConfig>,
    pub reload_delay_ms: u64,
}

impl Configuration {
    pub(crate) fn from_parts(parts: ConfigurationParts) -> Self {
        Self {
            working_directory: parts.working_directory,
            server_root: parts.server_root,
            watch_patterns: parts.watch_patterns,
            notify_enabled: parts.notify_enabled,
            debug_enabled: parts.debug_enabled,
            tls: parts.tls,
            reload_delay_ms: parts.reload_delay_ms,
        }
    }

    /// Directory watched for changes.
    pub fn working_directory(&self) -> &Path {
        &self.working_directory
    }

    /// Directory served to the browser.
    pub fn server_root(&self) -> &Path {
        &self.server_root
    }

    pub fn watch_patterns(&self) -> &[String] {
        &self.watch_patterns
    }

    pub fn notify_enabled(&self) -> bool {
        self.notify_enabled
    }

    pub fn debug_enabled(&self) -> bool {
        self.debug_enabled
    }

    /// TLS credentials; `None` means plain HTTP.
    pub fn tls(&self) -> Option<&TlsConfig> {
        self.tls.as_ref()
    }

    pub fn reload_delay_ms(&self) -> u64 {
        self.reload_delay_ms
    }

    /// Debounce delay to wait after a change before reloading.
    pub fn reload_delay(&self) -> Duration {
        Duration::from_millis(self.reload_delay_ms)
    }

    /// URL scheme the host tool should serve with.
    pub fn scheme(&self) -> &'static str {
        if self.tls.is_some() {
            "https"
        } else {
            "http"
        }
    }

    /// Compile the watch patterns into a matcher rooted at the working directory.
    pub fn watch_matcher(&self) -> Result<WatchMatcher, ConfigError> {
        WatchMatcher::new(&self.working_directory, &self.watch_patterns)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(tls: Option<TlsConfig>) -> Configuration {
        Configuration::from_parts(ConfigurationParts {
            working_directory: PathBuf::from("/srv/public"),
            server_root: PathBuf::from("/srv/public"),
            watch_patterns: vec!["**/*.html".into()],
            notify_enabled: false,
            debug_enabled: true,
            tls,
            reload_delay_ms: 250,
        })
    }

    #[test]
    fn default_file_matches_shipped_defaults() {
        let file = ConfigFile::default();
        assert_eq!(file.working_directory, "public");
        assert_eq!(file.server_root, "public");
        assert_eq!(file.watch_patterns, vec!["**/*.html", "**/*.css", "**/*.js"]);
        assert!(!file.notify);
        assert!(file.debug);
        assert!(file.tls.is_none());
        assert_eq!(file.reload_delay_ms, ReloadDelay::Integer(500));
    }

    #[test]
    fn partial_toml_keeps_defaults() {
        let file: ConfigFile = toml::from_str("notify = true\n").unwrap();
        assert!(file.notify);
        assert_eq!(file.reload_delay_ms, ReloadDelay::Integer(500));
        assert_eq!(file.watch_patterns.len(), 3);
    }

    #[test]
    fn unknown_key_is_rejected() {
        let result: Result<ConfigFile, _> = toml::from_str("reloadDelay = 500\n");
        assert!(result.is_err());
    }

    #[test]
    fn reload_delay_converts_to_duration() {
        let config = sample(None);
        assert_eq!(config.reload_delay(), Duration::from_millis(250));
    }

    #[test]
    fn scheme_follows_tls() {
        assert_eq!(sample(None).scheme(), "http");
        let tls = TlsConfig::new("/certs/k.pem".into(), "/certs/c.pem".into());
        assert_eq!(sample(Some(tls)).scheme(), "https");
    }

    #[test]
    fn serializes_with_field_names() {
        let json = serde_json::to_string(&sample(None)).unwrap();
        assert!(json.contains("\"working_directory\":\"/srv/public\""));
        assert!(json.contains("\"reload_delay_ms\":250"));
        assert!(json.contains("\"tls\":null"));
    }
}
