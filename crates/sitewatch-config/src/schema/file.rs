//! On-disk settings shape: what a config file (or the environment) says
//! before any path is resolved or checked.

use serde::{Deserialize, Serialize};

/// Default watch globs, matching a plain static site.
pub const DEFAULT_WATCH_PATTERNS: &[&str] = &["**/*.html", "**/*.css", "**/*.js"];

/// Default debounce delay in milliseconds.
pub const DEFAULT_RELOAD_DELAY_MS: i64 = 500;

/// Default directory, relative to the base directory, that is both watched and served.
pub const DEFAULT_SITE_DIRECTORY: &str = "public";

/// Raw, unvalidated settings.
///
/// All fields use `serde(default)` so partial files work. Unknown keys are
/// rejected so a misspelled key is reported instead of silently ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ConfigFile {
    pub working_directory: String,
    pub server_root: String,
    pub watch_patterns: Vec<String>,
    pub notify: bool,
    pub debug: bool,
    pub tls: Option<TlsFile>,
    pub reload_delay_ms: ReloadDelay,
}

impl Default for ConfigFile {
    fn default() -> Self {
        Self {
            working_directory: DEFAULT_SITE_DIRECTORY.into(),
            server_root: DEFAULT_SITE_DIRECTORY.into(),
            watch_patterns: DEFAULT_WATCH_PATTERNS.iter().map(|p| p.to_string()).collect(),
            notify: false,
            debug: true,
            tls: None,
            reload_delay_ms: ReloadDelay::Integer(DEFAULT_RELOAD_DELAY_MS),
        }
    }
}

/// Raw reload delay as written in the source.
///
/// Any scalar deserializes, so a negative, fractional, quoted or oversized
/// value reaches validation and is reported as an invalid value rather than
/// a parse error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ReloadDelay {
    Integer(i64),
    Other(serde_json::Value),
}

impl From<i64> for ReloadDelay {
    fn from(ms: i64) -> Self {
        Self::Integer(ms)
    }
}

/// Raw `[tls]` table. Either key may be missing here; validation rejects that.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TlsFile {
    pub key_path: Option<String>,
    pub cert_path: Option<String>,
}
