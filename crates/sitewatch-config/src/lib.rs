//! sitewatch configuration.
//!
//! Loads the settings a live-reload dev server needs (what to watch, what
//! to serve, optional TLS credentials, and the reload debounce) from a
//! TOML, JSON or YAML file plus `SITEWATCH_*` environment overrides, and
//! validates them before the server starts. Missing keys use defaults, so a
//! partial file or no file at all works.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use sitewatch_config::{load, config_to_json};
//!
//! let config = load().expect("failed to load config");
//! println!("serving {} over {}", config.server_root().display(), config.scheme());
//! println!("{}", config_to_json(&config));
//! ```

pub mod env;
pub mod loader;
pub mod matcher;
pub mod resolve;
pub mod schema;
pub mod validation;

// Re-export core types for convenience
pub use loader::{
    create_default_config, default_config_path, load, load_from_path, load_from_path_with_env,
    load_from_str, load_with_env, SourceFormat, LOCAL_CONFIG_FILE,
};
pub use matcher::WatchMatcher;
pub use schema::{ConfigFile, Configuration, TlsConfig, TlsFile};
pub use sitewatch_common::ConfigError;

/// Serialize a config to a pretty-printed JSON string.
pub fn config_to_json(config: &Configuration) -> String {
    serde_json::to_string_pretty(config)
        .unwrap_or_else(|e| format!("{{\"error\": \"failed to serialize config: {e}\"}}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_to_json_contains_all_fields() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir(dir.path().join("public")).unwrap();
        let config = load_from_str("", SourceFormat::Toml, dir.path()).unwrap();

        let json = config_to_json(&config);
        assert!(json.contains("\"working_directory\""));
        assert!(json.contains("\"server_root\""));
        assert!(json.contains("\"watch_patterns\""));
        assert!(json.contains("\"notify_enabled\": false"));
        assert!(json.contains("\"debug_enabled\": true"));
        assert!(json.contains("\"tls\": null"));
        assert!(json.contains("\"reload_delay_ms\": 500"));
    }

    #[test]
    fn loaded_config_builds_matcher() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir(dir.path().join("public")).unwrap();
        let config = load_from_str("", SourceFormat::Toml, dir.path()).unwrap();

        let matcher = config.watch_matcher().unwrap();
        assert!(matcher.is_match(&dir.path().join("public").join("index.html")));
        assert!(!matcher.is_match(&dir.path().join("public").join("notes.md")));
    }
}
