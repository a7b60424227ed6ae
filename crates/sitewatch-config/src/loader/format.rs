//! Source file formats, picked by extension.

use crate::schema::ConfigFile;
use sitewatch_common::ConfigError;
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceFormat {
    Toml,
    Json,
    Yaml,
}

impl SourceFormat {
    /// `.json` and `.yaml`/`.yml` are recognized; anything else is read as TOML.
    pub fn from_path(path: &Path) -> Self {
        let ext = path
            .extension()
            .map(|e| e.to_string_lossy().to_ascii_lowercase());
        match ext.as_deref() {
            Some("json") => Self::Json,
            Some("yaml") | Some("yml") => Self::Yaml,
            _ => Self::Toml,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Toml => "TOML",
            Self::Json => "JSON",
            Self::Yaml => "YAML",
        }
    }

    pub fn parse(self, content: &str) -> Result<ConfigFile, ConfigError> {
        let parsed: Result<ConfigFile, String> = match self {
            Self::Toml => toml::from_str(content).map_err(|e| e.to_string()),
            Self::Json => serde_json::from_str(content).map_err(|e| e.to_string()),
            Self::Yaml => serde_yaml::from_str(content).map_err(|e| e.to_string()),
        };
        parsed.map_err(|e| ConfigError::Parse(format!("failed to parse {}: {e}", self.name())))
    }
}
