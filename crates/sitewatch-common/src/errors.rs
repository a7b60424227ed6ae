use std::path::PathBuf;

/// Errors raised while loading a configuration.
///
/// None of these are transient: re-running the load without fixing the
/// source reproduces the same error.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("config parse error: {0}")]
    Parse(String),

    #[error("invalid path: {0}")]
    InvalidPath(String),

    #[error("invalid watch pattern: {0}")]
    InvalidPattern(String),

    #[error("missing TLS credential: {0}")]
    MissingCredential(String),

    #[error("invalid value: {0}")]
    InvalidValue(String),

    #[error("config write error: {0}")]
    Write(String),
}

#[derive(Debug, thiserror::Error)]
pub enum SitewatchError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
