//! Shared helpers used by all check groups.

use sitewatch_common::ConfigError;
use tracing::warn;

/// Turn the messages a check group collected into a single error of `kind`.
pub(crate) fn finish(
    errors: Vec<String>,
    kind: fn(String) -> ConfigError,
) -> Result<(), ConfigError> {
    if errors.is_empty() {
        return Ok(());
    }
    let err = kind(errors.join("; "));
    warn!("{err}");
    Err(err)
}
