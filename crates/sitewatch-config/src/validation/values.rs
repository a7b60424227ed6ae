//! Scalar value checks.

use crate::schema::ReloadDelay;

/// Push an error unless the reload delay is a non-negative integer; returns the checked value.
pub(crate) fn validate_reload_delay(errors: &mut Vec<String>, value: &ReloadDelay) -> u64 {
    match value {
        ReloadDelay::Integer(ms) => match u64::try_from(*ms) {
            Ok(ms) => ms,
            Err(_) => {
                errors.push(format!("reload_delay_ms = {ms} must not be negative"));
                0
            }
        },
        ReloadDelay::Other(raw) => {
            errors.push(format!(
                "reload_delay_ms = {raw} is not a non-negative integer"
            ));
            0
        }
    }
}
