//! Watch pattern checks.

use globset::Glob;

pub(crate) fn validate_patterns(errors: &mut Vec<String>, patterns: &[String]) {
    if patterns.is_empty() {
        errors.push("watch_patterns is empty".into());
        return;
    }

    for (i, pattern) in patterns.iter().enumerate() {
        if pattern.trim().is_empty() {
            errors.push(format!("watch_patterns[{i}] is blank"));
            continue;
        }
        if let Err(e) = Glob::new(pattern) {
            errors.push(format!("watch_patterns[{i}] = {pattern:?}: {e}"));
        }
    }
}
