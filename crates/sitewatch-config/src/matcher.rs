//! Compiled watch patterns.

use globset::{Glob, GlobSet, GlobSetBuilder};
use sitewatch_common::ConfigError;
use std::path::{Path, PathBuf};

/// Decides whether a changed file should trigger a reload.
///
/// Absolute paths are matched relative to the working directory; separators
/// are normalized to `/` so patterns behave the same on Windows.
#[derive(Debug, Clone)]
pub struct WatchMatcher {
    root: PathBuf,
    globs: GlobSet,
}

impl WatchMatcher {
    pub fn new(root: &Path, patterns: &[String]) -> Result<Self, ConfigError> {
        let mut builder = GlobSetBuilder::new();
        for pattern in patterns {
            let glob = Glob::new(pattern)
                .map_err(|e| ConfigError::InvalidPattern(format!("{pattern:?}: {e}")))?;
            builder.add(glob);
        }
        let globs = builder
            .build()
            .map_err(|e| ConfigError::InvalidPattern(e.to_string()))?;

        Ok(Self {
            root: root.to_path_buf(),
            globs,
        })
    }

    pub fn is_match(&self, path: &Path) -> bool {
        let rel = path.strip_prefix(&self.root).unwrap_or(path);
        let rel = rel.to_string_lossy().replace('\\', "/");
        self.globs.is_match(rel.as_str())
    }
}
