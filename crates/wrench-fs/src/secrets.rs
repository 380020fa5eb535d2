//! Upward search for the secrets file
//!
//! The same cascade runs at build time, when no secrets exist, and at
//! deploy time, when a secrets file is expected somewhere above the working
//! directory. Not finding one is therefore never an error.

use std::path::{Path, PathBuf};

use crate::constants::ResourceName;

/// Finds the nearest secrets file at or above a starting directory.
#[derive(Debug, Clone)]
pub struct SecretsLocator {
    file_name: String,
}

impl Default for SecretsLocator {
    fn default() -> Self {
        Self {
            file_name: ResourceName::Secrets.as_str().to_string(),
        }
    }
}

impl SecretsLocator {
    /// Locator for the standard `secrets.properties` file name.
    pub fn new() -> Self {
        Self::default()
    }

    /// Locator for a custom file name.
    pub fn with_file_name(file_name: impl Into<String>) -> Self {
        Self {
            file_name: file_name.into(),
        }
    }

    /// The file name searched for in each directory.
    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    /// Walk from `start` towards the filesystem root and return the first
    /// secrets file found.
    ///
    /// `start` is canonicalized when possible so that relative paths such
    /// as `.` can still walk upward.
    pub fn locate(&self, start: &Path) -> Option<PathBuf> {
        let mut dir = dunce::canonicalize(start).unwrap_or_else(|_| start.to_path_buf());
        loop {
            let candidate = dir.join(&self.file_name);
            if candidate.is_file() {
                tracing::debug!(path = %candidate.display(), "Found secrets file");
                return Some(candidate);
            }
            match dir.parent() {
                Some(parent) if parent != dir && !parent.as_os_str().is_empty() => {
                    dir = parent.to_path_buf();
                }
                _ => {
                    tracing::debug!(start = %start.display(), "No secrets file found");
                    return None;
                }
            }
        }
    }
}
