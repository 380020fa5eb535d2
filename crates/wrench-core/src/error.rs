//! Error types for wrench-core

use std::num::ParseIntError;

/// Result type for wrench-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while resolving a configuration
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A value failed a typed coercion
    #[error("Not an integer property: {key} = {value:?}")]
    ConfigFormat {
        key: String,
        value: String,
        #[source]
        source: ParseIntError,
    },

    /// A dotted key path conflicts structurally with another
    #[error("Configuration shape conflict at {path}: {message}")]
    ConfigShape { path: String, message: String },

    /// A target references a unit that has no definition
    #[error("Target {target} references undefined {unit_type} '{unit}'")]
    UnresolvedUnit {
        target: String,
        unit_type: String,
        unit: String,
    },

    /// A target is declared in the listing but never defined
    #[error("Target {target} is listed but has no definition")]
    MissingTargetDefinition { target: String },

    /// The group identifier is empty or has empty segments
    #[error("Invalid group identifier: {group:?}")]
    InvalidGroupId { group: String },

    /// A version string is not in `a.b.c.d` form
    #[error("Version does not have four segments: {version}")]
    InvalidVersion { version: String },

    /// Resource or filesystem error from wrench-fs
    #[error(transparent)]
    Fs(#[from] wrench_fs::Error),
}

impl Error {
    pub(crate) fn shape(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self::ConfigShape {
            path: path.into(),
            message: message.into(),
        }
    }

    /// True when a required resource could not be located.
    pub fn is_resource_not_found(&self) -> bool {
        matches!(self, Self::Fs(e) if e.is_resource_not_found())
    }
}
