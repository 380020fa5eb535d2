//! Error types for wrench-fs

use std::path::PathBuf;

/// Result type for wrench-fs operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in wrench-fs operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Resource not found: {path}")]
    ResourceNotFound { path: String },

    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse properties at {path}, line {line}: {message}")]
    PropertiesParse {
        path: String,
        line: usize,
        message: String,
    },

    #[error("Resource too large: {path} is {size} bytes (max {max})")]
    ResourceTooLarge { path: String, size: u64, max: u64 },

    #[error("Unsupported output format: {name}")]
    UnsupportedFormat { name: String },

    #[error("Failed to render {format}: {message}")]
    Render { format: String, message: String },

    #[error("Lock acquisition failed for {path}")]
    LockFailed { path: PathBuf },
}

impl Error {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub fn not_found(path: impl Into<String>) -> Self {
        Self::ResourceNotFound { path: path.into() }
    }

    /// True for the error a missing resource produces.
    pub fn is_resource_not_found(&self) -> bool {
        matches!(self, Self::ResourceNotFound { .. })
    }
}
