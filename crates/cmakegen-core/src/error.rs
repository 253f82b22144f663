//! Error types for descriptor generation.

use std::path::PathBuf;
use thiserror::Error;

/// Result type for generator operations.
pub type GenResult<T> = Result<T, GenError>;

/// Errors that can occur while classifying sources or writing descriptors.
///
/// Every variant aborts the run; the generator has no partial results.
#[derive(Debug, Error)]
pub enum GenError {
    /// A directory the run depends on does not exist.
    #[error("Directory {path} doesn't exist")]
    DirectoryNotFound { path: PathBuf },

    /// Input that does not have the shape the naming conventions require.
    #[error("Precondition violated: {message}")]
    PreconditionViolation { message: String },

    /// IO error while reading sources or writing descriptors.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Error raised while walking a source tree.
    #[error("Walk error: {0}")]
    Walk(#[from] walkdir::Error),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Settings error.
    #[error("Settings error: {0}")]
    Settings(String),
}

impl GenError {
    /// Create a precondition violation.
    pub fn precondition(message: impl Into<String>) -> Self {
        Self::PreconditionViolation {
            message: message.into(),
        }
    }

    /// Create a missing-directory error.
    pub fn directory_not_found(path: impl Into<PathBuf>) -> Self {
        Self::DirectoryNotFound { path: path.into() }
    }

    /// Whether this error is a violated precondition rather than an I/O failure.
    pub fn is_precondition(&self) -> bool {
        matches!(
            self,
            Self::DirectoryNotFound { .. } | Self::PreconditionViolation { .. }
        )
    }
}
