//! Shared error types for the extraction and linking stages

use std::path::{Path, PathBuf};
use thiserror::Error;

/// Main error type for asismap operations
#[derive(Debug, Error)]
pub enum AsisError {
    /// Missing or corrupt zip archive
    #[error("Archive error in {}: {message}", path.display())]
    Archive { path: PathBuf, message: String },

    /// A required file could not be located
    #[error("No {what} found under {}", path.display())]
    NotFound { what: String, path: PathBuf },

    /// Input does not satisfy the expected shape (CSV header, columns)
    #[error("Validation error: {0}")]
    Validation(String),

    /// Malformed integration flow XML
    #[error("XML error in {}: {message}", path.display())]
    Xml { path: PathBuf, message: String },

    /// IO errors
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// CSV errors
    #[error(transparent)]
    Csv(#[from] csv::Error),
}

impl AsisError {
    /// Create an archive error for the given zip path
    pub fn archive(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::Archive {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Create a not-found error describing what was searched for and where
    pub fn not_found(what: impl Into<String>, path: impl AsRef<Path>) -> Self {
        Self::NotFound {
            what: what.into(),
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    pub fn xml(path: impl AsRef<Path>, message: impl ToString) -> Self {
        Self::Xml {
            path: path.as_ref().to_path_buf(),
            message: message.to_string(),
        }
    }
}

/// Result type alias using our error type
pub type Result<T> = std::result::Result<T, AsisError>;
