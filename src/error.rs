use std::path::PathBuf;

use thiserror::Error;

/// Convenient alias for fallible results returned throughout the crate.
pub type Result<T> = std::result::Result<T, ResumeError>;

/// Error type covering the different failure cases that can occur when the
/// editor core loads, reconciles, or persists résumé data.
#[derive(Debug, Error)]
pub enum ResumeError {
    /// Wrapper for IO failures such as reading or writing the backing file.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Raised when serializing the canonical résumé fails.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Raised when imported bytes do not parse as a structured document.
    /// The session leaves its state untouched when this is returned.
    #[error("malformed document: {0}")]
    MalformedDocument(String),

    /// Raised when the user provides a path that does not exist.
    #[error("input file not found: {0}")]
    MissingInput(PathBuf),

    /// Raised when the tracing subscriber fails to initialise.
    #[error("failed to initialise logging: {0}")]
    Logging(String),
}
