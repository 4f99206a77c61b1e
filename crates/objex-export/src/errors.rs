//! Error handling for objex-export
//!
//! Wraps objex-core errors with writer-specific I/O and format failures.

use thiserror::Error;

/// Result type alias using ExportError
pub type Result<T> = std::result::Result<T, ExportError>;

/// Errors surfaced by the file-format writers
#[derive(Error, Debug)]
pub enum ExportError {
    /// The core rejected the record sequence
    #[error(transparent)]
    Core(#[from] objex_core::ObjexError),

    /// JSON serialization failed
    #[error("JSON serialization failed: {0}")]
    Json(#[from] serde_json::Error),

    /// CSV writing failed
    #[error("CSV writing failed: {0}")]
    Csv(#[from] csv::Error),

    /// File I/O failed
    #[error("I/O failed: {0}")]
    Io(#[from] std::io::Error),
}
