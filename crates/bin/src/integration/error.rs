//! Errors raised by the command-line pipeline.

use thiserror::Error;

/// Errors that can occur while running a CLI command.
#[derive(Debug, Error)]
pub(crate) enum CliError {
    /// Encoding error
    #[error(transparent)]
    Encode(#[from] kalends::EncodeError),

    /// CSV error
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// JSON serialization error
    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Requested column is not in the CSV header
    #[error("Column '{column}' not found; available columns: {available}")]
    MissingColumn {
        /// Requested column name
        column: String,
        /// Comma-separated header names
        available: String,
    },
}
