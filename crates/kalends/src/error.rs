//! Error types for calendar encoding.

use thiserror::Error;

/// Result type for encoding operations.
pub type Result<T> = std::result::Result<T, EncodeError>;

/// Errors that can occur while encoding calendar dummies.
#[derive(Debug, Error)]
pub enum EncodeError {
    /// Input is not a valid sequence of timestamps
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Polars error
    #[error("Polars error: {0}")]
    Polars(#[from] polars::prelude::PolarsError),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl EncodeError {
    /// Build an [`EncodeError::InvalidInput`] that names the offending row.
    pub fn invalid_row(row: usize, reason: impl std::fmt::Display) -> Self {
        Self::InvalidInput(format!("row {row}: {reason}"))
    }

    /// Returns true for errors raised by the encoding contract itself.
    pub const fn is_invalid_input(&self) -> bool {
        matches!(self, Self::InvalidInput(_))
    }
}
