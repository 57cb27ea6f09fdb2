//! Error types for the bivarmap application.
//!
//! Absent observations are not errors: they classify to the "no data" sentinel.
//! Everything here is raised either while building a classifier or while
//! serving a request.

use thiserror::Error;

/// The main error type for bivarmap operations.
#[derive(Error, Debug)]
pub enum BivarmapError {
    /// Construction-time validation failures (empty sample, bad class count, short palette)
    #[error("Invalid input: {message}")]
    InvalidInput { message: String },

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV parsing errors
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Configuration errors
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// Invalid parameter errors
    #[error("Invalid parameter: {param} - {message}")]
    InvalidParameter { param: String, message: String },

    /// Data not found errors
    #[error("Data not found: {message}")]
    DataNotFound { message: String },

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Server errors
    #[error("Server error: {message}")]
    Server { message: String },
}

impl BivarmapError {
    /// Shorthand for an [`BivarmapError::InvalidInput`] with a formatted message
    pub fn invalid_input(message: impl Into<String>) -> Self {
        BivarmapError::InvalidInput {
            message: message.into(),
        }
    }
}

/// Convenience type alias for Results with BivarmapError
pub type Result<T> = std::result::Result<T, BivarmapError>;
