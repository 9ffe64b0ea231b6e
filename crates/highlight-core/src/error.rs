//! Error types for Highlight Studio.

use thiserror::Error;

/// Main error type for Highlight Studio operations.
#[derive(Error, Debug)]
pub enum HighlightError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    #[error("Persistence error: {0}")]
    Persistence(String),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Result type alias for Highlight Studio operations.
pub type Result<T> = std::result::Result<T, HighlightError>;
