//! Error types for method-order
//!
//! Provides unified error handling across the crate. Ordering problems are
//! not errors — they are [`Diagnostic`](crate::shared::models::Diagnostic)
//! values; this type covers the failures that stop a file from being
//! analyzed at all.

use thiserror::Error;

/// Main error type for check operations
#[derive(Debug, Error)]
pub enum CheckError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Parse error
    #[error("Parse error: {0}")]
    Parse(String),
}

impl CheckError {
    /// Create a parse error
    pub fn parse_error(msg: impl Into<String>) -> Self {
        CheckError::Parse(msg.into())
    }
}

/// Result type alias for check operations
pub type Result<T> = std::result::Result<T, CheckError>;
