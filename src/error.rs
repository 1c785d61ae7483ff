//! Error handling module for passgen
//!
//! Provides centralized error handling with proper error types using thiserror.
//! Library code returns these; the binary wraps them in `anyhow` at the edge.

use thiserror::Error;

/// Main error type for passgen
#[derive(Error, Debug)]
pub enum PassgenError {
    /// IO errors (terminal output, log files)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Validation errors (out-of-range length, bad CLI values)
    #[error("Validation error: {0}")]
    Validation(String),

    /// Clipboard write failures
    #[error("Clipboard error: {0}")]
    Clipboard(String),

    /// Logging subscriber setup errors
    #[error("Logging error: {0}")]
    Logging(String),

    /// JSON serialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for passgen operations
pub type Result<T> = std::result::Result<T, PassgenError>;

// Convenient error constructors
impl PassgenError {
    /// Create a validation error
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Create a clipboard error
    pub fn clipboard(msg: impl Into<String>) -> Self {
        Self::Clipboard(msg.into())
    }

    /// Create a logging error
    pub fn logging(msg: impl Into<String>) -> Self {
        Self::Logging(msg.into())
    }
}
