// src/error.rs
// Standardized error types for tongyeok

use thiserror::Error;

/// Main error type for the hook library
#[derive(Error, Debug)]
pub enum HookError {
    /// Stdin was not a syntactically valid JSON document. The Display text
    /// is the exact line the host reads from stderr.
    #[error("Invalid JSON: {0}")]
    InvalidJson(serde_json::Error),

    #[error("Failed to serialize hook output: {0}")]
    Serialize(serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for Result using HookError
pub type Result<T> = std::result::Result<T, HookError>;
