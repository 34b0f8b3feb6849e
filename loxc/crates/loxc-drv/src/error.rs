//! Error handling module for the lox driver.
//!
//! Lexical problems in the scanned program are diagnostics, not errors;
//! this type covers failures of the driver itself.

use thiserror::Error;

/// Main error type for the lox driver.
#[derive(Error, Debug)]
pub enum LoxError {
    /// Error when the configuration file is missing or malformed.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Error when IO operations fail.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Error when JSON serialization fails.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Error when the command line is malformed; carries the rendered usage text.
    #[error("{0}")]
    Usage(String),

    /// Error when the logging subscriber cannot be installed.
    #[error("Failed to initialize logging: {0}")]
    Logging(String),
}

/// Result type alias using LoxError.
pub type Result<T> = std::result::Result<T, LoxError>;
