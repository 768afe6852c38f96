//! Error handling module for the lox CLI.
//!
//! This module provides custom error types using `thiserror` for structured
//! error handling throughout the application.

use thiserror::Error;

/// Main error type for the lox CLI application.
#[derive(Error, Debug)]
pub enum LoxError {
    /// Error when the configuration cannot be loaded.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Wrong command-line usage.
    #[error("Usage: lox [script]")]
    Usage,

    /// Error when IO operations fail.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Error when JSON serialization fails.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A script contained lexical errors; they have already been reported.
    #[error("scan failed with {0} error(s)")]
    Scan(usize),
}

impl LoxError {
    /// Process exit status for this error, following `sysexits.h`.
    pub fn exit_code(&self) -> u8 {
        match self {
            LoxError::Usage => 64,
            LoxError::Scan(_) => 65,
            LoxError::Io(_) => 74,
            LoxError::Config(_) => 78,
            LoxError::Json(_) => 70,
        }
    }
}

/// Result type alias using LoxError.
pub type Result<T> = std::result::Result<T, LoxError>;
