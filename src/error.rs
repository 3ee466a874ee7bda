//! Crate-level error type
//!
//! Wraps the subsystem errors so callers can tell a rejected record
//! (client error) from everything else (internal error).

use thiserror::Error;

use crate::schema::{SchemaError, ValidationError};

/// Result type for fieldcheck operations
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    // ==================
    // Client Errors (4xx)
    // ==================
    /// Record violates its schema
    #[error(transparent)]
    Validation(#[from] ValidationError),

    // ==================
    // Schema Errors
    // ==================
    #[error(transparent)]
    Schema(#[from] SchemaError),

    // ==================
    // Server Errors (5xx)
    // ==================
    /// Configuration file unreadable or invalid
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Stable error code
    pub fn code(&self) -> &'static str {
        match self {
            Error::Validation(err) => err.code().code(),
            Error::Schema(err) => err.code().code(),
            Error::Config(_) => "FIELDCHECK_CONFIG_ERROR",
            Error::Io(_) => "FIELDCHECK_IO_ERROR",
            Error::Json(_) => "FIELDCHECK_INVALID_JSON",
        }
    }

    /// HTTP-equivalent status code
    pub fn status_code(&self) -> u16 {
        match self {
            Error::Validation(err) => err.status_code(),
            Error::Schema(err) => err.severity().status_code(),
            Error::Json(_) => 400,
            Error::Config(_) | Error::Io(_) => 500,
        }
    }

    /// True when the input, not the system, is at fault
    pub fn is_client_error(&self) -> bool {
        (400..500).contains(&self.status_code())
    }
}
