//! Error types for the week engine.

use thiserror::Error;

/// Malformed date or time input.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("Invalid calendar date: '{0}' (expected YYYY-MM-DD)")]
    InvalidDate(String),

    #[error("Invalid time: '{0}' (expected hh:mm am/pm or HH:MM)")]
    InvalidTime(String),
}

/// Failure talking to the growth sessions server.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FetchError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Server error {status}: {message}")]
    Status { status: u16, message: String },

    #[error("Failed to parse response: {0}")]
    Decode(String),
}

/// Invalid week view configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid configuration JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Narrow breakpoint must be a positive width, got {0}")]
    InvalidBreakpoint(f64),

    #[error("Date query parameter name cannot be empty")]
    EmptyParameterName,
}
