//! Error types for the entire application.
//!
//! We use `thiserror` for library-style errors with custom types,
//! and `anyhow` for application-level error propagation in main.rs and commands.

use thiserror::Error;

/// Errors that can occur while reading an augmented log
#[derive(Error, Debug)]
pub enum ParseError {
    #[error("Failed to read log: {0}")]
    Io(#[from] std::io::Error),

    #[error("Line {line}: expected at least {required} fields, found {found}")]
    TooFewFields {
        line: usize,
        found: usize,
        required: usize,
    },

    #[error("Line {line}: {field} zone {value:?} is not numeric")]
    InvalidZone {
        line: usize,
        field: &'static str,
        value: String,
    },

    #[error("Line {line}: invalid flag string {value:?}: {reason}")]
    InvalidFlags {
        line: usize,
        value: String,
        reason: String,
    },
}

impl ParseError {
    /// 1-based line number of the offending record, if any
    pub fn line(&self) -> Option<usize> {
        match self {
            ParseError::Io(_) => None,
            ParseError::TooFewFields { line, .. }
            | ParseError::InvalidZone { line, .. }
            | ParseError::InvalidFlags { line, .. } => Some(*line),
        }
    }
}

/// Errors that can occur while loading report configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid config: {0}")]
    Invalid(String),
}

/// Errors that can occur while building the report tables
#[derive(Error, Debug)]
pub enum ReportError {
    #[error("{table}: only {available} of {required} required stations qualify")]
    InsufficientEntries {
        table: String,
        required: usize,
        available: usize,
    },
}
