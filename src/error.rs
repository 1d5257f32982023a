//! Error types and Result aliases for gridconsole

use std::path::PathBuf;

/// Result type alias for gridconsole operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for gridconsole
#[derive(Debug, thiserror::Error)]
pub enum Error {
    // === Widget setup errors ===
    /// Container binding is missing, ambiguous, or otherwise unusable
    #[error("Console configuration error: {reason}")]
    Configuration { reason: String },

    /// A setup argument is out of range or not a number
    #[error("Invalid argument '{name}': {reason}")]
    InvalidArgument { name: String, reason: String },

    // === Configuration file errors ===
    /// Configuration file not found
    #[error("Configuration file not found")]
    ConfigNotFound,

    /// Failed to load configuration
    #[error("Failed to load config from '{}': {reason}", path.display())]
    ConfigLoadFailed { path: PathBuf, reason: String },

    /// Failed to parse configuration
    #[error("Failed to parse {format} config: {reason}")]
    ConfigParseFailed { format: String, reason: String },

    /// Failed to serialize configuration
    #[error("Failed to serialize config as {format}: {reason}")]
    ConfigSerializationFailed { format: String, reason: String },

    /// Configuration validation failed
    #[error("Configuration validation failed for '{field}': {reason}")]
    ConfigValidationFailed { field: String, reason: String },

    // === I/O ===
    /// I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    // === Generic fallback (use sparingly) ===
    #[error("Error: {0}")]
    Other(String),
}

/// Coarse classification of an [`Error`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// No container, ambiguous container, or use before binding
    Configuration,
    /// Bad size or other argument
    InvalidArgument,
    /// Configuration file problems
    Config,
    Io,
    Other,
}

impl Error {
    /// Shorthand for a [`Error::Configuration`]
    pub fn configuration(reason: impl Into<String>) -> Self {
        Error::Configuration {
            reason: reason.into(),
        }
    }

    /// Shorthand for an [`Error::InvalidArgument`]
    pub fn invalid_argument(name: impl Into<String>, reason: impl Into<String>) -> Self {
        Error::InvalidArgument {
            name: name.into(),
            reason: reason.into(),
        }
    }

    /// Classify this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::Configuration { .. } => ErrorKind::Configuration,
            Error::InvalidArgument { .. } => ErrorKind::InvalidArgument,
            Error::ConfigNotFound
            | Error::ConfigLoadFailed { .. }
            | Error::ConfigParseFailed { .. }
            | Error::ConfigSerializationFailed { .. }
            | Error::ConfigValidationFailed { .. } => ErrorKind::Config,
            Error::Io(_) => ErrorKind::Io,
            Error::Other(_) => ErrorKind::Other,
        }
    }
}

impl From<String> for Error {
    fn from(err: String) -> Self {
        Error::Other(err)
    }
}

impl From<&str> for Error {
    fn from(err: &str) -> Self {
        Error::Other(err.to_string())
    }
}
