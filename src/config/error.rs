use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading or saving tuning configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Configuration file does not exist.
    #[error("Config file not found: {0}")]
    NotFound(PathBuf),
    /// A line is not of the form `key = value`.
    #[error("Parse error on line {line}: {message}")]
    Syntax { line: usize, message: String },
    /// The key is not a known tuning setting.
    #[error("Unknown setting '{key}' on line {line}")]
    UnknownKey { key: String, line: usize },
    /// The same key appears twice.
    #[error("Duplicate setting '{key}' on line {line}")]
    DuplicateKey { key: String, line: usize },
    /// The value cannot be converted to the setting's type.
    #[error("Invalid value '{value}' for '{key}' on line {line}")]
    InvalidValue {
        key: String,
        value: String,
        line: usize,
    },
    /// Values parse but do not make sense together.
    #[error("Validation failed: {0}")]
    ValidationFailed(String),
    /// Path could not be expanded or is not valid UTF-8.
    #[error("Invalid path: {0}")]
    InvalidPath(String),
    /// Failed to create backup file.
    #[error("Failed to create backup: {0}")]
    BackupFailed(String),
    /// Atomic write operation failed.
    #[error("Atomic write failed: {0}")]
    WriteFailed(String),
    /// Generic I/O error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
