//! Error types for Tapwire

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Result type for Tapwire operations
pub type Result<T> = std::result::Result<T, TapwireError>;

/// Errors that can occur in Tapwire
#[derive(Debug, Error)]
pub enum TapwireError {
    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Log directory could not be created
    #[error("Failed to create log directory {path}: {source}")]
    CreateDir {
        /// Directory that could not be created
        path: PathBuf,
        /// Underlying I/O error
        source: io::Error,
    },

    /// Log file could not be written
    #[error("Failed to write log file {path}: {source}")]
    WriteFile {
        /// File that could not be written
        path: PathBuf,
        /// Underlying I/O error
        source: io::Error,
    },

    /// Log entries could not be serialized or parsed
    #[error("Log serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}
