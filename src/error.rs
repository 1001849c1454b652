//! Error types for logkv
//!
//! Provides a unified error type for all operations.

use thiserror::Error;

/// Result type alias using LogKvError
pub type Result<T> = std::result::Result<T, LogKvError>;

/// Unified error type for logkv operations
#[derive(Debug, Error)]
pub enum LogKvError {
    // -------------------------------------------------------------------------
    // I/O Errors
    // -------------------------------------------------------------------------
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // -------------------------------------------------------------------------
    // Log Errors
    // -------------------------------------------------------------------------
    /// A log line did not decode to exactly a key and a value
    #[error("Malformed record: {0}")]
    MalformedRecord(String),

    /// Key cannot be stored because it would not decode back to itself
    #[error("Invalid key: {0}")]
    InvalidKey(String),

    // -------------------------------------------------------------------------
    // Index Errors
    // -------------------------------------------------------------------------
    /// Snapshot file is present but is not a key → offset mapping
    #[error("Invalid snapshot: {0}")]
    InvalidSnapshot(String),

    #[error("Key not found")]
    KeyNotFound,

    // -------------------------------------------------------------------------
    // Configuration Errors
    // -------------------------------------------------------------------------
    #[error("Configuration error: {0}")]
    Config(String),
}

impl LogKvError {
    /// True for the ordinary "key absent" outcome, as opposed to a failure
    pub fn is_not_found(&self) -> bool {
        matches!(self, LogKvError::KeyNotFound)
    }
}
