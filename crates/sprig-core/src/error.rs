//! Error types for sprig-core

use thiserror::Error;

/// Result type alias using sprig-core's Error
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in sprig-core operations
#[derive(Error, Debug)]
pub enum Error {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Keyboard shortcut that could not be parsed
    #[error("Invalid shortcut: {0:?}")]
    InvalidShortcut(String),

    /// Task index not present in the note content
    #[error("Task not found: {0}")]
    TaskNotFound(u32),
}
