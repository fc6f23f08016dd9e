use std::io;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Core(#[from] sprig_core::Error),
    #[error(transparent)]
    View(#[from] sprig_view::ViewError),
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Serialization(#[from] serde_json::Error),
    #[error("Configuration error: {0}")]
    Config(String),
    #[error("Could not read note {path}: {reason}")]
    NoteFile { path: String, reason: String },
}
