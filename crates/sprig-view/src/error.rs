//! Error types for sprig-view

use thiserror::Error;

/// Result type alias using sprig-view's error
pub type Result<T> = std::result::Result<T, ViewError>;

/// Errors raised when a view is driven out of order or fed bad input
#[derive(Debug, Error)]
pub enum ViewError {
    #[error(transparent)]
    Core(#[from] sprig_core::Error),
    #[error("View has not been rendered yet")]
    NotRendered,
    #[error("View has already been destroyed")]
    Destroyed,
    #[error("Invalid task id in data-task attribute: {0:?}")]
    InvalidTaskId(String),
}
