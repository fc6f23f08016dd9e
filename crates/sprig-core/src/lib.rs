//! sprig-core - Core library for Sprig
//!
//! This crate contains the note model, the keyboard configuration snapshot,
//! task-list handling and markdown rendering shared by the view layer and
//! the CLI.

pub mod config;
pub mod error;
pub mod markdown;
pub mod models;
pub mod tasks;
pub mod util;

pub use config::Configs;
pub use error::{Error, Result};
pub use models::{Note, NoteChange, NoteId, NoteIntent};
