//! Data models for Sprig

mod change;
mod note;

pub use change::{NoteChange, NoteIntent};
pub use note::{Note, NoteId};
