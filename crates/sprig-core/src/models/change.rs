//! Change notifications and intents exchanged between a note and its views

use serde::{Deserialize, Serialize};

/// Notification emitted by the note model after an attribute changed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "change", content = "value", rename_all = "camelCase")]
pub enum NoteChange {
    /// `isFavorite` changed to the carried value
    Favorite(bool),
    /// `taskCompleted` changed to the carried value
    TaskCompleted(u32),
    /// Note content was rewritten
    Content,
}

/// Request from a view to the note model layer.
///
/// Views never write note fields themselves; the model decides how to apply
/// an intent and reports the outcome as [`NoteChange`]s.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "intent", content = "task", rename_all = "camelCase")]
pub enum NoteIntent {
    ToggleFavorite,
    /// Flip the task with the given 1-based index
    ToggleTask(u32),
}
