//! Note model

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

use crate::tasks::count_tasks;
use crate::util::{progress_percent, unix_millis_now};

/// A unique identifier for a note, using UUID v7 (time-sortable)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NoteId(Uuid);

impl NoteId {
    /// Create a new unique note ID using UUID v7
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::now_v7())
    }
}

impl Default for NoteId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for NoteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for NoteId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(Uuid::parse_str(s)?))
    }
}

/// A note as seen by the view layer.
///
/// Attribute names serialize in camelCase because templates and stored
/// notes address them that way (`isFavorite`, `taskCompleted`, ...).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    /// Unique identifier
    #[serde(default)]
    pub id: NoteId,
    /// Note title
    #[serde(default)]
    pub title: String,
    /// Markdown source
    #[serde(default)]
    pub content: String,
    /// Starred by the user
    #[serde(default)]
    pub is_favorite: bool,
    /// Number of ticked tasks in `content`
    #[serde(default)]
    pub task_completed: u32,
    /// Number of tasks in `content`
    #[serde(default)]
    pub task_all: u32,
    /// Creation timestamp (Unix ms)
    #[serde(default)]
    pub created: i64,
    /// Last update timestamp (Unix ms)
    #[serde(default)]
    pub updated: i64,
    /// Owning notebook, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notebook_id: Option<String>,
}

impl Note {
    /// Create a new note; task counts are taken from the content
    #[must_use]
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        let now = unix_millis_now();
        let mut note = Self {
            id: NoteId::new(),
            title: title.into(),
            content: content.into(),
            is_favorite: false,
            task_completed: 0,
            task_all: 0,
            created: now,
            updated: now,
            notebook_id: None,
        };
        note.refresh_task_counts();
        note
    }

    /// Recompute `task_completed` and `task_all` from the content
    pub fn refresh_task_counts(&mut self) {
        let counts = count_tasks(&self.content);
        self.task_completed = counts.completed;
        self.task_all = counts.all;
    }

    /// Completed-task percentage, see [`progress_percent`]
    #[must_use]
    pub fn progress(&self) -> u32 {
        progress_percent(self.task_completed, self.task_all)
    }

    /// Whether the note contains any tasks
    #[must_use]
    pub const fn has_tasks(&self) -> bool {
        self.task_all > 0
    }
}
