//! In-process note model with change notifications

use std::cell::RefCell;
use std::collections::VecDeque;

use sprig_core::tasks::toggle_task;
use sprig_core::util::unix_millis_now;
use sprig_core::{Note, NoteChange, NoteIntent};

use crate::collab::NoteModel;

/// A note shared between views.
///
/// Intents are applied immediately; the resulting [`NoteChange`]s queue up
/// until the host drains them with [`SharedNote::take_changes`].
#[derive(Debug)]
pub struct SharedNote {
    note: RefCell<Note>,
    changes: RefCell<VecDeque<NoteChange>>,
}

impl SharedNote {
    pub fn new(note: Note) -> Self {
        Self {
            note: RefCell::new(note),
            changes: RefCell::new(VecDeque::new()),
        }
    }

    /// Drain pending change notifications, oldest first
    pub fn take_changes(&self) -> Vec<NoteChange> {
        self.changes.borrow_mut().drain(..).collect()
    }

    /// Set the favorite flag, notifying only on an actual change
    pub fn set_favorite(&self, favorite: bool) {
        let changed = {
            let mut note = self.note.borrow_mut();
            let changed = note.is_favorite != favorite;
            note.is_favorite = favorite;
            changed
        };
        if changed {
            self.push(NoteChange::Favorite(favorite));
        }
    }

    /// Replace the content and recount its tasks
    pub fn set_content(&self, content: impl Into<String>) {
        let (before, after) = {
            let mut note = self.note.borrow_mut();
            let before = note.task_completed;
            note.content = content.into();
            note.refresh_task_counts();
            note.updated = unix_millis_now();
            (before, note.task_completed)
        };
        self.push(NoteChange::Content);
        if before != after {
            self.push(NoteChange::TaskCompleted(after));
        }
    }

    fn push(&self, change: NoteChange) {
        tracing::debug!("Note changed: {:?}", change);
        self.changes.borrow_mut().push_back(change);
    }

    fn toggle_task(&self, index: u32) {
        let toggled = toggle_task(&self.note.borrow().content, index);
        match toggled {
            Ok(content) => self.set_content(content),
            Err(e) => tracing::warn!("Ignoring task toggle: {}", e),
        }
    }
}

impl NoteModel for SharedNote {
    fn attributes(&self) -> Note {
        self.note.borrow().clone()
    }

    fn trigger(&self, intent: NoteIntent) {
        match intent {
            NoteIntent::ToggleFavorite => {
                let favorite = !self.note.borrow().is_favorite;
                self.set_favorite(favorite);
            }
            NoteIntent::ToggleTask(index) => self.toggle_task(index),
        }
    }
}
