//! Collaborators injected into a [`crate::NoteView`]
//!
//! Each trait stands in for one message the view used to exchange over a
//! shared bus. All collaborators are shared through `Rc` and run on the UI
//! thread only.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use serde::Serialize;
use sprig_core::markdown::render_markdown;
use sprig_core::{Configs, Note, NoteIntent};

/// Supplies the keyboard configuration snapshot
pub trait ConfigProvider {
    /// Current configuration, or `None` when none is available
    fn configs(&self) -> Option<Configs>;
}

/// Turns raw note content into HTML
pub trait ContentRenderer {
    /// Rendered HTML; `None` or an empty string means "use the raw content"
    fn render_html(&self, content: &str) -> Option<String>;
}

/// Builds links and performs navigation
pub trait Navigator {
    /// Base link for `path` within the current profile
    fn uri_link(&self, path: &str) -> String;

    /// Navigate to `url`
    fn navigate(&self, url: &str);
}

/// Read access to a note plus an intent channel for changing it
pub trait NoteModel {
    /// Snapshot of the note's attributes
    fn attributes(&self) -> Note;

    /// Ask the model layer to apply `intent`
    fn trigger(&self, intent: NoteIntent);
}

/// Receives events announced by a view
pub trait ViewObserver {
    fn notify(&self, event: &ViewEvent);
}

/// Events announced by a note view
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "event", rename_all = "camelCase")]
pub enum ViewEvent {
    /// The fragment is populated and ready
    Rendered,
    /// The view is about to release its fragment
    Destroying,
    /// The user clicked the checkbox of a task
    ToggleTask { task: u32 },
}

impl ViewEvent {
    /// Channel the event is announced on
    pub const fn channel(&self) -> &'static str {
        match self {
            Self::Rendered | Self::Destroying => "noteView",
            Self::ToggleTask { .. } => "view",
        }
    }

    /// Event name within its channel
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Rendered => "view:render",
            Self::Destroying => "view:destroy",
            Self::ToggleTask { .. } => "toggle:task",
        }
    }
}

/// Everything a view talks to besides its note
#[derive(Clone)]
pub struct Collaborators {
    pub configs: Rc<dyn ConfigProvider>,
    pub renderer: Rc<dyn ContentRenderer>,
    pub navigator: Rc<dyn Navigator>,
    pub observer: Rc<dyn ViewObserver>,
}

impl ConfigProvider for Configs {
    fn configs(&self) -> Option<Configs> {
        Some(self.clone())
    }
}

/// Renders note content as markdown
#[derive(Debug, Clone, Copy, Default)]
pub struct MarkdownRenderer;

impl ContentRenderer for MarkdownRenderer {
    fn render_html(&self, content: &str) -> Option<String> {
        if content.trim().is_empty() {
            None
        } else {
            Some(render_markdown(content))
        }
    }
}

/// Hash-route navigator that records where it was sent
#[derive(Debug, Default)]
pub struct RouteNavigator {
    base: String,
    history: RefCell<Vec<String>>,
}

impl RouteNavigator {
    /// Navigator whose links are prefixed with `base` (e.g. `/p/work`)
    pub fn new(base: impl Into<String>) -> Self {
        Self {
            base: base.into(),
            history: RefCell::new(Vec::new()),
        }
    }

    /// URLs navigated to so far, oldest first
    pub fn history(&self) -> Vec<String> {
        self.history.borrow().clone()
    }
}

impl Navigator for RouteNavigator {
    fn uri_link(&self, path: &str) -> String {
        let mut link = String::from("#");
        for segment in self
            .base
            .split('/')
            .chain(path.split('/'))
            .filter(|segment| !segment.is_empty())
        {
            link.push('/');
            link.push_str(segment);
        }
        if link == "#" || path.ends_with('/') {
            link.push('/');
        }
        link
    }

    fn navigate(&self, url: &str) {
        tracing::info!("Navigating to {}", url);
        self.history.borrow_mut().push(url.to_string());
    }
}

/// Observer that records every announced event.
///
/// Events stay in the log for reporting; [`EventLog::take_unseen`] hands out
/// each one exactly once to whoever dispatches them.
#[derive(Debug, Default)]
pub struct EventLog {
    events: RefCell<Vec<ViewEvent>>,
    seen: Cell<usize>,
}

impl EventLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// All events announced so far
    pub fn events(&self) -> Vec<ViewEvent> {
        self.events.borrow().clone()
    }

    /// Events announced since the previous call
    pub fn take_unseen(&self) -> Vec<ViewEvent> {
        let events = self.events.borrow();
        let unseen = events[self.seen.get()..].to_vec();
        self.seen.set(events.len());
        unseen
    }

    /// How many times `event` was announced
    pub fn count(&self, event: &ViewEvent) -> usize {
        self.events.borrow().iter().filter(|e| *e == event).count()
    }
}

impl ViewObserver for EventLog {
    fn notify(&self, event: &ViewEvent) {
        tracing::debug!("{} announced {}", event.channel(), event.name());
        self.events.borrow_mut().push(*event);
    }
}
