//! Note view
//!
//! Lifecycle: `Constructed -> Rendered -> Destroyed`. A rendered view may be
//! rendered again. Teardown announces [`ViewEvent::Destroying`] before the
//! fragment is released and runs from `Drop` as well, so the announcement
//! fires on every exit path.

use std::rc::Rc;

use serde::Serialize;
use sprig_core::{Configs, NoteChange, NoteIntent};

use crate::collab::{Collaborators, NoteModel, ViewEvent};
use crate::error::{Result, ViewError};
use crate::fragment::NoteFragment;
use crate::keymap::{KeyCombo, Keymap, ViewAction};
use crate::template::TemplateContext;

/// Distance the body scrolls per up/down key press
pub const SCROLL_STEP: u32 = 50;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum ViewState {
    Constructed,
    Rendered,
    Destroyed,
}

/// What the host should do with the triggering UI event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Handled {
    /// Handled; suppress the default browser action
    PreventDefault,
    /// Handled; let the default action run
    Continue,
    /// No handler matched
    Ignored,
}

/// View of a single note
pub struct NoteView {
    model: Rc<dyn NoteModel>,
    collab: Collaborators,
    keymap: Keymap,
    state: ViewState,
    fragment: Option<NoteFragment>,
}

impl NoteView {
    /// Create a view for `model`, binding shortcuts from the configuration
    /// snapshot (defaults when the provider has none).
    pub fn new(model: Rc<dyn NoteModel>, collab: Collaborators) -> Self {
        let configs = collab.configs.configs().unwrap_or_else(|| {
            tracing::debug!("No configuration available, using default shortcuts");
            Configs::default()
        });
        let keymap = Keymap::for_configs(&configs);
        Self {
            model,
            collab,
            keymap,
            state: ViewState::Constructed,
            fragment: None,
        }
    }

    pub const fn state(&self) -> ViewState {
        self.state
    }

    pub const fn keymap(&self) -> &Keymap {
        &self.keymap
    }

    /// The rendered fragment, if the view is currently rendered
    pub const fn fragment(&self) -> Option<&NoteFragment> {
        self.fragment.as_ref()
    }

    /// Template data for the current note
    pub fn serialize_data(&self) -> TemplateContext {
        let note = self.model.attributes();
        let rendered = self.collab.renderer.render_html(&note.content);
        let uri = self.collab.navigator.uri_link("/");
        TemplateContext::new(note, rendered, uri)
    }

    /// Render the note and announce [`ViewEvent::Rendered`]
    pub fn render(&mut self) -> Result<&NoteFragment> {
        if self.state == ViewState::Destroyed {
            return Err(ViewError::Destroyed);
        }

        let fragment = NoteFragment::new(self.serialize_data());
        self.fragment = Some(fragment);
        self.state = ViewState::Rendered;
        tracing::debug!("Note view rendered");
        self.collab.observer.notify(&ViewEvent::Rendered);

        self.fragment.as_ref().ok_or(ViewError::NotRendered)
    }

    /// Announce [`ViewEvent::Destroying`], then release the fragment.
    ///
    /// Only the first call has any effect.
    pub fn destroy(&mut self) {
        if self.state == ViewState::Destroyed {
            return;
        }
        self.collab.observer.notify(&ViewEvent::Destroying);
        self.fragment = None;
        self.state = ViewState::Destroyed;
        tracing::debug!("Note view destroyed");
    }

    fn fragment_mut(&mut self) -> Result<&mut NoteFragment> {
        match self.state {
            ViewState::Constructed => Err(ViewError::NotRendered),
            ViewState::Destroyed => Err(ViewError::Destroyed),
            ViewState::Rendered => self.fragment.as_mut().ok_or(ViewError::NotRendered),
        }
    }

    /// Click on the favorite indicator
    pub fn click_favorite(&mut self) -> Result<Handled> {
        self.fragment_mut()?;
        self.model.trigger(NoteIntent::ToggleFavorite);
        Ok(Handled::PreventDefault)
    }

    /// Click on a task checkbox whose `data-task` attribute is `data_task`
    pub fn click_task(&mut self, data_task: &str) -> Result<Handled> {
        self.fragment_mut()?;
        let task = data_task
            .trim()
            .parse::<u32>()
            .map_err(|_| ViewError::InvalidTaskId(data_task.to_string()))?;
        self.collab.observer.notify(&ViewEvent::ToggleTask { task });
        Ok(Handled::Continue)
    }

    /// Key press; dispatched through the keymap
    pub fn press_key(&mut self, combo: &KeyCombo) -> Result<Handled> {
        self.fragment_mut()?;
        match self.keymap.lookup(combo) {
            Some(action) => self.perform(action),
            None => Ok(Handled::Ignored),
        }
    }

    /// Run the handler for `action`
    pub fn perform(&mut self, action: ViewAction) -> Result<Handled> {
        match action {
            ViewAction::ScrollUp => {
                self.fragment_mut()?.scroll_by(-i64::from(SCROLL_STEP));
                Ok(Handled::PreventDefault)
            }
            ViewAction::ScrollDown => {
                self.fragment_mut()?.scroll_by(i64::from(SCROLL_STEP));
                Ok(Handled::PreventDefault)
            }
            ViewAction::EditNote => {
                let href = self.fragment_mut()?.edit_href().to_string();
                self.collab.navigator.navigate(&href);
                Ok(Handled::Continue)
            }
            ViewAction::RemoveNote => {
                let href = self.fragment_mut()?.remove_href().to_string();
                self.collab.navigator.navigate(&href);
                Ok(Handled::Continue)
            }
            ViewAction::ToggleFavorite => self.click_favorite(),
        }
    }

    /// Patch the fragment after the note changed
    pub fn handle_change(&mut self, change: &NoteChange) {
        if self.state != ViewState::Rendered {
            tracing::debug!("Ignoring {:?} on a view that is not rendered", change);
            return;
        }
        match *change {
            NoteChange::Favorite(favorite) => {
                if let Some(fragment) = self.fragment.as_mut() {
                    fragment.set_favorite(favorite);
                }
            }
            NoteChange::TaskCompleted(_) => self.refresh_progress(),
            NoteChange::Content => {
                let note = self.model.attributes();
                let rendered = self.collab.renderer.render_html(&note.content);
                if let Some(fragment) = self.fragment.as_mut() {
                    fragment.set_body(rendered, note.content);
                }
                // the task total can move without the completed count
                self.refresh_progress();
            }
        }
    }

    fn refresh_progress(&mut self) {
        let note = self.model.attributes();
        if let Some(fragment) = self.fragment.as_mut() {
            fragment.set_progress(note.progress(), note.has_tasks());
        }
    }
}

impl Drop for NoteView {
    fn drop(&mut self) {
        self.destroy();
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use super::*;
    use crate::collab::{ConfigProvider, ContentRenderer, EventLog, RouteNavigator};
    use crate::keymap::Key;
    use pretty_assertions::assert_eq;
    use sprig_core::Note;

    /// Model that records intents instead of applying them
    struct RecordingModel {
        note: RefCell<Note>,
        intents: RefCell<Vec<NoteIntent>>,
    }

    impl RecordingModel {
        fn new(note: Note) -> Rc<Self> {
            Rc::new(Self {
                note: RefCell::new(note),
                intents: RefCell::new(Vec::new()),
            })
        }
    }

    impl NoteModel for RecordingModel {
        fn attributes(&self) -> Note {
            self.note.borrow().clone()
        }

        fn trigger(&self, intent: NoteIntent) {
            self.intents.borrow_mut().push(intent);
        }
    }

    struct NoConfig;

    impl ConfigProvider for NoConfig {
        fn configs(&self) -> Option<Configs> {
            None
        }
    }

    struct EmptyRenderer;

    impl ContentRenderer for EmptyRenderer {
        fn render_html(&self, _content: &str) -> Option<String> {
            Some(String::new())
        }
    }

    struct Harness {
        model: Rc<RecordingModel>,
        events: Rc<EventLog>,
        navigator: Rc<RouteNavigator>,
        view: NoteView,
    }

    fn harness(note: Note) -> Harness {
        let model = RecordingModel::new(note);
        let events = Rc::new(EventLog::new());
        let navigator = Rc::new(RouteNavigator::default());
        let collab = Collaborators {
            configs: Rc::new(NoConfig),
            renderer: Rc::new(EmptyRenderer),
            navigator: navigator.clone(),
            observer: events.clone(),
        };
        let view = NoteView::new(model.clone(), collab);
        Harness {
            model,
            events,
            navigator,
            view,
        }
    }

    fn tasks_note() -> Note {
        Note::new("Todo", "- [x] one\n- [ ] two\n- [ ] three\n")
    }

    #[test]
    fn missing_configuration_uses_default_shortcuts() {
        let h = harness(tasks_note());
        assert_eq!(h.view.keymap(), &Keymap::for_configs(&Configs::default()));
        assert_eq!(h.view.state(), ViewState::Constructed);
    }

    #[test]
    fn render_announces_once_after_fragment_exists() {
        let mut h = harness(tasks_note());
        assert!(h.events.events().is_empty());
        let html = h.view.render().unwrap().html();
        assert!(html.contains("content-notes"));
        assert_eq!(h.events.events(), vec![ViewEvent::Rendered]);
        assert_eq!(h.view.state(), ViewState::Rendered);
    }

    #[test]
    fn empty_render_result_falls_back_to_raw_content() {
        let h = harness(tasks_note());
        let ctx = h.view.serialize_data();
        assert_eq!(ctx.content, tasks_note().content);
        assert_eq!(ctx.notebook, "");
        assert_eq!(ctx.uri, "#/");
    }

    #[test]
    fn destroy_announces_once() {
        let mut h = harness(tasks_note());
        h.view.render().unwrap();
        h.view.destroy();
        h.view.destroy();
        assert_eq!(h.events.count(&ViewEvent::Destroying), 1);
        assert!(h.view.fragment().is_none());
        assert!(matches!(h.view.render(), Err(ViewError::Destroyed)));
    }

    #[test]
    fn drop_announces_destroy() {
        let h = harness(tasks_note());
        let events = h.events.clone();
        let Harness { mut view, .. } = h;
        view.render().unwrap();
        drop(view);
        assert_eq!(
            events.events(),
            vec![ViewEvent::Rendered, ViewEvent::Destroying]
        );
    }

    #[test]
    fn handlers_require_rendered_view() {
        let mut h = harness(tasks_note());
        assert!(matches!(h.view.click_favorite(), Err(ViewError::NotRendered)));
        assert!(matches!(h.view.click_task("1"), Err(ViewError::NotRendered)));
        assert!(h.model.intents.borrow().is_empty());
    }

    #[test]
    fn favorite_click_sends_single_intent_without_mutating() {
        let mut h = harness(tasks_note());
        h.view.render().unwrap();
        assert_eq!(h.view.click_favorite().unwrap(), Handled::PreventDefault);
        assert_eq!(*h.model.intents.borrow(), vec![NoteIntent::ToggleFavorite]);
        assert!(!h.model.attributes().is_favorite);
        assert!(!h.view.fragment().unwrap().favorite_active());
    }

    #[test]
    fn task_click_announces_task_id() {
        let mut h = harness(tasks_note());
        h.view.render().unwrap();
        h.view.click_task("7").unwrap();
        assert_eq!(h.events.count(&ViewEvent::ToggleTask { task: 7 }), 1);
        assert!(matches!(
            h.view.click_task("seven"),
            Err(ViewError::InvalidTaskId(_))
        ));
    }

    #[test]
    fn arrow_keys_scroll_by_step() {
        let mut h = harness(tasks_note());
        h.view.render().unwrap();
        let down = KeyCombo::plain(Key::Down);
        let up = KeyCombo::plain(Key::Up);

        assert_eq!(h.view.press_key(&down).unwrap(), Handled::PreventDefault);
        assert_eq!(h.view.fragment().unwrap().scroll_top(), SCROLL_STEP);
        h.view.press_key(&down).unwrap();
        assert_eq!(h.view.fragment().unwrap().scroll_top(), 100);
        assert_eq!(h.view.press_key(&up).unwrap(), Handled::PreventDefault);
        assert_eq!(h.view.fragment().unwrap().scroll_top(), 50);
    }

    #[test]
    fn edit_and_remove_keys_navigate_to_button_hrefs() {
        let mut h = harness(tasks_note());
        h.view.render().unwrap();
        let edit_href = h.view.fragment().unwrap().edit_href().to_string();
        let remove_href = h.view.fragment().unwrap().remove_href().to_string();

        h.view.press_key(&"e".parse().unwrap()).unwrap();
        h.view.press_key(&"shift+3".parse().unwrap()).unwrap();
        assert_eq!(h.navigator.history(), vec![edit_href, remove_href]);
    }

    #[test]
    fn favorite_shortcut_sends_intent() {
        let mut h = harness(tasks_note());
        h.view.render().unwrap();
        assert_eq!(
            h.view.press_key(&"s".parse().unwrap()).unwrap(),
            Handled::PreventDefault
        );
        assert_eq!(*h.model.intents.borrow(), vec![NoteIntent::ToggleFavorite]);
    }

    #[test]
    fn unbound_key_is_ignored() {
        let mut h = harness(tasks_note());
        h.view.render().unwrap();
        assert_eq!(
            h.view.press_key(&"z".parse().unwrap()).unwrap(),
            Handled::Ignored
        );
    }

    #[test]
    fn favorite_change_toggles_indicator_class() {
        let mut h = harness(tasks_note());
        h.view.render().unwrap();
        h.view.handle_change(&NoteChange::Favorite(true));
        assert!(h.view.fragment().unwrap().favorite_active());
        h.view.handle_change(&NoteChange::Favorite(false));
        assert!(!h.view.fragment().unwrap().favorite_active());
    }

    #[test]
    fn task_completed_change_recomputes_progress() {
        let mut h = harness(tasks_note());
        h.view.render().unwrap();
        assert_eq!(h.view.fragment().unwrap().percent_label(), "33%");

        h.model.note.borrow_mut().task_completed = 2;
        h.view.handle_change(&NoteChange::TaskCompleted(2));
        let fragment = h.view.fragment().unwrap();
        assert_eq!(fragment.progress_width(), "66%");
        assert_eq!(fragment.percent_label(), "66%");
    }

    #[test]
    fn content_change_refreshes_body_without_announcing() {
        let mut h = harness(tasks_note());
        h.view.render().unwrap();
        h.model.note.borrow_mut().content = "rewritten".to_string();
        h.view.handle_change(&NoteChange::Content);
        assert_eq!(h.view.fragment().unwrap().context().content, "rewritten");
        assert_eq!(h.events.events(), vec![ViewEvent::Rendered]);
    }

    #[test]
    fn content_change_with_new_task_recomputes_progress() {
        let mut h = harness(tasks_note());
        h.view.render().unwrap();
        assert_eq!(h.view.fragment().unwrap().percent_label(), "33%");

        {
            let mut note = h.model.note.borrow_mut();
            note.content.push_str("- [ ] four\n");
            note.refresh_task_counts();
        }
        h.view.handle_change(&NoteChange::Content);
        let fragment = h.view.fragment().unwrap();
        assert_eq!(fragment.percent_label(), "25%");
        assert_eq!(fragment.progress_width(), "25%");
    }

    #[test]
    fn progress_block_appears_when_a_note_gains_tasks() {
        let mut h = harness(Note::new("Plain", "plain\n"));
        let html = h.view.render().unwrap().html();
        assert!(html.contains(r#"class="note-progress hidden""#));

        {
            let mut note = h.model.note.borrow_mut();
            note.content = "- [x] a\n- [ ] b\n".to_string();
            note.refresh_task_counts();
        }
        h.view.handle_change(&NoteChange::Content);
        h.view.handle_change(&NoteChange::TaskCompleted(1));
        let fragment = h.view.fragment().unwrap();
        assert_eq!(fragment.percent_label(), "50%");
        assert!(fragment.progress_visible());
        assert!(!fragment.html().contains("note-progress hidden"));
    }

    #[test]
    fn progress_block_hides_when_last_task_is_removed() {
        let mut h = harness(tasks_note());
        h.view.render().unwrap();
        {
            let mut note = h.model.note.borrow_mut();
            note.content = "no more tasks".to_string();
            note.refresh_task_counts();
        }
        h.view.handle_change(&NoteChange::Content);
        let fragment = h.view.fragment().unwrap();
        assert_eq!(fragment.percent_label(), "0%");
        assert!(!fragment.progress_visible());
    }

    #[test]
    fn changes_before_render_are_ignored() {
        let mut h = harness(tasks_note());
        h.view.handle_change(&NoteChange::Favorite(true));
        assert!(h.view.fragment().is_none());
    }
}
