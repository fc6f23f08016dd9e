//! Hosts one note view on a single-threaded event loop

use std::rc::Rc;

use sprig_core::{Configs, Note, NoteIntent};

use crate::collab::{
    Collaborators, EventLog, MarkdownRenderer, NoteModel, RouteNavigator, ViewEvent,
};
use crate::error::Result;
use crate::keymap::KeyCombo;
use crate::model::SharedNote;
use crate::view::{Handled, NoteView};

/// Shows a single note.
///
/// Every interaction is forwarded to the view and then pumped: task toggles
/// announced by the view reach the model, and the model's change
/// notifications reach the view, until both sides are quiet.
pub struct ShowController {
    note: Rc<SharedNote>,
    events: Rc<EventLog>,
    navigator: Rc<RouteNavigator>,
    view: NoteView,
}

impl ShowController {
    /// Wire `note` to a markdown-rendering view whose links start at `base`
    pub fn new(note: Note, configs: Configs, base: &str) -> Self {
        let note = Rc::new(SharedNote::new(note));
        let events = Rc::new(EventLog::new());
        let navigator = Rc::new(RouteNavigator::new(base));
        let collab = Collaborators {
            configs: Rc::new(configs),
            renderer: Rc::new(MarkdownRenderer),
            navigator: navigator.clone(),
            observer: events.clone(),
        };
        let view = NoteView::new(note.clone(), collab);
        Self {
            note,
            events,
            navigator,
            view,
        }
    }

    /// Render the note
    pub fn show(&mut self) -> Result<()> {
        self.view.render()?;
        self.pump();
        Ok(())
    }

    /// Click the favorite indicator
    pub fn favorite(&mut self) -> Result<Handled> {
        let handled = self.view.click_favorite()?;
        self.pump();
        Ok(handled)
    }

    /// Click the checkbox carrying `data_task`
    pub fn task(&mut self, data_task: &str) -> Result<Handled> {
        let handled = self.view.click_task(data_task)?;
        self.pump();
        Ok(handled)
    }

    /// Press a key combination
    pub fn key(&mut self, combo: &KeyCombo) -> Result<Handled> {
        let handled = self.view.press_key(combo)?;
        self.pump();
        Ok(handled)
    }

    /// Deliver pending view events to the model and model changes to the
    /// view until neither side has anything left.
    pub fn pump(&mut self) {
        loop {
            let events = self.events.take_unseen();
            for event in &events {
                if let ViewEvent::ToggleTask { task } = *event {
                    self.note.trigger(NoteIntent::ToggleTask(task));
                }
            }

            let changes = self.note.take_changes();
            for change in &changes {
                self.view.handle_change(change);
            }

            if events.is_empty() && changes.is_empty() {
                break;
            }
        }
    }

    /// Tear the view down
    pub fn close(&mut self) {
        self.view.destroy();
        self.pump();
    }

    /// Current note attributes
    pub fn note(&self) -> Note {
        self.note.attributes()
    }

    pub const fn view(&self) -> &NoteView {
        &self.view
    }

    /// Every event the view announced, in order
    pub fn events(&self) -> Vec<ViewEvent> {
        self.events.events()
    }

    /// URLs the view navigated to
    pub fn history(&self) -> Vec<String> {
        self.navigator.history()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keymap::Key;
    use pretty_assertions::assert_eq;

    fn controller() -> ShowController {
        let note = Note::new("Trip", "Pack:\n\n- [ ] passport\n- [ ] charger\n- [x] socks\n");
        ShowController::new(note, Configs::default(), "")
    }

    #[test]
    fn task_click_updates_note_and_progress() {
        let mut controller = controller();
        controller.show().unwrap();
        assert_eq!(controller.view().fragment().unwrap().percent_label(), "33%");

        controller.task("1").unwrap();
        let note = controller.note();
        assert!(note.content.contains("- [x] passport"));
        assert_eq!(note.task_completed, 2);
        let fragment = controller.view().fragment().unwrap();
        assert_eq!(fragment.percent_label(), "66%");
        assert!(fragment.html().contains(r#"data-task="1" checked"#));
    }

    #[test]
    fn edited_content_keeps_progress_in_step() {
        let mut controller = controller();
        controller.show().unwrap();

        let content = format!("{}- [ ] adapter\n", controller.note().content);
        controller.note.set_content(content);
        controller.pump();
        let note = controller.note();
        assert_eq!((note.task_completed, note.task_all), (1, 4));
        assert_eq!(controller.view().fragment().unwrap().percent_label(), "25%");

        controller.note.set_content("Nothing left to pack");
        controller.pump();
        let fragment = controller.view().fragment().unwrap();
        assert_eq!(fragment.percent_label(), "0%");
        assert!(!fragment.progress_visible());
    }

    #[test]
    fn favorite_round_trip_through_model() {
        let mut controller = controller();
        controller.show().unwrap();
        controller.favorite().unwrap();
        assert!(controller.note().is_favorite);
        assert!(controller.view().fragment().unwrap().favorite_active());

        controller.key(&"s".parse().unwrap()).unwrap();
        assert!(!controller.note().is_favorite);
        assert!(!controller.view().fragment().unwrap().favorite_active());
    }

    #[test]
    fn close_announces_destroy_after_render() {
        let mut controller = controller();
        controller.show().unwrap();
        controller.key(&KeyCombo::plain(Key::Down)).unwrap();
        controller.close();
        assert_eq!(
            controller.events(),
            vec![ViewEvent::Rendered, ViewEvent::Destroying]
        );
    }

    #[test]
    fn edit_shortcut_records_navigation() {
        let mut controller =
            ShowController::new(Note::new("N", "body"), Configs::default(), "/p/work");
        controller.show().unwrap();
        controller.key(&"e".parse().unwrap()).unwrap();
        let id = controller.note().id;
        assert_eq!(controller.history(), vec![format!("#/p/work/notes/edit/{id}")]);
    }
}
