//! sprig-view - Note view for Sprig
//!
//! [`NoteView`] renders a single note into an HTML fragment, forwards user
//! intent (favorite toggle, task toggle, edit/remove navigation, scrolling)
//! to its collaborators and patches the fragment when the note changes.
//!
//! Every dependency is injected through the traits in [`collab`]; the
//! [`ShowController`] wires the in-process implementations together into a
//! single-threaded event loop.

pub mod collab;
pub mod controller;
pub mod error;
pub mod fragment;
pub mod keymap;
pub mod model;
pub mod template;
pub mod view;

pub use collab::{
    Collaborators, ConfigProvider, ContentRenderer, EventLog, MarkdownRenderer, Navigator,
    NoteModel, RouteNavigator, ViewEvent, ViewObserver,
};
pub use controller::ShowController;
pub use error::{Result, ViewError};
pub use fragment::NoteFragment;
pub use keymap::{Key, KeyCombo, Keymap, ViewAction};
pub use model::SharedNote;
pub use template::TemplateContext;
pub use view::{Handled, NoteView, ViewState, SCROLL_STEP};
