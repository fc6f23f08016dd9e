//! The rendered note fragment and its mutable UI elements

use serde::Serialize;

use crate::template::{render_template, TemplateContext};

/// State of the elements the view patches after rendering
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UiState {
    /// `icon-favorite` class on the favorite indicator
    pub favorite_active: bool,
    /// Scroll offset of the body container
    pub scroll_top: u32,
    /// Width style of the progress bar, e.g. `"33%"`
    pub progress_width: String,
    /// Text of the percentage label, e.g. `"33%"`
    pub percent_label: String,
    /// Progress block shown; false while the note has no tasks
    pub progress_visible: bool,
}

impl UiState {
    /// State right after rendering `ctx`
    pub fn initial(ctx: &TemplateContext) -> Self {
        let percent = format!("{}%", ctx.progress());
        Self {
            favorite_active: ctx.is_favorite,
            scroll_top: 0,
            progress_width: percent.clone(),
            percent_label: percent,
            progress_visible: ctx.task_all > 0,
        }
    }
}

/// A rendered note: template data plus the live state of its elements
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NoteFragment {
    context: TemplateContext,
    ui: UiState,
    edit_href: String,
    remove_href: String,
}

impl NoteFragment {
    pub fn new(context: TemplateContext) -> Self {
        let ui = UiState::initial(&context);
        let edit_href = context.edit_href();
        let remove_href = context.remove_href();
        Self {
            context,
            ui,
            edit_href,
            remove_href,
        }
    }

    /// Current HTML, including every patch applied since rendering
    pub fn html(&self) -> String {
        render_template(&self.context, &self.ui)
    }

    pub const fn context(&self) -> &TemplateContext {
        &self.context
    }

    pub const fn ui(&self) -> &UiState {
        &self.ui
    }

    pub const fn favorite_active(&self) -> bool {
        self.ui.favorite_active
    }

    pub const fn scroll_top(&self) -> u32 {
        self.ui.scroll_top
    }

    pub fn progress_width(&self) -> &str {
        &self.ui.progress_width
    }

    pub fn percent_label(&self) -> &str {
        &self.ui.percent_label
    }

    pub const fn progress_visible(&self) -> bool {
        self.ui.progress_visible
    }

    /// `href` of the edit button
    pub fn edit_href(&self) -> &str {
        &self.edit_href
    }

    /// `href` of the remove button
    pub fn remove_href(&self) -> &str {
        &self.remove_href
    }

    pub(crate) fn set_favorite(&mut self, active: bool) {
        self.ui.favorite_active = active;
    }

    /// Move the body's scroll offset by `delta`, stopping at the top
    pub(crate) fn scroll_by(&mut self, delta: i64) {
        let target = i64::from(self.ui.scroll_top).saturating_add(delta).max(0);
        self.ui.scroll_top = u32::try_from(target).unwrap_or(u32::MAX);
    }

    /// Replace the body with `rendered`, or the raw source when there is none
    pub(crate) fn set_body(&mut self, rendered: Option<String>, raw: String) {
        self.context.replace_content(rendered, raw);
    }

    pub(crate) fn set_progress(&mut self, percent: u32, visible: bool) {
        self.ui.progress_width = format!("{percent}%");
        self.ui.percent_label = format!("{percent}%");
        self.ui.progress_visible = visible;
    }
}
