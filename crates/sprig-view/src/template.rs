//! Template data and HTML rendering for the note view

use std::borrow::Cow;

use serde::Serialize;
use sprig_core::util::{format_local_date, html_escape, progress_percent};
use sprig_core::{Note, NoteId};

use crate::fragment::UiState;

/// Data handed to the note template: the note's attributes with `content`
/// replaced by rendered HTML, plus the view-specific `notebook` and `uri`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TemplateContext {
    pub id: NoteId,
    pub title: String,
    /// Rendered HTML, or the raw content when rendering produced nothing
    pub content: String,
    pub is_favorite: bool,
    pub task_completed: u32,
    pub task_all: u32,
    pub created: i64,
    pub updated: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notebook_id: Option<String>,
    /// Notebook label; filled in only by the notebook-aware variant of the view
    pub notebook: String,
    /// Base navigation link
    pub uri: String,
    /// `content` is the unrendered source and must be escaped when shown
    #[serde(skip)]
    pub content_is_raw: bool,
}

impl TemplateContext {
    /// Merge a note with its rendered content and base link.
    ///
    /// `rendered` falls back to the note's raw content when it is `None` or
    /// empty.
    pub fn new(note: Note, rendered: Option<String>, uri: String) -> Self {
        let mut ctx = Self {
            id: note.id,
            title: note.title,
            content: String::new(),
            is_favorite: note.is_favorite,
            task_completed: note.task_completed,
            task_all: note.task_all,
            created: note.created,
            updated: note.updated,
            notebook_id: note.notebook_id,
            notebook: String::new(),
            uri,
            content_is_raw: false,
        };
        ctx.replace_content(rendered, note.content);
        ctx
    }

    /// Use `rendered` as the body, or `raw` when it is missing or empty
    pub fn replace_content(&mut self, rendered: Option<String>, raw: String) {
        match rendered.filter(|html| !html.is_empty()) {
            Some(html) => {
                self.content = html;
                self.content_is_raw = false;
            }
            None => {
                self.content = raw;
                self.content_is_raw = true;
            }
        }
    }

    /// Body markup: rendered HTML as is, raw content escaped
    pub fn body_html(&self) -> Cow<'_, str> {
        if self.content_is_raw {
            Cow::Owned(html_escape(&self.content))
        } else {
            Cow::Borrowed(&self.content)
        }
    }

    /// Creation date formatted for display
    pub fn created_date(&self) -> String {
        format_local_date(self.created)
    }

    /// Completed-task percentage
    pub fn progress(&self) -> u32 {
        progress_percent(self.task_completed, self.task_all)
    }

    fn link(&self, action: &str) -> String {
        format!("{}/notes/{}/{}", self.uri.trim_end_matches('/'), action, self.id)
    }

    /// Target of the edit button
    pub fn edit_href(&self) -> String {
        self.link("edit")
    }

    /// Target of the remove button
    pub fn remove_href(&self) -> String {
        self.link("remove")
    }
}

/// Render the note fragment.
///
/// `ui` carries the parts of the fragment that change after the first
/// render (favorite marker, scroll offset, progress and its visibility).
pub fn render_template(ctx: &TemplateContext, ui: &UiState) -> String {
    let favorite_class = if ui.favorite_active {
        "icon-favorite"
    } else {
        "icon-favorite-empty"
    };
    let progress_hidden = if ui.progress_visible { "" } else { " hidden" };

    format!(
        r#"<div class="content-notes">
    <header class="note-header">
        <h1 class="note-title">{title}</h1>
        <div class="note-actions">
            <a class="favorite" href="javascript:void(0)"><span class="{favorite_class}"></span></a>
            <a class="btn-edit" href="{edit_href}">Edit</a>
            <a class="btn-remove" href="{remove_href}">Remove</a>
        </div>
        <time class="note-created" datetime="{created}">{created_date}</time>
    </header>
    <div class="note-progress{progress_hidden}">
        <div class="progress-bar" style="width: {progress_width}"></div>
        <span class="progress-percent">{percent_label}</span>
    </div>
    <div class="ui-body" data-scroll-top="{scroll_top}">
{content}
    </div>
</div>
"#,
        title = html_escape(&ctx.title),
        edit_href = html_escape(&ctx.edit_href()),
        remove_href = html_escape(&ctx.remove_href()),
        created = ctx.created,
        created_date = html_escape(&ctx.created_date()),
        progress_width = html_escape(&ui.progress_width),
        percent_label = html_escape(&ui.percent_label),
        scroll_top = ui.scroll_top,
        content = ctx.body_html(),
    )
}
