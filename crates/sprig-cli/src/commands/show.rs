use std::path::Path;

use serde::Serialize;
use sprig_core::{Configs, Note};
use sprig_view::fragment::UiState;
use sprig_view::{Handled, KeyCombo, ShowController, ViewError, ViewEvent};

use crate::error::CliError;

/// Interactions to replay after rendering, applied in field order
pub struct ShowOptions<'a> {
    pub base: &'a str,
    pub favorite: bool,
    pub tasks: &'a [String],
    pub keys: &'a [String],
}

#[derive(Debug, Serialize)]
pub struct EventItem {
    pub channel: &'static str,
    pub name: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub task: Option<u32>,
}

impl From<&ViewEvent> for EventItem {
    fn from(event: &ViewEvent) -> Self {
        let task = match event {
            ViewEvent::ToggleTask { task } => Some(*task),
            ViewEvent::Rendered | ViewEvent::Destroying => None,
        };
        Self {
            channel: event.channel(),
            name: event.name(),
            task,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct KeyOutcome {
    pub key: String,
    pub handled: Handled,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ShowReport {
    pub html: String,
    pub ui: UiState,
    pub note: Note,
    pub keys: Vec<KeyOutcome>,
    pub events: Vec<EventItem>,
    pub history: Vec<String>,
}

/// Read a note file. JSON files hold a serialized note; any other file is
/// markdown and becomes a new note titled after the file stem.
pub fn load_note(path: &Path) -> Result<Note, CliError> {
    let text = std::fs::read_to_string(path).map_err(|e| CliError::NoteFile {
        path: path.display().to_string(),
        reason: e.to_string(),
    })?;

    let is_json = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
    if is_json {
        let mut note: Note = serde_json::from_str(&text)?;
        note.refresh_task_counts();
        return Ok(note);
    }

    let title = path
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_default();
    Ok(Note::new(title, text))
}

/// Render `note`, replay the requested interactions, then close the view.
pub fn replay(
    note: Note,
    configs: Configs,
    options: &ShowOptions<'_>,
) -> Result<ShowReport, CliError> {
    let combos = options
        .keys
        .iter()
        .map(|key| key.parse::<KeyCombo>())
        .collect::<Result<Vec<_>, _>>()?;

    let mut controller = ShowController::new(note, configs, options.base);
    controller.show()?;

    if options.favorite {
        controller.favorite()?;
    }
    for task in options.tasks {
        controller.task(task)?;
    }
    let mut keys = Vec::with_capacity(combos.len());
    for combo in &combos {
        let handled = controller.key(combo)?;
        tracing::debug!("{} -> {:?}", combo, handled);
        keys.push(KeyOutcome {
            key: combo.to_string(),
            handled,
        });
    }

    let fragment = controller
        .view()
        .fragment()
        .ok_or(ViewError::NotRendered)?;
    let html = fragment.html();
    let ui = fragment.ui().clone();
    controller.close();

    Ok(ShowReport {
        html,
        ui,
        note: controller.note(),
        keys,
        events: controller.events().iter().map(EventItem::from).collect(),
        history: controller.history(),
    })
}

pub fn run_show(
    file: &Path,
    configs: Configs,
    options: &ShowOptions<'_>,
    json: bool,
    output_path: Option<&Path>,
) -> Result<(), CliError> {
    let note = load_note(file)?;
    let report = replay(note, configs, options)?;
    let rendered = if json {
        serde_json::to_string_pretty(&report)?
    } else {
        report.html
    };

    if let Some(path) = output_path {
        std::fs::write(path, rendered)?;
        println!("{}", path.display());
    } else {
        println!("{rendered}");
    }

    Ok(())
}
