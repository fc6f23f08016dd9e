//! Markdown task lists
//!
//! Tasks are list items that start with a `[ ]` or `[x]` marker. They are
//! numbered from 1 in document order, the same numbering that
//! [`crate::markdown::render_markdown`] writes into each checkbox's
//! `data-task` attribute.

use std::ops::Range;

use pulldown_cmark::{Event, Parser};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::markdown::parser_options;

/// Completed and total task counts for a note
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskCounts {
    pub completed: u32,
    pub all: u32,
}

/// Byte range of every task marker (`[ ]`, `[x]`) with its state.
fn task_markers(content: &str) -> Vec<(Range<usize>, bool)> {
    Parser::new_ext(content, parser_options())
        .into_offset_iter()
        .filter_map(|(event, range)| match event {
            Event::TaskListMarker(done) => Some((range, done)),
            _ => None,
        })
        .collect()
}

/// Position of the character between the brackets of a task marker.
fn marker_state_offset(content: &str, range: &Range<usize>) -> Option<usize> {
    let tail = content.get(range.start..)?;
    let open = tail.find('[')?;
    Some(range.start + open + 1)
}

/// Count completed and total tasks in `content`.
pub fn count_tasks(content: &str) -> TaskCounts {
    task_markers(content)
        .into_iter()
        .fold(TaskCounts::default(), |mut counts, (_, done)| {
            counts.all += 1;
            if done {
                counts.completed += 1;
            }
            counts
        })
}

/// Flip the checkbox of task `index` (1-based), leaving every other byte of
/// `content` untouched.
pub fn toggle_task(content: &str, index: u32) -> Result<String> {
    let position = usize::try_from(index)
        .ok()
        .and_then(|i| i.checked_sub(1))
        .ok_or(Error::TaskNotFound(index))?;
    let (range, done) = task_markers(content)
        .into_iter()
        .nth(position)
        .ok_or(Error::TaskNotFound(index))?;
    let offset = marker_state_offset(content, &range).ok_or(Error::TaskNotFound(index))?;

    let replacement = if done { " " } else { "x" };
    let mut toggled = String::with_capacity(content.len());
    toggled.push_str(&content[..offset]);
    toggled.push_str(replacement);
    toggled.push_str(&content[offset + 1..]);
    Ok(toggled)
}
