//! Markdown to HTML rendering for note content

use pulldown_cmark::{CowStr, Event, Options, Parser};

/// Parser options shared by rendering and task counting.
pub(crate) fn parser_options() -> Options {
    Options::ENABLE_TABLES | Options::ENABLE_STRIKETHROUGH | Options::ENABLE_TASKLISTS
}

fn checkbox_html(index: u32, done: bool) -> String {
    if done {
        format!(r#"<input type="checkbox" data-task="{index}" checked>"#)
    } else {
        format!(r#"<input type="checkbox" data-task="{index}">"#)
    }
}

/// Strip scripts, event handlers and unsafe URLs, keeping task checkboxes.
fn sanitize(html: &str) -> String {
    ammonia::Builder::default()
        .add_tags(&["input"])
        .add_tag_attributes("input", &["type", "data-task", "checked"])
        .clean(html)
        .to_string()
}

/// Render note content to sanitized HTML.
///
/// Task markers become checkboxes carrying their 1-based `data-task` index.
pub fn render_markdown(content: &str) -> String {
    let mut task = 0u32;
    let events = Parser::new_ext(content, parser_options()).map(|event| match event {
        Event::TaskListMarker(done) => {
            task += 1;
            Event::InlineHtml(CowStr::from(checkbox_html(task, done)))
        }
        other => other,
    });

    let mut html = String::with_capacity(content.len() * 3 / 2);
    pulldown_cmark::html::push_html(&mut html, events);
    sanitize(&html)
}
