//! Markdown to HTML conversion.

use pulldown_cmark::{CowStr, Event, Parser, Tag, html};

use crate::toc::{markdown_options, scan_headings};

/// Render Markdown to HTML.
///
/// Tables, footnotes, strikethrough and task lists are enabled. Every heading
/// carries the id listed in the table of contents.
///
/// ```
/// use comet_site::render_markdown;
///
/// let html = render_markdown("## Getting Started\n\nHello *world*.");
/// assert!(html.contains(r#"<h2 id="getting-started">Getting Started</h2>"#));
/// assert!(html.contains("<em>world</em>"));
/// ```
#[must_use]
pub fn render_markdown(markdown: &str) -> String {
    let mut ids = scan_headings(markdown).into_iter().map(|h| h.id);

    let events = Parser::new_ext(markdown, markdown_options()).map(|event| match event {
        Event::Start(Tag::Heading {
            level,
            id: _,
            classes,
            attrs,
        }) => Event::Start(Tag::Heading {
            level,
            id: ids.next().map(CowStr::from),
            classes,
            attrs,
        }),
        other => other,
    });

    let mut output = String::with_capacity(markdown.len() * 3 / 2);
    html::push_html(&mut output, events);
    output
}
