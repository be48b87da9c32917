//! Table of contents extraction.
//!
//! Headings get slug ids, deduplicated in document order with `-1`, `-2`
//! suffixes. The renderer uses the same sequence so anchors resolve.

use std::collections::HashMap;

use pulldown_cmark::{Event, Options, Parser, Tag, TagEnd};
use serde::Serialize;

/// Table of contents entry.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct TocItem {
    pub title: String,
    /// Anchor id of the heading.
    pub id: String,
    /// Heading level (1-6).
    pub level: u8,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<TocItem>,
}

/// Nested table of contents.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct TableOfContents {
    pub items: Vec<TocItem>,
}

/// A heading in document order.
pub(crate) struct Heading {
    pub level: u8,
    pub text: String,
    pub id: String,
}

/// Markdown extensions enabled for both scanning and rendering.
pub(crate) fn markdown_options() -> Options {
    Options::ENABLE_TABLES
        | Options::ENABLE_FOOTNOTES
        | Options::ENABLE_STRIKETHROUGH
        | Options::ENABLE_TASKLISTS
}

/// Convert heading text to a URL-safe slug.
///
/// ```
/// use comet_site::slugify;
///
/// assert_eq!(slugify("Getting Started"), "getting-started");
/// assert_eq!(slugify("API: v2_beta!"), "api-v2-beta");
/// ```
#[must_use]
pub fn slugify(text: &str) -> String {
    let mut result = String::new();
    let mut last_was_dash = true; // Prevents leading dash

    for c in text.trim().chars() {
        if c.is_ascii_alphanumeric() {
            result.push(c.to_ascii_lowercase());
            last_was_dash = false;
        } else if !last_was_dash && (c.is_whitespace() || c == '-' || c == '_') {
            result.push('-');
            last_was_dash = true;
        }
    }

    if result.ends_with('-') {
        result.pop();
    }

    result
}

/// Unique id generator for one document.
#[derive(Default)]
struct HeadingIds {
    counts: HashMap<String, usize>,
}

impl HeadingIds {
    fn next(&mut self, text: &str) -> String {
        let mut base = slugify(text);
        if base.is_empty() {
            base = "section".to_owned();
        }
        let count = self.counts.entry(base.clone()).or_default();
        let id = match *count {
            0 => base,
            n => format!("{base}-{n}"),
        };
        *count += 1;
        id
    }
}

/// All headings of a document with their ids, in document order.
pub(crate) fn scan_headings(markdown: &str) -> Vec<Heading> {
    let mut ids = HeadingIds::default();
    let mut headings = Vec::new();
    let mut current: Option<(u8, String)> = None;

    for event in Parser::new_ext(markdown, markdown_options()) {
        match event {
            Event::Start(Tag::Heading { level, .. }) => {
                current = Some((level as u8, String::new()));
            }
            Event::Text(text) | Event::Code(text) => {
                if let Some((_, buf)) = current.as_mut() {
                    buf.push_str(&text);
                }
            }
            Event::SoftBreak | Event::HardBreak => {
                if let Some((_, buf)) = current.as_mut() {
                    buf.push(' ');
                }
            }
            Event::End(TagEnd::Heading(_)) => {
                if let Some((level, text)) = current.take() {
                    let text = text.trim().to_owned();
                    let id = ids.next(&text);
                    headings.push(Heading { level, text, id });
                }
            }
            _ => {}
        }
    }

    headings
}

/// Build a nested table of contents from Markdown.
///
/// The first level-1 heading is the page title and is left out. A heading
/// becomes a child of the nearest preceding heading with a smaller level.
#[must_use]
pub fn generate_table_of_contents(markdown: &str) -> TableOfContents {
    let mut items = Vec::new();
    let mut seen_title = false;

    for heading in scan_headings(markdown) {
        if heading.level == 1 && !seen_title {
            seen_title = true;
            continue;
        }
        insert(
            &mut items,
            TocItem {
                title: heading.text,
                id: heading.id,
                level: heading.level,
                children: Vec::new(),
            },
        );
    }

    TableOfContents { items }
}

fn insert(items: &mut Vec<TocItem>, item: TocItem) {
    match items.last_mut() {
        Some(last) if last.level < item.level => insert(&mut last.children, item),
        _ => items.push(item),
    }
}
