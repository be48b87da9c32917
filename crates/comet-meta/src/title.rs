//! Title extraction and derivation.

use pulldown_cmark::{Event, HeadingLevel, Parser, Tag, TagEnd};

/// Extract the text of the first level-1 heading, falling back to the first
/// level-2 heading.
///
/// Inline markup is flattened to its text; empty headings are skipped.
///
/// ```
/// use comet_meta::first_heading;
///
/// assert_eq!(first_heading("## Intro\n\n# Guide `v2`\n").as_deref(), Some("Guide v2"));
/// assert_eq!(first_heading("Text\n\n## Only H2\n").as_deref(), Some("Only H2"));
/// assert_eq!(first_heading("No headings").as_deref(), None);
/// ```
#[must_use]
pub fn first_heading(markdown: &str) -> Option<String> {
    let mut current: Option<(HeadingLevel, String)> = None;
    let mut first_h2: Option<String> = None;

    for event in Parser::new(markdown) {
        match event {
            Event::Start(Tag::Heading { level, .. })
                if matches!(level, HeadingLevel::H1 | HeadingLevel::H2) =>
            {
                current = Some((level, String::new()));
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
                let Some((level, buf)) = current.take() else {
                    continue;
                };
                let text = buf.trim();
                if text.is_empty() {
                    continue;
                }
                if level == HeadingLevel::H1 {
                    return Some(text.to_owned());
                }
                if first_h2.is_none() {
                    first_h2 = Some(text.to_owned());
                }
            }
            _ => {}
        }
    }

    first_h2
}

/// Convert a slug (kebab-case or `snake_case`) to title case.
///
/// Replaces `-` and `_` with spaces, then capitalizes the first letter of each word.
///
/// ```
/// use comet_meta::titlecase_from_slug;
///
/// assert_eq!(titlecase_from_slug("getting-started"), "Getting Started");
/// assert_eq!(titlecase_from_slug("api_reference"), "Api Reference");
/// ```
#[must_use]
pub fn titlecase_from_slug(slug: &str) -> String {
    let mut result = String::with_capacity(slug.len());
    for word in slug.split(['-', '_', ' ']).filter(|w| !w.is_empty()) {
        if !result.is_empty() {
            result.push(' ');
        }
        let mut chars = word.chars();
        if let Some(first) = chars.next() {
            result.extend(first.to_uppercase());
            result.push_str(chars.as_str());
        }
    }
    result
}

/// Display name for a file stem or folder name with no explicit title.
///
/// With `title_case` the name is run through [`titlecase_from_slug`];
/// otherwise it is used verbatim.
#[must_use]
pub fn display_name(name: &str, title_case: bool) -> String {
    if title_case {
        let cased = titlecase_from_slug(name);
        if !cased.is_empty() {
            return cased;
        }
    }
    name.to_owned()
}
