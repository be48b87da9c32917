//! Frontmatter parsing from Markdown documents.
//!
//! A document may start with a YAML block delimited by `---` lines. The block
//! is parsed into an open mapping: the resolver consumes `title` and
//! `position`, everything else passes through to the document API untouched.

use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;
use serde_json::{Map, Value};

use crate::error::MetaError;
use crate::position::coerce_position;

static FRONTMATTER_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)\A---[ \t]*\r?\n(?:(.*?)\r?\n)?---[ \t]*(?:\r?\n|\z)(.*)\z").unwrap()
});

/// `key:123` lines, which YAML reads as a single string.
static MISSING_SPACE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^(\w+):(\d+)[ \t]*$").unwrap());

/// Frontmatter key/value mapping.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Frontmatter(Map<String, Value>);

impl Frontmatter {
    /// Raw value for a key.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Trimmed, non-empty `title` string.
    #[must_use]
    pub fn title(&self) -> Option<&str> {
        self.string("title")
    }

    /// `position` coerced to an integer.
    #[must_use]
    pub fn position(&self) -> Option<i64> {
        self.get("position").and_then(coerce_position)
    }

    /// Trimmed, non-empty string value for a key.
    #[must_use]
    pub fn string(&self, key: &str) -> Option<&str> {
        self.get(key)
            .and_then(Value::as_str)
            .map(str::trim)
            .filter(|s| !s.is_empty())
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn as_map(&self) -> &Map<String, Value> {
        &self.0
    }

    #[must_use]
    pub fn into_map(self) -> Map<String, Value> {
        self.0
    }
}

impl From<Map<String, Value>> for Frontmatter {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}

/// A document split into frontmatter and Markdown body.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ParsedDocument {
    pub frontmatter: Frontmatter,
    pub body: String,
}

impl ParsedDocument {
    /// Strip the frontmatter block without interpreting it.
    ///
    /// Used when [`parse_document`] fails: the body is still available for
    /// heading extraction and rendering.
    #[must_use]
    pub fn without_frontmatter(content: &str) -> Self {
        let content = strip_bom(content);
        let body = split(content).map_or(content, |(_, body)| body);
        Self {
            frontmatter: Frontmatter::default(),
            body: body.to_owned(),
        }
    }
}

/// Drop a leading UTF-8 byte order mark.
fn strip_bom(content: &str) -> &str {
    content.strip_prefix('\u{feff}').unwrap_or(content)
}

fn split(content: &str) -> Option<(&str, &str)> {
    let caps = FRONTMATTER_RE.captures(content)?;
    let yaml = caps.get(1).map_or("", |m| m.as_str());
    let body = caps.get(2).map_or("", |m| m.as_str());
    Some((yaml, body))
}

/// Parse a Markdown document with optional frontmatter.
///
/// Documents without a leading `---` block yield empty frontmatter and the
/// whole content as body. An empty block is valid and yields empty
/// frontmatter. A leading byte order mark is ignored.
///
/// # Errors
///
/// Returns [`MetaError::Yaml`] if the block is not a YAML mapping.
///
/// # Example
///
/// ```
/// use comet_meta::parse_document;
///
/// let doc = parse_document("---\ntitle: Install\nposition:2\n---\n# Setup\n").unwrap();
/// assert_eq!(doc.frontmatter.title(), Some("Install"));
/// assert_eq!(doc.frontmatter.position(), Some(2));
/// assert_eq!(doc.body, "# Setup\n");
/// ```
pub fn parse_document(content: &str) -> Result<ParsedDocument, MetaError> {
    let content = strip_bom(content);
    let Some((yaml, body)) = split(content) else {
        return Ok(ParsedDocument {
            frontmatter: Frontmatter::default(),
            body: content.to_owned(),
        });
    };

    let yaml = MISSING_SPACE_RE.replace_all(yaml, "$1: $2");
    let frontmatter = if yaml.trim().is_empty() {
        Frontmatter::default()
    } else {
        match serde_yaml::from_str::<Option<Map<String, Value>>>(&yaml)? {
            Some(map) => Frontmatter(map),
            None => Frontmatter::default(),
        }
    };

    Ok(ParsedDocument {
        frontmatter,
        body: body.to_owned(),
    })
}
