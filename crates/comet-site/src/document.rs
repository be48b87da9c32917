//! Document loading by slug.
//!
//! A slug maps to `{locale}/{slug}.md`, then `.mdx`, then the `index`
//! document of a directory with that name. The loaded document carries its
//! frontmatter, rendered HTML and table of contents.

use comet_meta::{ParsedDocument, display_name, first_heading, parse_document};
use comet_storage::{Storage, StorageErrorKind, join_path};
use serde::Serialize;
use serde_json::{Map, Value};

use crate::paths::{DOC_EXTENSIONS, INDEX_STEM, is_valid_segment, normalize_slug};
use crate::render::render_markdown;
use crate::site::SiteError;
use crate::toc::{TableOfContents, generate_table_of_contents};

/// Frontmatter keys with a typed field in [`DocMetadata`].
const TYPED_KEYS: [&str; 7] = [
    "title",
    "description",
    "slug",
    "locale",
    "path",
    "date",
    "author",
];

/// Document metadata: computed fields plus frontmatter pass-through.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct DocMetadata {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Normalized slug (no leading or trailing `/`).
    pub slug: String,
    pub locale: String,
    /// Source file path relative to the content root.
    pub path: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    /// Remaining frontmatter keys.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A loaded document.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Doc {
    pub metadata: DocMetadata,
    /// Markdown body without frontmatter.
    pub content: String,
    pub html: String,
    pub toc: TableOfContents,
}

/// Candidate source files for a slug, in lookup order.
fn candidates(locale: &str, slug: &str) -> Vec<String> {
    let base = join_path(locale, slug);
    let direct = DOC_EXTENSIONS
        .iter()
        .filter(|_| !slug.is_empty())
        .map(|ext| format!("{base}.{ext}"));
    let index = DOC_EXTENSIONS
        .iter()
        .map(|ext| join_path(&base, &format!("{INDEX_STEM}.{ext}")));
    direct.chain(index).collect()
}

/// Load a document by locale and slug.
///
/// Returns `Ok(None)` when no candidate file exists or the slug is invalid
/// (empty, hidden or `..` segments). Invalid frontmatter degrades to empty
/// metadata.
///
/// # Errors
///
/// Returns [`SiteError::Storage`] when a candidate exists but cannot be read.
pub fn load_document(
    storage: &dyn Storage,
    locale: &str,
    slug: &str,
    title_case: bool,
) -> Result<Option<Doc>, SiteError> {
    if !is_valid_segment(locale) {
        return Ok(None);
    }
    let Some(slug) = normalize_slug(slug) else {
        tracing::debug!(slug = %slug, "Rejecting invalid slug");
        return Ok(None);
    };

    for path in candidates(locale, &slug) {
        match storage.read(&path) {
            Ok(content) => {
                return Ok(Some(build_doc(&content, locale, slug, path, title_case)));
            }
            Err(e) if matches!(e.kind, StorageErrorKind::NotFound | StorageErrorKind::WrongKind) => {}
            Err(e) => return Err(e.into()),
        }
    }

    Ok(None)
}

fn build_doc(content: &str, locale: &str, slug: String, path: String, title_case: bool) -> Doc {
    let ParsedDocument { frontmatter, body } = parse_document(content).unwrap_or_else(|e| {
        tracing::warn!(path = %path, error = %e, "Invalid frontmatter, ignoring metadata");
        ParsedDocument::without_frontmatter(content)
    });

    let title = frontmatter
        .title()
        .map(ToOwned::to_owned)
        .or_else(|| first_heading(&body))
        .unwrap_or_else(|| match slug.rsplit('/').next() {
            Some(stem) if !stem.is_empty() => display_name(stem, title_case),
            _ => "Overview".to_owned(),
        });
    let description = frontmatter.string("description").map(ToOwned::to_owned);
    let date = frontmatter.string("date").map(ToOwned::to_owned);
    let author = frontmatter.string("author").map(ToOwned::to_owned);

    let mut extra = frontmatter.into_map();
    for key in TYPED_KEYS {
        extra.remove(key);
    }

    Doc {
        metadata: DocMetadata {
            title,
            description,
            slug,
            locale: locale.to_owned(),
            path,
            date,
            author,
            extra,
        },
        html: render_markdown(&body),
        toc: generate_table_of_contents(&body),
        content: body,
    }
}

#[cfg(test)]
mod tests {
    use comet_storage::MockStorage;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;

    fn load(storage: &MockStorage, slug: &str) -> Option<Doc> {
        load_document(storage, "en", slug, false).unwrap()
    }

    #[test]
    fn test_candidates_order() {
        assert_eq!(
            candidates("en", "guides/setup"),
            vec![
                "en/guides/setup.md",
                "en/guides/setup.mdx",
                "en/guides/setup/index.md",
                "en/guides/setup/index.mdx",
            ]
        );
        assert_eq!(candidates("en", ""), vec!["en/index.md", "en/index.mdx"]);
    }

    #[test]
    fn test_load_with_frontmatter() {
        let storage = MockStorage::new().with_file(
            "en/guides/setup.md",
            "---\ntitle: Setup\ndescription: How to install\nauthor: Ada\ntags: [cli]\n---\n# Setup\n\n## Linux\n",
        );

        let doc = load(&storage, "/guides/setup/").unwrap();

        assert_eq!(doc.metadata.title, "Setup");
        assert_eq!(doc.metadata.description.as_deref(), Some("How to install"));
        assert_eq!(doc.metadata.author.as_deref(), Some("Ada"));
        assert_eq!(doc.metadata.slug, "guides/setup");
        assert_eq!(doc.metadata.locale, "en");
        assert_eq!(doc.metadata.path, "en/guides/setup.md");
        assert_eq!(doc.metadata.extra.get("tags"), Some(&json!(["cli"])));
        assert_eq!(doc.content, "# Setup\n\n## Linux\n");
        assert!(doc.html.contains(r#"<h2 id="linux">Linux</h2>"#));
        assert_eq!(doc.toc.items[0].id, "linux");
    }

    #[test]
    fn test_alternate_extension_fallback() {
        let storage = MockStorage::new().with_file("en/page.mdx", "# From MDX");

        let doc = load(&storage, "page").unwrap();

        assert_eq!(doc.metadata.path, "en/page.mdx");
        assert_eq!(doc.metadata.title, "From MDX");
    }

    #[test]
    fn test_primary_extension_preferred() {
        let storage = MockStorage::new()
            .with_file("en/page.md", "# MD")
            .with_file("en/page.mdx", "# MDX");

        assert_eq!(load(&storage, "page").unwrap().metadata.title, "MD");
    }

    #[test]
    fn test_directory_index() {
        let storage = MockStorage::new().with_file("en/guides/index.md", "Welcome");

        let doc = load(&storage, "guides").unwrap();

        assert_eq!(doc.metadata.path, "en/guides/index.md");
        assert_eq!(doc.metadata.title, "guides");
    }

    #[test]
    fn test_root_index() {
        let storage = MockStorage::new().with_file("en/index.md", "Welcome");

        let doc = load(&storage, "").unwrap();

        assert_eq!(doc.metadata.slug, "");
        assert_eq!(doc.metadata.title, "Overview");
    }

    #[test]
    fn test_missing_document() {
        let storage = MockStorage::new().with_file("en/intro.md", "");

        assert!(load(&storage, "outro").is_none());
        assert!(load_document(&storage, "fr", "intro", false).unwrap().is_none());
    }

    #[test]
    fn test_traversal_rejected() {
        let storage = MockStorage::new().with_file("secret.md", "top secret");

        assert!(load(&storage, "../secret").is_none());
        assert!(load_document(&storage, "..", "secret", false).unwrap().is_none());
    }

    #[test]
    fn test_unreadable_is_error() {
        let storage = MockStorage::new().with_unreadable("en/locked.md");

        let result = load_document(&storage, "en", "locked", false);

        assert!(matches!(result, Err(SiteError::Storage(_))));
    }

    #[test]
    fn test_invalid_frontmatter_degrades() {
        let storage =
            MockStorage::new().with_file("en/bad.md", "---\ntitle: [oops\n---\n# Heading\n");

        let doc = load(&storage, "bad").unwrap();

        assert_eq!(doc.metadata.title, "Heading");
        assert!(doc.metadata.extra.is_empty());
        assert_eq!(doc.content, "# Heading\n");
    }

    #[test]
    fn test_title_from_slug_with_title_case() {
        let storage = MockStorage::new().with_file("en/getting-started.md", "Plain text");

        let doc = load_document(&storage, "en", "getting-started", true)
            .unwrap()
            .unwrap();

        assert_eq!(doc.metadata.title, "Getting Started");
    }

    #[test]
    fn test_metadata_serializes_flat() {
        let storage = MockStorage::new()
            .with_file("en/intro.md", "---\ntitle: Intro\nsidebar: false\n---\nHi\n");

        let json = serde_json::to_value(load(&storage, "intro").unwrap().metadata).unwrap();

        assert_eq!(
            json,
            json!({
                "title": "Intro",
                "slug": "intro",
                "locale": "en",
                "path": "en/intro.md",
                "sidebar": false
            })
        );
    }
}
