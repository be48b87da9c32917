//! URL and content path helpers.

/// Document file extensions, primary first.
pub(crate) const DOC_EXTENSIONS: [&str; 2] = ["md", "mdx"];

/// Stem of index documents.
pub(crate) const INDEX_STEM: &str = "index";

/// Normalize a URL base path: leading `/`, no trailing `/`.
///
/// The root base path normalizes to the empty string.
///
/// ```
/// use comet_site::normalize_base_path;
///
/// assert_eq!(normalize_base_path("/docs/"), "/docs");
/// assert_eq!(normalize_base_path("docs"), "/docs");
/// assert_eq!(normalize_base_path("/"), "");
/// ```
#[must_use]
pub fn normalize_base_path(base_path: &str) -> String {
    let trimmed = base_path.trim().trim_matches('/');
    if trimmed.is_empty() {
        String::new()
    } else {
        format!("/{trimmed}")
    }
}

/// URL path for a location relative to the locale directory.
///
/// `base` must already be normalized. The locale root maps to the base path
/// itself, or `/` when the base path is empty.
pub(crate) fn url_path(base: &str, rel: &str) -> String {
    match (base.is_empty(), rel.is_empty()) {
        (true, true) => "/".to_owned(),
        (false, true) => base.to_owned(),
        (_, false) => format!("{base}/{rel}"),
    }
}

/// Split a file name into a document stem if it has a document extension.
///
/// Returns the stem and the extension's rank (0 = primary).
pub(crate) fn document_stem(name: &str) -> Option<(&str, usize)> {
    let (stem, ext) = name.rsplit_once('.')?;
    if stem.is_empty() {
        return None;
    }
    let rank = DOC_EXTENSIONS.iter().position(|e| *e == ext)?;
    Some((stem, rank))
}

/// True if `segment` is usable as a single content path segment.
pub(crate) fn is_valid_segment(segment: &str) -> bool {
    !segment.is_empty()
        && !segment.starts_with('.')
        && !segment.contains('/')
        && !segment.contains('\\')
}

/// Normalize a document slug: trim surrounding slashes and validate segments.
///
/// Returns `None` for slugs with empty, hidden, or traversal segments.
pub(crate) fn normalize_slug(slug: &str) -> Option<String> {
    let trimmed = slug.trim().trim_matches('/');
    if trimmed.is_empty() {
        return Some(String::new());
    }
    if trimmed.split('/').all(is_valid_segment) {
        Some(trimmed.to_owned())
    } else {
        None
    }
}

/// Compare URL paths ignoring trailing slashes.
pub(crate) fn same_path(a: &str, b: &str) -> bool {
    a.trim_end_matches('/') == b.trim_end_matches('/')
}
