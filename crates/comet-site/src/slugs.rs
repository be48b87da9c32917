//! Slug enumeration for static path generation.

use std::collections::BTreeSet;

use comet_storage::{Storage, join_path};

use crate::paths::{INDEX_STEM, document_stem, is_valid_segment};

/// List every document slug under a locale, sorted.
///
/// `index` documents map to their directory's slug (the root index to `""`).
/// Hidden entries are skipped and directory cycles are not followed. A
/// missing locale yields an empty list.
#[must_use]
pub fn list_slugs(storage: &dyn Storage, locale: &str) -> Vec<String> {
    if !is_valid_segment(locale) {
        return Vec::new();
    }

    let mut slugs = BTreeSet::new();
    let mut ancestors = Vec::new();
    collect(storage, locale, "", &mut ancestors, &mut slugs);
    slugs.into_iter().collect()
}

fn collect(
    storage: &dyn Storage,
    locale: &str,
    rel: &str,
    ancestors: &mut Vec<String>,
    slugs: &mut BTreeSet<String>,
) {
    let dir = join_path(locale, rel);
    let identity = storage.identity(&dir).unwrap_or_else(|| dir.clone());
    if ancestors.contains(&identity) {
        tracing::debug!(dir = %rel, "Skipping directory cycle");
        return;
    }

    let entries = match storage.list(&dir) {
        Ok(entries) => entries,
        Err(e) => {
            tracing::warn!(dir = %dir, error = %e, "Failed to list directory");
            return;
        }
    };

    ancestors.push(identity);
    for entry in entries.iter().filter(|e| !e.is_hidden()) {
        if entry.is_dir() {
            collect(storage, locale, &join_path(rel, &entry.name), ancestors, slugs);
        } else if let Some((stem, _)) = document_stem(&entry.name) {
            let slug = if stem == INDEX_STEM {
                rel.to_owned()
            } else {
                join_path(rel, stem)
            };
            slugs.insert(slug);
        }
    }
    ancestors.pop();
}

#[cfg(test)]
mod tests {
    use comet_storage::MockStorage;
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_list_slugs() {
        let storage = MockStorage::new()
            .with_file("en/index.md", "")
            .with_file("en/intro.md", "")
            .with_file("en/guides/index.mdx", "")
            .with_file("en/guides/setup.md", "")
            .with_file("en/guides/setup.mdx", "")
            .with_file("en/guides/section.json", "{}")
            .with_file("en/.hidden/secret.md", "")
            .with_file("fr/intro.md", "");

        assert_eq!(
            list_slugs(&storage, "en"),
            vec!["", "guides", "guides/setup", "intro"]
        );
    }

    #[test]
    fn test_missing_locale() {
        let storage = MockStorage::new().with_file("en/intro.md", "");

        assert!(list_slugs(&storage, "de").is_empty());
        assert!(list_slugs(&storage, "../en").is_empty());
    }
}
