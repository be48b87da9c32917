//! Navigation resolver.
//!
//! Walks one locale directory depth-first and produces the ordered
//! navigation tree. Folder titles and positions come from the section file,
//! document titles and positions from frontmatter, with the first heading and
//! the file name as fallbacks.
//!
//! # Failure semantics
//!
//! The resolver never returns an error. A missing or unreadable locale
//! directory yields an empty tree (logged at `error`). Unreadable documents,
//! invalid frontmatter and invalid section files degrade only the affected
//! node's metadata (logged at `warn`).

use std::collections::BTreeMap;

use comet_config::NavigationConfig;
use comet_meta::{
    ParsedDocument, SectionMetadata, display_name, first_heading, parse_document,
};
use comet_storage::{Entry, Storage, join_path};

use crate::nav::{NavItem, sort_siblings};
use crate::paths::{INDEX_STEM, document_stem, is_valid_segment, normalize_base_path, url_path};

/// Title of an index node without frontmatter title or heading.
const INDEX_FALLBACK_TITLE: &str = "Overview";

/// Resolver behavior switches.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResolverOptions {
    /// Per-folder metadata file name.
    pub section_file: String,
    /// Title-case names derived from files and folders.
    pub title_case: bool,
    /// Emit folders that have a section file but no documents.
    pub keep_empty_sections: bool,
}

impl Default for ResolverOptions {
    fn default() -> Self {
        Self::from(&NavigationConfig::default())
    }
}

impl From<&NavigationConfig> for ResolverOptions {
    fn from(config: &NavigationConfig) -> Self {
        Self {
            section_file: config.section_file.clone(),
            title_case: config.title_case,
            keep_empty_sections: config.keep_empty_sections,
        }
    }
}

/// Build the navigation tree for a locale.
///
/// Paths are `{base_path}/{location under the locale directory}`; the locale
/// segment never appears. Returns an empty tree when the locale directory
/// cannot be listed.
#[must_use]
pub fn build_navigation(
    storage: &dyn Storage,
    locale: &str,
    base_path: &str,
    options: &ResolverOptions,
) -> Vec<NavItem> {
    if !is_valid_segment(locale) {
        tracing::warn!(locale = %locale, "Invalid locale, navigation unavailable");
        return Vec::new();
    }

    let entries = match storage.list(locale) {
        Ok(entries) => entries,
        Err(e) => {
            tracing::error!(locale = %locale, error = %e, "Navigation unavailable");
            return Vec::new();
        }
    };

    let mut resolver = Resolver {
        storage,
        locale,
        base: normalize_base_path(base_path),
        options,
        ancestors: Vec::new(),
    };
    let root_identity = resolver.identity("");
    resolver.ancestors.push(root_identity);
    resolver.build_level("", entries)
}

struct Resolver<'a> {
    storage: &'a dyn Storage,
    locale: &'a str,
    /// Normalized base path.
    base: String,
    options: &'a ResolverOptions,
    /// Identities of the directories on the current walk.
    ancestors: Vec<String>,
}

impl Resolver<'_> {
    /// Storage path for a location relative to the locale directory.
    fn storage_path(&self, rel: &str) -> String {
        join_path(self.locale, rel)
    }

    fn identity(&self, rel: &str) -> String {
        let path = self.storage_path(rel);
        self.storage.identity(&path).unwrap_or(path)
    }

    fn walk(&mut self, rel: &str) -> Vec<NavItem> {
        match self.storage.list(&self.storage_path(rel)) {
            Ok(entries) => self.build_level(rel, entries),
            Err(e) => {
                tracing::warn!(dir = %rel, error = %e, "Failed to list directory, treating as empty");
                Vec::new()
            }
        }
    }

    /// Emit the sorted sibling list for one directory.
    fn build_level(&mut self, rel: &str, mut entries: Vec<Entry>) -> Vec<NavItem> {
        entries.retain(|e| !e.is_hidden());
        entries.sort_by(|a, b| a.name.cmp(&b.name));

        let mut items = Vec::new();

        for entry in entries.iter().filter(|e| e.is_dir()) {
            if let Some(folder) = self.folder(rel, &entry.name) {
                items.push(folder);
            }
        }

        // stem -> (extension rank, file name); the primary extension wins
        let mut documents: BTreeMap<&str, (usize, &str)> = BTreeMap::new();
        for entry in entries.iter().filter(|e| !e.is_dir()) {
            let Some((stem, rank)) = document_stem(&entry.name) else {
                continue;
            };
            let name = entry.name.as_str();
            documents
                .entry(stem)
                .and_modify(|current| {
                    if rank < current.0 {
                        tracing::debug!(dir = %rel, file = %name, "Primary extension shadows alternate");
                        *current = (rank, name);
                    }
                })
                .or_insert((rank, name));
        }
        let index = documents.remove(INDEX_STEM);

        for (stem, (_, name)) in documents {
            items.push(self.document(rel, stem, name));
        }

        if let Some((_, name)) = index {
            items.insert(0, self.index(rel, name));
        }

        sort_siblings(&mut items);
        items
    }

    fn folder(&mut self, parent: &str, name: &str) -> Option<NavItem> {
        let rel = join_path(parent, name);
        let identity = self.identity(&rel);
        if self.ancestors.contains(&identity) {
            tracing::debug!(dir = %rel, "Skipping directory cycle");
            return None;
        }

        let section = self.read_section(&rel);

        self.ancestors.push(identity);
        let children = self.walk(&rel);
        self.ancestors.pop();

        let keep = !children.is_empty() || (self.options.keep_empty_sections && section.is_some());
        if !keep {
            tracing::debug!(dir = %rel, "Omitting folder without documents");
            return None;
        }

        let section = section.unwrap_or_default();
        let title = section
            .title
            .unwrap_or_else(|| display_name(name, self.options.title_case));
        let mut item = NavItem::folder(title, url_path(&self.base, &rel), section.position, children);
        item.collapsed = section.collapsed;
        Some(item)
    }

    fn read_section(&self, rel: &str) -> Option<SectionMetadata> {
        let path = join_path(&self.storage_path(rel), &self.options.section_file);
        let content = match self.storage.read(&path) {
            Ok(content) => content,
            Err(e) if e.is_not_found() => return None,
            Err(e) => {
                tracing::warn!(path = %path, error = %e, "Failed to read section file");
                return None;
            }
        };

        match SectionMetadata::from_json(&content) {
            Ok(section) => Some(section),
            Err(e) => {
                tracing::warn!(path = %path, error = %e, "Ignoring invalid section file");
                None
            }
        }
    }

    /// Frontmatter-or-heading title and frontmatter position of a document.
    fn document_meta(&self, rel: &str, name: &str) -> (Option<String>, Option<i64>) {
        let path = join_path(&self.storage_path(rel), name);
        let content = match self.storage.read(&path) {
            Ok(content) => content,
            Err(e) => {
                tracing::warn!(path = %path, error = %e, "Failed to read document, using fallback title");
                return (None, None);
            }
        };

        let doc = parse_document(&content).unwrap_or_else(|e| {
            tracing::warn!(path = %path, error = %e, "Invalid frontmatter, using fallback title");
            ParsedDocument::without_frontmatter(&content)
        });

        let title = doc
            .frontmatter
            .title()
            .map(ToOwned::to_owned)
            .or_else(|| first_heading(&doc.body));
        (title, doc.frontmatter.position())
    }

    fn document(&self, rel: &str, stem: &str, name: &str) -> NavItem {
        let (title, position) = self.document_meta(rel, name);
        let title = title.unwrap_or_else(|| display_name(stem, self.options.title_case));
        NavItem::leaf(title, url_path(&self.base, &join_path(rel, stem)), position)
    }

    /// Node for the directory itself, backed by its index document.
    fn index(&self, rel: &str, name: &str) -> NavItem {
        let (title, position) = self.document_meta(rel, name);
        let title = title.unwrap_or_else(|| INDEX_FALLBACK_TITLE.to_owned());
        NavItem::leaf(title, url_path(&self.base, rel), position)
    }
}
