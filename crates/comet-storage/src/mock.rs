//! Mock storage implementation for testing.
//!
//! Provides [`MockStorage`] for unit testing without filesystem access.

use std::collections::{BTreeMap, BTreeSet};
use std::sync::RwLock;

use crate::storage::{Entry, Storage, StorageError, StorageErrorKind};

const BACKEND: &str = "Mock";

/// Mock storage for testing.
///
/// Stores files in memory keyed by content-relative path. Directories are
/// derived from file paths; empty directories can be added explicitly.
/// Use the builder methods to configure the mock with test data.
///
/// # Example
///
/// ```ignore
/// use comet_storage::{MockStorage, Storage};
///
/// let storage = MockStorage::new()
///     .with_file("en/intro.md", "---\ntitle: Intro\n---\n")
///     .with_dir("en/empty");
///
/// let entries = storage.list("en").unwrap();
/// ```
#[derive(Debug, Default)]
pub struct MockStorage {
    files: RwLock<BTreeMap<String, String>>,
    dirs: RwLock<BTreeSet<String>>,
    unreadable: RwLock<BTreeSet<String>>,
}

impl MockStorage {
    /// Create a new empty mock storage.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a file with content. Parent directories are created implicitly.
    ///
    /// # Panics
    ///
    /// Panics if the internal lock is poisoned.
    #[must_use]
    pub fn with_file(self, path: impl Into<String>, content: impl Into<String>) -> Self {
        let path = path.into();
        self.add_parents(&path);
        self.files.write().unwrap().insert(path, content.into());
        self
    }

    /// Add an (empty) directory.
    ///
    /// # Panics
    ///
    /// Panics if the internal lock is poisoned.
    #[must_use]
    pub fn with_dir(self, path: impl Into<String>) -> Self {
        let path = path.into();
        self.add_parents(&path);
        self.dirs.write().unwrap().insert(path);
        self
    }

    /// Mark a path as unreadable: it is listed but `read` fails.
    ///
    /// # Panics
    ///
    /// Panics if the internal lock is poisoned.
    #[must_use]
    pub fn with_unreadable(self, path: impl Into<String>) -> Self {
        let path = path.into();
        self.add_parents(&path);
        self.files
            .write()
            .unwrap()
            .entry(path.clone())
            .or_default();
        self.unreadable.write().unwrap().insert(path);
        self
    }

    fn add_parents(&self, path: &str) {
        let mut dirs = self.dirs.write().unwrap();
        let mut current = path;
        while let Some((parent, _)) = current.rsplit_once('/') {
            dirs.insert(parent.to_owned());
            current = parent;
        }
        // Root always exists once anything is added
        dirs.insert(String::new());
    }

    fn is_dir(&self, path: &str) -> bool {
        self.dirs.read().unwrap().contains(path)
    }
}

/// Return the direct child name of `dir` for `path`, if `path` is below `dir`.
fn child_name<'a>(dir: &str, path: &'a str) -> Option<&'a str> {
    let rest = if dir.is_empty() {
        path
    } else {
        path.strip_prefix(dir)?.strip_prefix('/')?
    };
    if rest.is_empty() {
        return None;
    }
    Some(rest.split('/').next().unwrap_or(rest))
}

impl Storage for MockStorage {
    fn list(&self, dir: &str) -> Result<Vec<Entry>, StorageError> {
        if !self.is_dir(dir) {
            let kind = if self.files.read().unwrap().contains_key(dir) {
                StorageErrorKind::WrongKind
            } else {
                StorageErrorKind::NotFound
            };
            return Err(StorageError::new(kind)
                .with_path(dir)
                .with_backend(BACKEND));
        }

        let mut names: BTreeMap<String, Entry> = BTreeMap::new();
        for path in self.dirs.read().unwrap().iter() {
            if let Some(name) = child_name(dir, path) {
                names.insert(name.to_owned(), Entry::dir(name));
            }
        }
        for path in self.files.read().unwrap().keys() {
            if let Some(name) = child_name(dir, path) {
                names
                    .entry(name.to_owned())
                    .or_insert_with(|| Entry::file(name));
            }
        }

        Ok(names.into_values().collect())
    }

    fn read(&self, path: &str) -> Result<String, StorageError> {
        if self.unreadable.read().unwrap().contains(path) {
            return Err(StorageError::new(StorageErrorKind::PermissionDenied)
                .with_path(path)
                .with_backend(BACKEND));
        }
        self.files
            .read()
            .unwrap()
            .get(path)
            .cloned()
            .ok_or_else(|| StorageError::not_found(path).with_backend(BACKEND))
    }

    fn exists(&self, path: &str) -> bool {
        self.files.read().unwrap().contains_key(path)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_list_root_and_nested() {
        let storage = MockStorage::new()
            .with_file("en/intro.md", "# Intro")
            .with_file("en/guides/install.md", "# Install");

        assert_eq!(storage.list("").unwrap(), vec![Entry::dir("en")]);
        assert_eq!(
            storage.list("en").unwrap(),
            vec![Entry::dir("guides"), Entry::file("intro.md")]
        );
        assert_eq!(
            storage.list("en/guides").unwrap(),
            vec![Entry::file("install.md")]
        );
    }

    #[test]
    fn test_list_empty_dir() {
        let storage = MockStorage::new().with_dir("en/empty");

        assert_eq!(storage.list("en").unwrap(), vec![Entry::dir("empty")]);
        assert!(storage.list("en/empty").unwrap().is_empty());
    }

    #[test]
    fn test_list_missing_dir() {
        let storage = MockStorage::new().with_file("en/intro.md", "");

        let err = storage.list("fr").unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn test_list_file_is_wrong_kind() {
        let storage = MockStorage::new().with_file("en/intro.md", "");

        let err = storage.list("en/intro.md").unwrap_err();
        assert_eq!(err.kind, StorageErrorKind::WrongKind);
    }

    #[test]
    fn test_read_and_exists() {
        let storage = MockStorage::new().with_file("en/intro.md", "# Intro");

        assert_eq!(storage.read("en/intro.md").unwrap(), "# Intro");
        assert!(storage.exists("en/intro.md"));
        assert!(!storage.exists("en"));
        assert!(storage.read("en/other.md").unwrap_err().is_not_found());
    }

    #[test]
    fn test_unreadable_is_listed_but_fails_read() {
        let storage = MockStorage::new().with_unreadable("en/locked.md");

        assert_eq!(storage.list("en").unwrap(), vec![Entry::file("locked.md")]);
        let err = storage.read("en/locked.md").unwrap_err();
        assert_eq!(err.kind, StorageErrorKind::PermissionDenied);
    }

    #[test]
    fn test_similar_prefix_is_not_a_child() {
        let storage = MockStorage::new()
            .with_file("en/a.md", "")
            .with_file("english/b.md", "");

        assert_eq!(storage.list("en").unwrap(), vec![Entry::file("a.md")]);
    }
}
