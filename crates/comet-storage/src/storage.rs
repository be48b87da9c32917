//! Storage trait and error types.
//!
//! Provides the core [`Storage`] trait for abstracting directory listing and
//! file retrieval, along with [`StorageError`] for unified error handling
//! across backends.
//!
//! # Path Convention
//!
//! All path parameters are **content-relative paths** using `/` separators:
//! - `""` - the content root
//! - `"en"` - a locale directory
//! - `"en/guides"` - a nested folder
//! - `"en/guides/install.md"` - a document file
//!
//! Backends map these to their internal storage format.

use std::path::PathBuf;

/// Kind of a directory entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EntryKind {
    /// Regular file.
    File,
    /// Directory (including symlinks that resolve to a directory).
    Dir,
}

/// Directory entry returned by [`Storage::list`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Entry {
    /// Entry name (last path segment, e.g. "install.md").
    pub name: String,
    /// File or directory.
    pub kind: EntryKind,
}

impl Entry {
    /// Create a file entry.
    #[must_use]
    pub fn file(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: EntryKind::File,
        }
    }

    /// Create a directory entry.
    #[must_use]
    pub fn dir(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: EntryKind::Dir,
        }
    }

    /// True if this entry is a directory.
    #[must_use]
    pub fn is_dir(&self) -> bool {
        self.kind == EntryKind::Dir
    }

    /// True if the entry name starts with a dot.
    #[must_use]
    pub fn is_hidden(&self) -> bool {
        self.name.starts_with('.')
    }
}

/// Semantic error categories.
#[derive(Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum StorageErrorKind {
    /// Resource does not exist.
    NotFound,
    /// Permission denied.
    PermissionDenied,
    /// Invalid path (e.g. contains `..`).
    InvalidPath,
    /// Path exists but has the wrong kind (file where a directory was expected).
    WrongKind,
    /// Other/unknown error category.
    Other,
}

/// Storage error with semantic kind and backend-specific source.
#[derive(Debug)]
pub struct StorageError {
    /// Semantic error category.
    pub kind: StorageErrorKind,
    /// Path context (if applicable).
    pub path: Option<PathBuf>,
    /// Backend identifier (e.g., "Fs", "Mock").
    pub backend: Option<&'static str>,
    source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl StorageError {
    /// Create a new storage error.
    #[must_use]
    pub fn new(kind: StorageErrorKind) -> Self {
        Self {
            kind,
            path: None,
            backend: None,
            source: None,
        }
    }

    /// Attach path context.
    #[must_use]
    pub fn with_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.path = Some(path.into());
        self
    }

    /// Attach backend identifier.
    #[must_use]
    pub fn with_backend(mut self, backend: &'static str) -> Self {
        self.backend = Some(backend);
        self
    }

    /// Attach the underlying error source.
    #[must_use]
    pub fn with_source(mut self, source: impl std::error::Error + Send + Sync + 'static) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    /// Create a not found error with path.
    #[must_use]
    pub fn not_found(path: impl Into<PathBuf>) -> Self {
        Self::new(StorageErrorKind::NotFound).with_path(path)
    }

    /// True if this error means the resource does not exist.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        self.kind == StorageErrorKind::NotFound
    }

    /// Create a storage error from an I/O error.
    #[must_use]
    pub fn io(err: std::io::Error, path: Option<PathBuf>) -> Self {
        let kind = match err.kind() {
            std::io::ErrorKind::NotFound => StorageErrorKind::NotFound,
            std::io::ErrorKind::PermissionDenied => StorageErrorKind::PermissionDenied,
            std::io::ErrorKind::NotADirectory | std::io::ErrorKind::IsADirectory => {
                StorageErrorKind::WrongKind
            }
            _ => StorageErrorKind::Other,
        };
        let mut error = Self::new(kind).with_source(err);
        if let Some(p) = path {
            error = error.with_path(p);
        }
        error
    }
}

impl std::fmt::Display for StorageError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Format: "[Backend] Kind: message (path: /foo/bar)"
        if let Some(backend) = self.backend {
            write!(f, "[{backend}] ")?;
        }

        let kind_str = match self.kind {
            StorageErrorKind::NotFound => "Not found",
            StorageErrorKind::PermissionDenied => "Permission denied",
            StorageErrorKind::InvalidPath => "Invalid path",
            StorageErrorKind::WrongKind => "Wrong entry kind",
            StorageErrorKind::Other => "Error",
        };

        write!(f, "{kind_str}")?;

        if let Some(source) = &self.source {
            write!(f, ": {source}")?;
        }

        if let Some(path) = &self.path {
            write!(f, " (path: {})", path.display())?;
        }

        Ok(())
    }
}

impl std::error::Error for StorageError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_ref()
            .map(|s| s.as_ref() as &(dyn std::error::Error + 'static))
    }
}

/// Join a content-relative directory and a child name.
///
/// ```
/// use comet_storage::join_path;
///
/// assert_eq!(join_path("", "en"), "en");
/// assert_eq!(join_path("en/guides", "install.md"), "en/guides/install.md");
/// ```
#[must_use]
pub fn join_path(dir: &str, name: &str) -> String {
    match (dir.is_empty(), name.is_empty()) {
        (true, _) => name.to_owned(),
        (false, true) => dir.to_owned(),
        (false, false) => format!("{dir}/{name}"),
    }
}

/// Content backend used by the navigation resolver and document loader.
///
/// Implementations must be cheap to call repeatedly: the navigation tree is
/// rebuilt on every request and nothing is cached above this layer.
pub trait Storage: Send + Sync {
    /// List the entries of a directory.
    ///
    /// Order is unspecified; callers sort as needed.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if the directory doesn't exist or can't be read.
    fn list(&self, dir: &str) -> Result<Vec<Entry>, StorageError>;

    /// Read a file as UTF-8 text.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if the file doesn't exist or can't be read.
    fn read(&self, path: &str) -> Result<String, StorageError>;

    /// Check whether a file exists at the given path.
    ///
    /// Returns `false` on errors and for directories.
    fn exists(&self, path: &str) -> bool;

    /// Stable identity of a directory, used to detect symlink cycles.
    ///
    /// Two paths that reach the same physical directory must return the same
    /// identity. Backends without aliasing return `None`, in which case the
    /// path itself serves as identity.
    fn identity(&self, dir: &str) -> Option<String> {
        let _ = dir;
        None
    }
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use super::*;

    #[test]
    fn test_entry_constructors() {
        let file = Entry::file("guide.md");
        let dir = Entry::dir("guides");

        assert_eq!(file.kind, EntryKind::File);
        assert!(!file.is_dir());
        assert!(dir.is_dir());
    }

    #[test]
    fn test_entry_hidden() {
        assert!(Entry::dir(".git").is_hidden());
        assert!(Entry::file(".draft.md").is_hidden());
        assert!(!Entry::file("visible.md").is_hidden());
    }

    #[test]
    fn test_join_path() {
        assert_eq!(join_path("", ""), "");
        assert_eq!(join_path("", "en"), "en");
        assert_eq!(join_path("en", ""), "en");
        assert_eq!(join_path("en", "guides"), "en/guides");
    }

    #[test]
    fn test_storage_error_new() {
        let err = StorageError::new(StorageErrorKind::NotFound);

        assert_eq!(err.kind, StorageErrorKind::NotFound);
        assert!(err.path.is_none());
        assert!(err.backend.is_none());
    }

    #[test]
    fn test_not_found_carries_path() {
        let err = StorageError::not_found("en/intro.md");

        assert!(err.is_not_found());
        assert_eq!(err.path.as_deref(), Some(Path::new("en/intro.md")));
    }

    #[test]
    fn test_io_error_maps_permission_denied() {
        let err = StorageError::io(std::io::ErrorKind::PermissionDenied.into(), None);

        assert_eq!(err.kind, StorageErrorKind::PermissionDenied);
        assert!(!err.is_not_found());
    }

    #[test]
    fn test_io_error_maps_not_found_with_path() {
        let err = StorageError::io(
            std::io::ErrorKind::NotFound.into(),
            Some(PathBuf::from("en/missing.md")),
        );

        assert!(err.is_not_found());
        assert_eq!(err.path.as_deref(), Some(Path::new("en/missing.md")));
    }

    #[test]
    fn test_display_with_context() {
        let err = StorageError::new(StorageErrorKind::WrongKind)
            .with_backend("Mock")
            .with_path("en/guides")
            .with_source(std::io::Error::other("is a directory"));

        assert_eq!(
            err.to_string(),
            "[Mock] Wrong entry kind: is a directory (path: en/guides)"
        );
    }

    #[test]
    fn test_display_kind_only() {
        let err = StorageError::new(StorageErrorKind::InvalidPath);

        assert_eq!(err.to_string(), "Invalid path");
    }

    #[test]
    fn test_error_crosses_threads() {
        let err = StorageError::not_found("en/intro.md");

        let handle = std::thread::spawn(move || err.is_not_found());

        assert!(handle.join().unwrap());
    }
}
