//! Filesystem storage implementation for the Comet documentation engine.
//!
//! This crate provides [`FsStorage`], a filesystem-based implementation of the
//! [`Storage`](comet_storage::Storage) trait. It handles:
//!
//! - Directory listing with file/directory discrimination (symlinks followed)
//! - UTF-8 file reads
//! - Path traversal rejection
//! - Canonical directory identities for symlink cycle detection
//!
//! # Example
//!
//! ```ignore
//! use std::path::PathBuf;
//! use comet_storage::Storage;
//! use comet_storage_fs::FsStorage;
//!
//! let storage = FsStorage::new(PathBuf::from("docs"));
//! for entry in storage.list("en")? {
//!     println!("{}", entry.name);
//! }
//! ```

use std::fs;
use std::path::{Component, Path, PathBuf};

use comet_storage::{Entry, EntryKind, Storage, StorageError, StorageErrorKind};

/// Backend identifier for error messages.
const BACKEND: &str = "Fs";

/// Filesystem storage rooted at a content directory.
///
/// All paths passed to [`Storage`] methods are relative to `source_dir`.
#[derive(Debug, Clone)]
pub struct FsStorage {
    /// Root directory for content.
    source_dir: PathBuf,
}

impl FsStorage {
    /// Create a new filesystem storage rooted at `source_dir`.
    #[must_use]
    pub fn new(source_dir: PathBuf) -> Self {
        Self { source_dir }
    }

    /// Root directory this storage reads from.
    #[must_use]
    pub fn source_dir(&self) -> &Path {
        &self.source_dir
    }

    /// Resolve a content-relative path to a filesystem path.
    ///
    /// Rejects absolute paths and any `..` component to prevent escaping the
    /// content root.
    fn resolve(&self, path: &str) -> Result<PathBuf, StorageError> {
        let rel = Path::new(path);
        let valid = rel
            .components()
            .all(|c| matches!(c, Component::Normal(_) | Component::CurDir));
        if !valid {
            return Err(StorageError::new(StorageErrorKind::InvalidPath)
                .with_path(path)
                .with_backend(BACKEND));
        }
        Ok(self.source_dir.join(rel))
    }

    fn io_error(err: std::io::Error, path: &str) -> StorageError {
        StorageError::io(err, Some(PathBuf::from(path))).with_backend(BACKEND)
    }
}

impl Storage for FsStorage {
    fn list(&self, dir: &str) -> Result<Vec<Entry>, StorageError> {
        let full_path = self.resolve(dir)?;
        let entries = fs::read_dir(&full_path).map_err(|e| Self::io_error(e, dir))?;

        let mut result = Vec::new();
        for entry in entries {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    tracing::warn!(dir = %dir, error = %e, "Failed to read directory entry, skipping");
                    continue;
                }
            };
            let name = entry.file_name().to_string_lossy().into_owned();
            let Ok(file_type) = entry.file_type() else {
                tracing::debug!(dir = %dir, name = %name, "Failed to stat entry, skipping");
                continue;
            };

            let kind = if file_type.is_dir() {
                EntryKind::Dir
            } else if file_type.is_file() {
                EntryKind::File
            } else if file_type.is_symlink() {
                // Follow the link; dangling links are skipped
                match fs::metadata(entry.path()) {
                    Ok(meta) if meta.is_dir() => EntryKind::Dir,
                    Ok(meta) if meta.is_file() => EntryKind::File,
                    _ => {
                        tracing::debug!(dir = %dir, name = %name, "Skipping dangling symlink");
                        continue;
                    }
                }
            } else {
                continue;
            };

            result.push(Entry { name, kind });
        }

        Ok(result)
    }

    fn read(&self, path: &str) -> Result<String, StorageError> {
        let full_path = self.resolve(path)?;
        fs::read_to_string(&full_path).map_err(|e| Self::io_error(e, path))
    }

    fn exists(&self, path: &str) -> bool {
        self.resolve(path).is_ok_and(|p| p.is_file())
    }

    fn identity(&self, dir: &str) -> Option<String> {
        let full_path = self.resolve(dir).ok()?;
        fs::canonicalize(full_path)
            .ok()
            .map(|p| p.to_string_lossy().into_owned())
    }
}
