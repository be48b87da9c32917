//! Storage abstraction for the Comet documentation engine.
//!
//! This crate provides a [`Storage`] trait describing the two operations the
//! navigation resolver and document loader need from a content backend:
//! listing a directory with file/directory discrimination, and reading a file
//! as text. This enables:
//!
//! - **Unit testing** without touching the real filesystem
//! - **Backend flexibility** (filesystem today, archives or object stores later)
//! - **Clean separation** between tree-building logic and I/O
//!
//! # Architecture
//!
//! The crate provides:
//! - [`Storage`] trait with `list()`, `read()`, `exists()` and `identity()`
//! - [`StorageError`] with a semantic [`StorageErrorKind`]
//! - [`MockStorage`] for testing (behind `mock` feature flag)
//!
//! The filesystem implementation lives in `comet-storage-fs`.
//!
//! # Example
//!
//! ```ignore
//! use comet_storage::Storage;
//! use comet_storage_fs::FsStorage;
//!
//! let storage = FsStorage::new("docs".into());
//! for entry in storage.list("en")? {
//!     println!("{} ({:?})", entry.name, entry.kind);
//! }
//! ```

#[cfg(any(test, feature = "mock"))]
mod mock;
mod storage;

#[cfg(any(test, feature = "mock"))]
pub use mock::MockStorage;
pub use storage::{Entry, EntryKind, Storage, StorageError, StorageErrorKind, join_path};
