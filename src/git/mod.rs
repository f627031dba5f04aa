//! git
//!
//! Single interface for all repository reads.
//!
//! # Architecture
//!
//! This module is the **ONLY doorway** to the on-disk repository. All
//! `.git` internals — the loose object store and the `refs/heads` tree —
//! are parsed here and nowhere else. Everything is read-only; topolog
//! never writes to a repository.
//!
//! # Responsibilities
//!
//! - Repository discovery (upward walk to the `.git` marker directory)
//! - Loose object reads (zlib inflation, UTF-8 decoding)
//! - Branch ref enumeration
//!
//! # Error Handling
//!
//! Failures are categorized into typed variants:
//! - [`GitError::NotARepository`]: no `.git` directory above the start path
//! - [`GitError::ObjectNotFound`]: a referenced hash has no stored object
//! - [`GitError::CorruptObject`]: an object fails to inflate or decode
//! - [`GitError::InvalidRef`]: a ref file does not hold a commit hash
//!
//! All are fatal; none resolve by retrying.

use std::path::PathBuf;

use thiserror::Error;

use crate::core::types::Oid;

mod discover;
mod odb;
mod refs;

pub use discover::discover_git_dir;
pub use odb::ObjectDatabase;
pub use refs::list_branches;

/// Errors from repository access.
#[derive(Debug, Error)]
pub enum GitError {
    /// No `.git` directory found walking upward from the start path.
    #[error("not a git repository (or any parent up to filesystem root): {path}")]
    NotARepository {
        /// The path the search started from
        path: PathBuf,
    },

    /// A referenced hash has no object in the store.
    #[error("object not found: {oid}")]
    ObjectNotFound {
        /// The missing oid
        oid: Oid,
    },

    /// An object exists but its payload cannot be decoded.
    #[error("corrupt object {oid}: {message}")]
    CorruptObject {
        /// The offending oid
        oid: Oid,
        /// What failed while decoding
        message: String,
    },

    /// A ref file does not contain a commit hash.
    #[error("invalid ref {path}: {message}")]
    InvalidRef {
        /// Path of the ref file
        path: PathBuf,
        /// What was wrong with its contents
        message: String,
    },

    /// Filesystem error outside the categories above.
    #[error("repository access error at {path}: {source}")]
    Io {
        /// Path being read when the error occurred
        path: PathBuf,
        /// The underlying I/O error
        #[source]
        source: std::io::Error,
    },
}
