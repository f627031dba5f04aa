//! git::odb
//!
//! Loose object database reader.
//!
//! Objects live at `<git_dir>/objects/<first-2-hex>/<rest>`, zlib-deflated.
//! Only individual loose objects are supported; packfiles are out of scope.

use std::io::Read;
use std::path::{Path, PathBuf};

use flate2::read::ZlibDecoder;

use super::GitError;
use crate::core::graph::CommitSource;
use crate::core::types::Oid;

/// Read access to a repository's loose object store.
#[derive(Debug, Clone)]
pub struct ObjectDatabase {
    objects_dir: PathBuf,
}

impl ObjectDatabase {
    /// Open the object store under `git_dir`.
    ///
    /// The store is opened lazily; a missing `objects` directory only
    /// surfaces when an object is actually read.
    pub fn open(git_dir: &Path) -> Self {
        Self {
            objects_dir: git_dir.join("objects"),
        }
    }

    /// Read and decode the object named by `oid`, returning its text lines.
    ///
    /// The stored bytes are zlib-inflated and decoded as UTF-8. The git
    /// object header (`commit <len>\0`) is left glued to the first line;
    /// callers scanning for line prefixes are unaffected.
    ///
    /// # Errors
    ///
    /// - [`GitError::ObjectNotFound`] if no file exists for the oid
    /// - [`GitError::CorruptObject`] if inflation or UTF-8 decoding fails
    pub fn read_object(&self, oid: &Oid) -> Result<Vec<String>, GitError> {
        let path = self.objects_dir.join(oid.fanout()).join(oid.rest());
        let deflated = std::fs::read(&path).map_err(|source| {
            if source.kind() == std::io::ErrorKind::NotFound {
                GitError::ObjectNotFound { oid: oid.clone() }
            } else {
                GitError::Io { path, source }
            }
        })?;

        let mut inflated = Vec::new();
        ZlibDecoder::new(deflated.as_slice())
            .read_to_end(&mut inflated)
            .map_err(|err| GitError::CorruptObject {
                oid: oid.clone(),
                message: format!("zlib inflation failed: {err}"),
            })?;

        let text = String::from_utf8(inflated).map_err(|_| GitError::CorruptObject {
            oid: oid.clone(),
            message: "object payload is not valid UTF-8".into(),
        })?;

        Ok(text.split('\n').map(str::to_string).collect())
    }

    /// Extract the parent oids of the commit named by `oid`.
    ///
    /// Scans the decoded lines for the literal prefix `parent ` and returns
    /// the named hashes in file order. Zero matches means a root commit;
    /// several mean a merge. All other lines (tree, author, message, ...)
    /// are ignored.
    ///
    /// # Errors
    ///
    /// In addition to [`ObjectDatabase::read_object`] failures, returns
    /// [`GitError::CorruptObject`] if a parent line does not hold a valid
    /// hash.
    pub fn commit_parents(&self, oid: &Oid) -> Result<Vec<Oid>, GitError> {
        let lines = self.read_object(oid)?;
        let mut parents = Vec::new();
        for line in &lines {
            if let Some(hash) = line.strip_prefix("parent ") {
                let parent = Oid::new(hash.trim_end()).map_err(|err| GitError::CorruptObject {
                    oid: oid.clone(),
                    message: format!("bad parent line: {err}"),
                })?;
                parents.push(parent);
            }
        }
        Ok(parents)
    }
}

impl CommitSource for ObjectDatabase {
    type Error = GitError;

    fn commit_parents(&self, oid: &Oid) -> Result<Vec<Oid>, GitError> {
        ObjectDatabase::commit_parents(self, oid)
    }
}
