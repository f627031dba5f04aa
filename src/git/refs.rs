//! git::refs
//!
//! Branch ref enumeration.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use super::GitError;
use crate::core::types::{BranchName, Oid};

/// Enumerate the branches under `<git_dir>/refs/heads`.
///
/// Walks the tree iteratively (an explicit work-list, so pathological
/// nesting cannot overflow the call stack). Every regular file is a branch:
/// its name is the slash-joined path relative to `refs/heads` and its value
/// is the trimmed first line of the file. A missing `refs/heads` directory
/// means a repository with no branches and yields an empty map.
///
/// # Errors
///
/// - [`GitError::InvalidRef`] if a ref file does not hold a commit hash or
///   its name is not usable as a branch name
/// - [`GitError::Io`] if a directory or file cannot be read
pub fn list_branches(git_dir: &Path) -> Result<BTreeMap<BranchName, Oid>, GitError> {
    let heads_dir = git_dir.join("refs").join("heads");
    let mut branches = BTreeMap::new();
    if !heads_dir.is_dir() {
        return Ok(branches);
    }

    let mut pending: Vec<(PathBuf, String)> = vec![(heads_dir, String::new())];
    while let Some((dir, prefix)) = pending.pop() {
        let entries = std::fs::read_dir(&dir).map_err(|source| GitError::Io {
            path: dir.clone(),
            source,
        })?;
        for entry in entries {
            let entry = entry.map_err(|source| GitError::Io {
                path: dir.clone(),
                source,
            })?;
            let path = entry.path();
            let file_name = entry.file_name().to_string_lossy().into_owned();
            let name = if prefix.is_empty() {
                file_name
            } else {
                format!("{prefix}/{file_name}")
            };

            let file_type = entry.file_type().map_err(|source| GitError::Io {
                path: path.clone(),
                source,
            })?;
            if file_type.is_dir() {
                pending.push((path, name));
            } else if file_type.is_file() {
                let (branch, oid) = read_ref_file(&path, name)?;
                branches.insert(branch, oid);
            }
            // Other entry kinds (sockets, symlinks) are not loose refs.
        }
    }

    Ok(branches)
}

/// Parse one loose ref file into its branch name and head oid.
fn read_ref_file(path: &Path, name: String) -> Result<(BranchName, Oid), GitError> {
    let contents = std::fs::read_to_string(path).map_err(|source| GitError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let first_line = contents.lines().next().unwrap_or("").trim();

    let oid = Oid::new(first_line).map_err(|err| GitError::InvalidRef {
        path: path.to_path_buf(),
        message: err.to_string(),
    })?;
    let branch = BranchName::new(name).map_err(|err| GitError::InvalidRef {
        path: path.to_path_buf(),
        message: err.to_string(),
    })?;
    Ok((branch, oid))
}
