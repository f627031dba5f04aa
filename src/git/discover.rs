//! git::discover
//!
//! Repository discovery by upward traversal.

use std::path::{Path, PathBuf};

use super::GitError;

/// Find the `.git` directory governing `start`.
///
/// Walks from `start` toward the filesystem root and returns the first
/// `<dir>/.git` that is a directory. Worktree-style `.git` files are not
/// recognized; only the marker directory counts.
///
/// # Errors
///
/// Returns [`GitError::NotARepository`] if the walk reaches the filesystem
/// root without finding a marker.
///
/// # Example
///
/// ```no_run
/// use topolog::git::discover_git_dir;
/// use std::path::Path;
///
/// let git_dir = discover_git_dir(Path::new(".")).unwrap();
/// assert!(git_dir.ends_with(".git"));
/// ```
pub fn discover_git_dir(start: &Path) -> Result<PathBuf, GitError> {
    // Relative starts must be anchored or the walk cannot reach the root.
    let mut dir = if start.is_absolute() {
        start.to_path_buf()
    } else {
        std::env::current_dir()
            .map_err(|source| GitError::Io {
                path: start.to_path_buf(),
                source,
            })?
            .join(start)
    };

    loop {
        let candidate = dir.join(".git");
        if candidate.is_dir() {
            return Ok(candidate);
        }
        if !dir.pop() {
            return Err(GitError::NotARepository {
                path: start.to_path_buf(),
            });
        }
    }
}
