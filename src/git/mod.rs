//! Read-only git inspection for the statusline.
//!
//! The branch comes straight from `.git/HEAD`; change counts come from a
//! single `git status --porcelain` call under a deadline.

pub mod head;
pub mod status;

use std::path::Path;
use std::time::Duration;

pub use head::branch;
pub use status::{diff_stats, DiffStats};

/// Branch (or short hash) plus optional change counts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GitState {
    pub branch: String,
    pub diff: Option<DiffStats>,
}

/// Inspect `repo_dir`. Diff stats are only queried when a branch exists and
/// `with_diff` is set.
pub fn inspect(repo_dir: &Path, with_diff: bool, timeout: Duration) -> Option<GitState> {
    let branch = branch(repo_dir)?;
    let diff = if with_diff {
        diff_stats(repo_dir, timeout)
    } else {
        None
    };
    Some(GitState { branch, diff })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_inspect_non_repo() {
        let dir = TempDir::new().unwrap();
        assert!(inspect(dir.path(), true, Duration::from_secs(1)).is_none());
    }

    #[test]
    fn test_inspect_without_diff() {
        let dir = TempDir::new().unwrap();
        std::fs::create_dir_all(dir.path().join(".git")).unwrap();
        std::fs::write(dir.path().join(".git/HEAD"), "ref: refs/heads/dev\n").unwrap();

        let state = inspect(dir.path(), false, Duration::from_secs(1)).unwrap();
        assert_eq!(state.branch, "dev");
        assert!(state.diff.is_none());
    }
}
