use std::path::Path;

const BRANCH_REF_PREFIX: &str = "ref: refs/heads/";
const SHORT_HASH_LEN: usize = 7;

/// Resolve the checked-out branch by reading `<repo_dir>/.git/HEAD`.
///
/// Returns the branch name for a symbolic ref, the 7-character short hash for
/// a detached HEAD, and `None` when the file is missing or unreadable.
/// Linked worktrees (where `.git` is a file) are not followed.
pub fn branch(repo_dir: &Path) -> Option<String> {
    let head_path = repo_dir.join(".git").join("HEAD");
    if !head_path.exists() {
        return None;
    }

    match std::fs::read_to_string(&head_path) {
        Ok(contents) => Some(parse_head(&contents)),
        Err(e) => {
            tracing::debug!("could not read {}: {}", head_path.display(), e);
            None
        }
    }
}

/// Interpret the contents of a HEAD file.
fn parse_head(contents: &str) -> String {
    let head = contents.trim();
    match head.strip_prefix(BRANCH_REF_PREFIX) {
        Some(name) => name.to_string(),
        None => head.chars().take(SHORT_HASH_LEN).collect(),
    }
}
