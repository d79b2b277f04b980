use std::io::Read;
use std::path::Path;
use std::process::{Command, Stdio};
use std::thread;
use std::time::Duration;

use anyhow::{anyhow, bail, Context, Result};
use wait_timeout::ChildExt;

/// Working-tree change counts, classified from `git status --porcelain`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DiffStats {
    pub added: u32,
    pub modified: u32,
    pub removed: u32,
}

impl DiffStats {
    /// Tally porcelain v1 output.
    ///
    /// The first column is the staged state and the second the unstaged
    /// state; a single path may bump more than one counter. `??` (untracked)
    /// counts as added. Returns `None` when every counter is zero.
    pub fn from_porcelain(output: &str) -> Option<Self> {
        let mut stats = Self::default();

        for line in output.lines() {
            let code = line.as_bytes();
            if code.len() < 2 {
                continue;
            }
            let (staged, unstaged) = (code[0], code[1]);

            match staged {
                b'A' => stats.added += 1,
                b'M' => stats.modified += 1,
                b'D' => stats.removed += 1,
                _ => {}
            }

            match unstaged {
                b'M' => stats.modified += 1,
                b'D' => stats.removed += 1,
                _ => {}
            }

            if staged == b'?' && unstaged == b'?' {
                stats.added += 1;
            }
        }

        if stats.is_empty() {
            None
        } else {
            Some(stats)
        }
    }

    pub fn is_empty(&self) -> bool {
        self.added == 0 && self.modified == 0 && self.removed == 0
    }
}

/// Count working-tree changes in `repo_dir`.
///
/// Any failure (git missing, non-zero exit, timeout) is reported as `None`,
/// the same as a clean tree.
pub fn diff_stats(repo_dir: &Path, timeout: Duration) -> Option<DiffStats> {
    match porcelain_status(repo_dir, timeout) {
        Ok(output) => DiffStats::from_porcelain(&output),
        Err(e) => {
            tracing::debug!("git status unavailable in {}: {:#}", repo_dir.display(), e);
            None
        }
    }
}

/// Run `git status --porcelain` and return its stdout, killing git if it
/// outlives `timeout`.
fn porcelain_status(repo_dir: &Path, timeout: Duration) -> Result<String> {
    let mut child = Command::new("git")
        .args(["status", "--porcelain"])
        .current_dir(repo_dir)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::null())
        .spawn()
        .context("failed to spawn git")?;

    // Drain stdout concurrently so a large status cannot fill the pipe and
    // stall git until the deadline.
    let stdout_handle = child.stdout.take().map(|mut stdout| {
        thread::spawn(move || -> std::io::Result<Vec<u8>> {
            let mut buffer = Vec::new();
            stdout.read_to_end(&mut buffer)?;
            Ok(buffer)
        })
    });

    let status = match child.wait_timeout(timeout) {
        Ok(Some(status)) => status,
        Ok(None) => {
            let _ = child.kill();
            let _ = child.wait();
            bail!("git status timed out after {}ms", timeout.as_millis());
        }
        Err(e) => {
            let _ = child.kill();
            let _ = child.wait();
            return Err(e).context("failed waiting on git status");
        }
    };

    if !status.success() {
        let code = status
            .code()
            .map_or_else(|| "terminated".to_string(), |c| c.to_string());
        bail!("git status exited with status {}", code);
    }

    let stdout = match stdout_handle {
        Some(handle) => handle
            .join()
            .map_err(|_| anyhow!("git stdout reader panicked"))?
            .context("failed to read git stdout")?,
        None => Vec::new(),
    };

    Ok(String::from_utf8_lossy(&stdout).into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_porcelain_mixed() {
        let output = "A  new.txt\n M mod.txt\n?? untracked.txt\n";
        assert_eq!(
            DiffStats::from_porcelain(output),
            Some(DiffStats {
                added: 2,
                modified: 1,
                removed: 0,
            })
        );
    }

    #[test]
    fn test_porcelain_one_line_bumps_two_counters() {
        // Staged add, then modified again in the working tree.
        let stats = DiffStats::from_porcelain("AM both.txt\n").unwrap();
        assert_eq!(stats.added, 1);
        assert_eq!(stats.modified, 1);

        let stats = DiffStats::from_porcelain("MD gone.txt\n").unwrap();
        assert_eq!(stats.modified, 1);
        assert_eq!(stats.removed, 1);
    }

    #[test]
    fn test_porcelain_removed() {
        let stats = DiffStats::from_porcelain("D  a.txt\n D b.txt\n").unwrap();
        assert_eq!(stats.removed, 2);
        assert_eq!(stats.added, 0);
        assert_eq!(stats.modified, 0);
    }

    #[test]
    fn test_porcelain_all_zero_is_none() {
        // Renames and ignored entries match none of the counted codes.
        assert!(DiffStats::from_porcelain("R  old -> new\n!! target/\n").is_none());
        assert!(DiffStats::from_porcelain("").is_none());
        assert!(DiffStats::from_porcelain("\n\n").is_none());
    }

    #[test]
    fn test_porcelain_skips_short_lines() {
        let stats = DiffStats::from_porcelain("M\n?? x\n").unwrap();
        assert_eq!(stats.added, 1);
        assert_eq!(stats.modified, 0);
    }

    #[test]
    fn test_diff_stats_outside_repo_is_none() {
        let dir = TempDir::new().unwrap();
        assert!(diff_stats(dir.path(), Duration::from_secs(1)).is_none());
    }

    #[test]
    fn test_diff_stats_missing_dir_is_none() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("does-not-exist");
        assert!(diff_stats(&missing, Duration::from_secs(1)).is_none());
    }

    #[test]
    fn test_diff_stats_real_repo() {
        if which::which("git").is_err() {
            eprintln!("Skipping: git not found on PATH");
            return;
        }

        let dir = TempDir::new().unwrap();
        let init = Command::new("git")
            .args(["init", "--quiet"])
            .current_dir(dir.path())
            .status()
            .unwrap();
        assert!(init.success());

        assert!(diff_stats(dir.path(), Duration::from_secs(5)).is_none());

        std::fs::write(dir.path().join("new.txt"), "hello\n").unwrap();
        let stats = diff_stats(dir.path(), Duration::from_secs(5)).unwrap();
        assert_eq!(stats.added, 1);
        assert_eq!(stats.modified, 0);
        assert_eq!(stats.removed, 0);
    }
}
