use anyhow::{Context, Result};
use clap::Args as ClapArgs;

use super::{output, util};
use crate::config;
use crate::git;

#[derive(ClapArgs)]
pub struct Args {
    /// Directory to inspect instead of the current one
    #[arg(long)]
    pub dir: Option<std::path::PathBuf>,
}

/// Report what the statusline will be able to show. Findings go to stderr;
/// problems are reported, never returned as errors.
pub fn run(args: Args) -> Result<()> {
    output::header("gruvline doctor");

    match which::which("git") {
        Ok(path) => {
            let version =
                util::get_command_version("git").unwrap_or_else(|| "unknown version".to_string());
            output::success(&format!("git: {} ({})", path.display(), version));
        }
        Err(_) => output::warning("git not found on PATH -- change counts will be hidden"),
    }

    match config::config_path() {
        Some(path) if path.exists() => match config::load_from(&path) {
            Ok(cfg) => output::success(&format!(
                "config: {} (git timeout {}ms)",
                path.display(),
                cfg.git_timeout_ms
            )),
            Err(e) => {
                output::error(&format!("{:#}", e));
                output::info("defaults will be used");
            }
        },
        Some(path) => output::info(&format!("no config at {} -- using defaults", path.display())),
        None => output::warning("could not determine config directory -- using defaults"),
    }

    let dir = match args.dir {
        Some(dir) => dir,
        None => std::env::current_dir().context("failed to determine current directory")?,
    };
    match git::branch(&dir) {
        Some(branch) => output::success(&format!("repo: {} on {}", dir.display(), branch)),
        None => output::info(&format!(
            "{} has no .git/HEAD -- git segment will be hidden",
            dir.display()
        )),
    }

    Ok(())
}
