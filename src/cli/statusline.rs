use std::io::{Read, Write};
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::Args as ClapArgs;
use serde::{Deserialize, Deserializer};

use crate::config::{self, StatuslineConfig};
use crate::git::{self, GitState};
use crate::render::palette::{
    BG0, COMPONENT_SEP, FG, GREEN, GREY, ICON_CLOCK, ICON_DOLLAR, ICON_FOLDER, ICON_GIT_BRANCH,
    ICON_MINUS, ICON_MODEL, ICON_PENCIL, ICON_PLUS, ORANGE, RED, YELLOW,
};
use crate::render::{format_component, format_cost, format_duration, render_line, Painter, Segment};

/// Printed instead of the statusline when anything goes wrong.
pub const FALLBACK: &str = "Claude Code";

/// Upper bound on how much of stdin is read.
const MAX_INPUT_BYTES: u64 = 1 << 20;

// ---------------------------------------------------------------------------
// Data structures
// ---------------------------------------------------------------------------

/// Status snapshot piped in on each statusline tick.
/// Every field and nesting level may be omitted; unknown fields are ignored.
/// A known field that is present must not be `null`.
#[derive(Debug, Deserialize, Default)]
pub struct StatusInput {
    #[serde(default, deserialize_with = "non_null")]
    pub model: Option<ModelInfo>,
    #[serde(default, deserialize_with = "non_null")]
    pub workspace: Option<WorkspaceInfo>,
    #[serde(default, deserialize_with = "non_null")]
    pub cost: Option<CostInfo>,
}

#[derive(Debug, Deserialize, Default)]
pub struct ModelInfo {
    #[serde(default, deserialize_with = "non_null")]
    pub display_name: Option<String>,
}

#[derive(Debug, Deserialize, Default)]
pub struct WorkspaceInfo {
    #[serde(default, deserialize_with = "non_null")]
    pub current_dir: Option<String>,
}

/// Session metrics. `duration` is in seconds.
#[derive(Debug, Deserialize, Default)]
pub struct CostInfo {
    #[serde(default, deserialize_with = "non_null")]
    pub total_cost: Option<f64>,
    #[serde(default, deserialize_with = "non_null")]
    pub duration: Option<f64>,
    #[serde(default, deserialize_with = "non_null")]
    pub lines_added: Option<i64>,
    #[serde(default, deserialize_with = "non_null")]
    pub lines_removed: Option<i64>,
}

/// Deserialize a present field as `Some`. `null` fails like any other
/// mistyped value; a missing field falls through to `#[serde(default)]`.
fn non_null<'de, D, T>(deserializer: D) -> std::result::Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    T::deserialize(deserializer).map(Some)
}

impl StatusInput {
    fn model_name<'a>(&'a self, default: &'a str) -> &'a str {
        self.model
            .as_ref()
            .and_then(|m| m.display_name.as_deref())
            .unwrap_or(default)
    }

    fn current_dir(&self) -> Option<&str> {
        self.workspace.as_ref().and_then(|w| w.current_dir.as_deref())
    }
}

// ---------------------------------------------------------------------------
// Clap Args
// ---------------------------------------------------------------------------

/// Arguments for rendering the statusline.
#[derive(ClapArgs, Debug, Default)]
pub struct Args {
    /// Disable colored output (also respects NO_COLOR env var)
    #[arg(long, global = true)]
    pub no_color: bool,
}

// ---------------------------------------------------------------------------
// Entry point
// ---------------------------------------------------------------------------

/// Entry point. Wraps `run_inner` in `catch_unwind` so that errors and
/// panics both degrade to the fallback line and the process exits 0.
pub fn run(args: Args) -> Result<()> {
    std::panic::set_hook(Box::new(|info| {
        tracing::debug!("statusline panicked: {}", info);
    }));

    let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| run_inner(args)));

    match result {
        Ok(Ok(())) => {}
        Ok(Err(e)) => {
            tracing::debug!("statusline failed: {:#}", e);
            print_line(FALLBACK);
        }
        Err(_) => print_line(FALLBACK),
    }
    Ok(())
}

/// Actual implementation of the statusline.
fn run_inner(args: Args) -> Result<()> {
    let color = !(args.no_color || std::env::var_os("NO_COLOR").is_some());
    let painter = Painter::new(color);
    let config = config::load();

    let mut buf = Vec::new();
    std::io::stdin()
        .lock()
        .take(MAX_INPUT_BYTES)
        .read_to_end(&mut buf)
        .context("failed to read stdin")?;
    let input = parse_input(&buf)?;

    let cwd = resolve_cwd(&input)?;
    let git = git::inspect(&cwd, config.git_diff, config.git_timeout());

    let segments = build_segments(painter, &input, &cwd, git.as_ref(), &config);
    let line = render_line(painter, &segments);

    let mut stdout = std::io::stdout().lock();
    writeln!(stdout, "{}", line).context("failed to write statusline")?;
    stdout.flush().context("failed to flush stdout")?;
    Ok(())
}

/// Best-effort single-line write used by the fallback path.
fn print_line(line: &str) {
    let mut stdout = std::io::stdout().lock();
    let _ = writeln!(stdout, "{}", line);
    let _ = stdout.flush();
}

// ---------------------------------------------------------------------------
// Input
// ---------------------------------------------------------------------------

/// Parse the stdin payload. Empty input, malformed JSON, a non-object root
/// and mistyped or `null` fields are all errors.
fn parse_input(buf: &[u8]) -> Result<StatusInput> {
    let value: serde_json::Value =
        serde_json::from_slice(buf).context("stdin is not valid JSON")?;
    if !value.is_object() {
        bail!("stdin JSON root is not an object");
    }
    serde_json::from_value(value).context("stdin JSON has unexpected field types")
}

/// The workspace directory from the input, or the process's own.
fn resolve_cwd(input: &StatusInput) -> Result<PathBuf> {
    match input.current_dir() {
        Some(dir) => Ok(PathBuf::from(dir)),
        None => std::env::current_dir().context("failed to determine current directory"),
    }
}

/// Text after the last '/', or "~" when that is empty ("/", "/tmp/", "").
fn dir_name(path: &str) -> String {
    match path.rsplit('/').next() {
        Some(name) if !name.is_empty() => name.to_string(),
        _ => "~".to_string(),
    }
}

// ---------------------------------------------------------------------------
// Segment builders
// ---------------------------------------------------------------------------

fn component_sep(painter: Painter) -> String {
    format!(" {}{} ", painter.fg(GREY), COMPONENT_SEP)
}

fn model_segment(painter: Painter, name: &str) -> Segment {
    Segment::new(
        format_component(painter, ICON_MODEL, name, ORANGE),
        ORANGE,
        BG0,
        Some(BG0),
    )
}

/// Branch name, followed by per-kind change counts when there are any.
fn git_segment(painter: Painter, git: &GitState) -> Segment {
    let mut content = format_component(painter, ICON_GIT_BRANCH, &git.branch, GREEN);

    if let Some(diff) = git.diff {
        let mut parts = Vec::new();
        for (count, icon, color) in [
            (diff.added, ICON_PLUS, GREEN),
            (diff.modified, ICON_PENCIL, YELLOW),
            (diff.removed, ICON_MINUS, RED),
        ] {
            if count > 0 {
                parts.push(format!("{}{}{}", painter.fg(color), icon, count));
            }
        }

        if !parts.is_empty() {
            content.push_str(&component_sep(painter));
            content.push_str(&parts.join(" "));
        }
    }

    Segment::new(content, GREEN, BG0, Some(BG0))
}

fn directory_segment(painter: Painter, name: &str) -> Segment {
    Segment::new(
        format_component(painter, ICON_FOLDER, name, FG),
        FG,
        BG0,
        Some(BG0),
    )
}

/// Cost, duration and line counts. `None` when all of them are zero.
fn metrics_segment(painter: Painter, cost: &CostInfo) -> Option<Segment> {
    let total_cost = cost.total_cost.unwrap_or(0.0);
    let duration = cost.duration.unwrap_or(0.0);
    let lines_added = cost.lines_added.unwrap_or(0);
    let lines_removed = cost.lines_removed.unwrap_or(0);

    let mut parts = Vec::new();

    if total_cost > 0.0 {
        parts.push(format_component(
            painter,
            ICON_DOLLAR,
            &format_cost(Some(total_cost)),
            YELLOW,
        ));
    }

    if duration > 0.0 {
        parts.push(format_component(
            painter,
            ICON_CLOCK,
            &format_duration(Some(duration)),
            FG,
        ));
    }

    if lines_added > 0 || lines_removed > 0 {
        parts.push(format!(
            "{}{}{} {}{}",
            painter.fg(FG),
            ICON_PLUS,
            lines_added,
            ICON_MINUS,
            lines_removed
        ));
    }

    if parts.is_empty() {
        return None;
    }

    // Closes the bar: the only segment with a reset-style divider.
    Some(Segment::new(
        parts.join(&component_sep(painter)),
        FG,
        BG0,
        None,
    ))
}

/// Assemble segments in their fixed order: model, git, directory, metrics.
fn build_segments(
    painter: Painter,
    input: &StatusInput,
    cwd: &Path,
    git: Option<&GitState>,
    config: &StatuslineConfig,
) -> Vec<Segment> {
    let mut segments = Vec::with_capacity(4);

    segments.push(model_segment(painter, input.model_name(&config.default_model)));

    if let Some(git) = git {
        segments.push(git_segment(painter, git));
    }

    segments.push(directory_segment(painter, &dir_name(&cwd.to_string_lossy())));

    if let Some(metrics) = input
        .cost
        .as_ref()
        .and_then(|cost| metrics_segment(painter, cost))
    {
        segments.push(metrics);
    }

    segments
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
