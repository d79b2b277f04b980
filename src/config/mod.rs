pub mod schema;

use std::path::PathBuf;

use anyhow::{Context, Result};

pub use schema::StatuslineConfig;

/// Env var naming an explicit config file (mainly for tests).
pub const CONFIG_ENV: &str = "GRUVLINE_CONFIG";

/// Where the config file is looked up: `$GRUVLINE_CONFIG`, else
/// `~/.config/gruvline/statusline.toml` (platform-appropriate).
pub fn config_path() -> Option<PathBuf> {
    std::env::var(CONFIG_ENV)
        .ok()
        .map(PathBuf::from)
        .or_else(|| dirs::config_dir().map(|d| d.join("gruvline").join("statusline.toml")))
}

/// Parse the config file at `path`.
pub fn load_from(path: &std::path::Path) -> Result<StatuslineConfig> {
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    let config = toml::from_str(&contents)
        .with_context(|| format!("failed to parse {}", path.display()))?;
    Ok(config)
}

/// Load the statusline config, falling back to defaults if the file is
/// missing or unparseable. Never fails.
pub fn load() -> StatuslineConfig {
    match config_path() {
        Some(path) if path.exists() => load_from(&path).unwrap_or_else(|e| {
            tracing::debug!("using default config: {:#}", e);
            StatuslineConfig::default()
        }),
        _ => StatuslineConfig::default(),
    }
}
