use serde::Deserialize;

/// User-configurable statusline settings.
/// Missing file is not an error -- all fields have defaults.
#[derive(Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct StatuslineConfig {
    /// Deadline for `git status --porcelain`, in milliseconds.
    /// Default: 1000
    pub git_timeout_ms: u64,

    /// Whether to query working-tree change counts at all.
    /// Default: true
    pub git_diff: bool,

    /// Model label used when the input carries no display name.
    /// Default: "Claude"
    pub default_model: String,
}

impl Default for StatuslineConfig {
    fn default() -> Self {
        Self {
            git_timeout_ms: 1000,
            git_diff: true,
            default_model: "Claude".to_string(),
        }
    }
}

impl StatuslineConfig {
    pub fn git_timeout(&self) -> std::time::Duration {
        std::time::Duration::from_millis(self.git_timeout_ms)
    }
}
