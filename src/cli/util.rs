//! Shared CLI utility functions.

use clap::ValueEnum;

/// Try to get a command's version string.
///
/// Runs `<cmd> --version` and returns the first line of stdout, or `None`
/// if the command fails or produces no output.
pub fn get_command_version(cmd: &str) -> Option<String> {
    let output = std::process::Command::new(cmd)
        .arg("--version")
        .stdout(std::process::Stdio::piped())
        .stderr(std::process::Stdio::piped())
        .output()
        .ok()?;

    if output.status.success() {
        let version = String::from_utf8_lossy(&output.stdout);
        let first_line = version.lines().next().unwrap_or("").trim();
        if first_line.is_empty() {
            None
        } else {
            Some(first_line.to_string())
        }
    } else {
        None
    }
}

/// Accepted `--log-level` values. Anything else is rejected by clap.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    #[default]
    Off,
    Error,
    Warn,
    Info,
    Debug,
}

impl LogLevel {
    /// `EnvFilter` directive for this level.
    pub fn filter(self) -> &'static str {
        match self {
            LogLevel::Off => "off",
            LogLevel::Error => "error",
            LogLevel::Warn => "warn",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
        }
    }
}

/// Route `tracing` events to stderr at the given level.
pub fn init_logging(level: LogLevel) {
    // try_init: a second subscriber (e.g. under tests) is not an error.
    let _ = tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(level.filter())
        .try_init();
}
