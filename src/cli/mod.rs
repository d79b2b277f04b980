pub mod doctor;
pub mod output;
pub mod statusline;
pub mod util;

use clap::{Parser, Subcommand};

use util::LogLevel;

/// Powerline statusline rendered from a JSON status snapshot on stdin
#[derive(Parser)]
#[command(name = "gruvline", version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Rendering options, accepted before or after `render`
    #[command(flatten)]
    pub render: statusline::Args,

    /// Logging verbosity for stderr
    #[arg(long, global = true, value_enum, default_value_t = LogLevel::Off)]
    pub log_level: LogLevel,
}

#[derive(Subcommand)]
pub enum Command {
    /// Render the statusline from stdin (the default)
    Render,

    /// Diagnose git, config and working directory setup
    Doctor(doctor::Args),
}
