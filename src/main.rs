mod cli;
mod config;
mod git;
mod render;

use anyhow::Result;
use clap::Parser;

use cli::{Cli, Command};

fn main() -> Result<()> {
    let cli = Cli::parse();
    cli::util::init_logging(cli.log_level);

    match cli.command {
        None | Some(Command::Render) => cli::statusline::run(cli.render),
        Some(Command::Doctor(args)) => cli::doctor::run(args),
    }
}
