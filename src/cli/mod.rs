//! Command-line front end: log one message through a logger built from config.

mod commands;

pub use commands::{build_logger, cmd_levels, cmd_log};

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// lightlog - Log a leveled message from the command line.
#[derive(Debug, Parser)]
#[command(
    name = "lightlog",
    version,
    about = "Log a leveled message from the command line",
    args_conflicts_with_subcommands = true
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Config file (defaults to the platform config directory)
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Tag written in front of the line
    #[arg(long, short)]
    pub tag: Option<String>,

    /// Prefix the message with this invocation's source location
    #[arg(long)]
    pub location: bool,

    /// DEBUG, VERBOSE, INFO, WARNING, ERROR or CRITICAL (unknown names log at INFO)
    pub level: Option<String>,

    /// Message words, joined with single spaces
    pub message: Vec<String>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// List the level names the threshold and LEVEL accept.
    Levels,
}
