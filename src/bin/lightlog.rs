//! `lightlog [--config PATH] [--tag TAG] [--location] <LEVEL> <MESSAGE>...`
//! `lightlog levels`

use clap::Parser;
use lightlog::cli::{Cli, Command, build_logger, cmd_levels, cmd_log};
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Some(Command::Levels) = cli.command {
        return cmd_levels();
    }

    let Some(level) = cli.level.as_deref() else {
        eprintln!("lightlog: missing <LEVEL> <MESSAGE>... (see --help)");
        return ExitCode::FAILURE;
    };

    let logger = match build_logger(cli.config.as_deref(), cli.tag.as_deref(), cli.location) {
        Ok(logger) => logger,
        Err(e) => {
            eprintln!("Error loading config: {e}");
            return ExitCode::FAILURE;
        }
    };

    cmd_log(&logger, level, &cli.message)
}
