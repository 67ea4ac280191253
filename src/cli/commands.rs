use crate::config::Config;
use crate::level::Level;
use crate::logger::Logger;
use std::path::Path;
use std::process::ExitCode;

/// Loads `path` (or the default config file) and builds the logger from it.
///
/// # Errors
/// The config file exists but cannot be read or parsed.
pub fn build_logger(
    path: Option<&Path>,
    tag: Option<&str>,
    location: bool,
) -> Result<Logger, crate::Error> {
    let mut config = match path {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    if let Some(tag) = tag {
        config.general.tag = Some(tag.to_string());
    }
    config.general.location |= location;
    Ok(Logger::from_config(&config))
}

/// Exit status mirrors the level's nominal result: WARN and worse fail.
#[must_use]
pub fn cmd_log(logger: &Logger, level: &str, message: &[String]) -> ExitCode {
    let level = logger.level_from_string(level);
    let nominal = logger.log_at(level, None, Some(crate::location!()), message.join(" "));
    let _ = logger.flush();
    if nominal {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}

pub fn cmd_levels() -> ExitCode {
    for level in Level::all() {
        println!("{:<8} {}", level.name(), level.label());
    }
    ExitCode::SUCCESS
}
