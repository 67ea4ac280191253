//! `log` facade bridge: records from crates that log through `log::info!` and friends land
//! in this logger, with the `log` target as the tag.
//!
//! Facade levels map the way a host framework's channels do: `debug` is chatty but not the
//! chattiest, so it lands on VERBOSE and `trace` on DEBUG.

use super::Logger;
use crate::fmt::Location;
use crate::level::Level;

#[must_use]
pub const fn level_from_log(level: log::Level) -> Level {
    match level {
        log::Level::Error => Level::Error,
        log::Level::Warn => Level::Warn,
        log::Level::Info => Level::Info,
        log::Level::Debug => Level::Verbose,
        log::Level::Trace => Level::Debug,
    }
}

/// Most permissive facade filter that can still reach `threshold`.
#[must_use]
pub const fn max_log_level(threshold: Level) -> log::LevelFilter {
    match threshold {
        Level::Critical | Level::Error => log::LevelFilter::Error,
        Level::Warn => log::LevelFilter::Warn,
        Level::Info => log::LevelFilter::Info,
        Level::Verbose => log::LevelFilter::Debug,
        Level::Debug | Level::None => log::LevelFilter::Trace,
    }
}

impl log::Log for Logger {
    fn enabled(&self, metadata: &log::Metadata<'_>) -> bool {
        self.is_enabled(level_from_log(metadata.level()))
    }

    fn log(&self, record: &log::Record<'_>) {
        let level = level_from_log(record.level());
        if !self.is_enabled(level) {
            return;
        }
        let location = match (record.file_static(), record.line()) {
            (Some(file), Some(line)) => Some(Location::new(
                file,
                line,
                record.module_path_static().unwrap_or("?"),
            )),
            _ => None,
        };
        let tag = Some(record.target()).filter(|t| !t.is_empty());
        self.log_at(level, tag, location, record.args());
    }

    fn flush(&self) {
        let _ = self.output.flush();
    }
}
