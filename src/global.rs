//! Process-wide logger for code that has no logger handle of its own.
//!
//! `OnceLock` makes the override single-shot: [`init`] succeeds only if it runs before
//! anything else touched the global logger. After that the logger is fixed, so set it
//! during single-threaded startup.

use crate::level::Level;
use crate::logger::Logger;
use std::fmt;
use std::sync::OnceLock;

static GLOBAL_LOGGER: OnceLock<Logger> = OnceLock::new();

/// Installs `logger` as the process-wide logger.
///
/// # Errors
/// [`crate::Error::AlreadyInitialized`] if a logger was installed, or the default was
/// already created by an earlier logging call.
pub fn init(logger: Logger) -> Result<(), crate::Error> {
    GLOBAL_LOGGER
        .set(logger)
        .map_err(|_| crate::Error::AlreadyInitialized)
}

/// Routes the `log` facade into the process-wide logger, so `log::warn!(target: "NET", ..)`
/// from any dependency comes out as a `[NET]` WARN line. The facade's max level follows
/// the logger's threshold.
///
/// # Errors
/// [`crate::Error::LogBridge`] if another `log` implementation was installed first.
pub fn init_log_bridge() -> Result<(), crate::Error> {
    let logger = logger();
    log::set_logger(logger)?;
    log::set_max_level(crate::logger::max_log_level(logger.threshold()));
    Ok(())
}

/// The installed logger, or one built from the default config file on first use.
pub fn logger() -> &'static Logger {
    GLOBAL_LOGGER.get_or_init(Logger::from_default_config)
}

#[must_use]
pub fn is_initialized() -> bool {
    GLOBAL_LOGGER.get().is_some()
}

pub fn critical(msg: impl fmt::Display) -> bool {
    logger().log(Level::Critical, msg)
}

pub fn error(msg: impl fmt::Display) -> bool {
    logger().log(Level::Error, msg)
}

pub fn warn(msg: impl fmt::Display) -> bool {
    logger().log(Level::Warn, msg)
}

pub fn info(msg: impl fmt::Display) -> bool {
    logger().log(Level::Info, msg)
}

pub fn verbose(msg: impl fmt::Display) -> bool {
    logger().log(Level::Verbose, msg)
}

pub fn debug(msg: impl fmt::Display) -> bool {
    logger().log(Level::Debug, msg)
}
