//! Failures the setup side of the crate can report. Log calls themselves never return one:
//! the dispatcher swallows backend errors.

use std::fmt;

#[derive(Debug)]
pub enum Error {
    /// Reading the config file, or a backend write, failed.
    Io(std::io::Error),
    /// The config file is not valid TOML for [`crate::Config`].
    ConfigParse(toml::de::Error),
    /// The platform reports no per-user config directory.
    ConfigDirNotFound,
    /// A level name outside `DEBUG`, `VERBOSE`, `INFO`, `WARNING`, `ERROR`, `CRITICAL`.
    InvalidLevel(String),
    /// A backend lost its destination, e.g. a log file that could not be opened.
    Unavailable(String),
    /// `global::init` came after the process-wide logger was fixed.
    AlreadyInitialized,
    /// Another `log` facade implementation got there first.
    LogBridge(log::SetLoggerError),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "i/o failure: {e}"),
            Self::ConfigParse(e) => write!(f, "bad config: {e}"),
            Self::ConfigDirNotFound => f.write_str("no config directory on this platform"),
            Self::InvalidLevel(name) => write!(f, "unknown logging level '{name}'"),
            Self::Unavailable(what) => write!(f, "backend unavailable: {what}"),
            Self::AlreadyInitialized => f.write_str("process-wide logger already fixed"),
            Self::LogBridge(e) => write!(f, "log facade bridge: {e}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::ConfigParse(e) => Some(e),
            Self::LogBridge(e) => Some(e),
            Self::ConfigDirNotFound
            | Self::InvalidLevel(_)
            | Self::Unavailable(_)
            | Self::AlreadyInitialized => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<toml::de::Error> for Error {
    fn from(e: toml::de::Error) -> Self {
        Self::ConfigParse(e)
    }
}

impl From<crate::level::ParseLevelError> for Error {
    fn from(e: crate::level::ParseLevelError) -> Self {
        Self::InvalidLevel(e.input().to_string())
    }
}

impl From<log::SetLoggerError> for Error {
    fn from(e: log::SetLoggerError) -> Self {
        Self::LogBridge(e)
    }
}
