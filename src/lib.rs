//! `lightlog` - a light leveled logger.
//!
//! Messages are formatted with Rust's own `format_args!`, tagged with a timestamp, level
//! label and optional source tag, optionally colorized, and written synchronously to one
//! backend:
//! - colorized or plain console (errors on stderr, the rest on stdout)
//! - an append-only log file
//! - the platform system log or debug channel
//! - any custom [`Output`]
//!
//! # Example
//!
//! ```
//! use lightlog::{Level, Logger};
//!
//! let log = Logger::builder()
//!     .level(Level::Info)
//!     .terminal()
//!         .colors(false)
//!         .done()
//!     .build();
//!
//! assert!(log.info("Application started"));
//! assert!(!log.error_t("NET", format_args!("Disk {}", "full")));
//! // Filtered out, but still reports the level's nominal result.
//! assert!(log.debug("not shown"));
//!
//! let mut line = log.stream(Level::Warn);
//! line.append("retry ").append(3).append("/5");
//! line.finish();
//! ```
//!
//! # Features
//!
//! - `cli` (default): the `lightlog` command-line front end

pub mod config;
pub mod error;
pub mod filter;
pub mod fmt;
pub mod global;
pub mod level;
pub mod logger;
mod macros;
pub mod output;
pub mod record;

#[cfg(feature = "cli")]
pub mod cli;

pub use config::Config;
pub use error::Error;
pub use filter::LevelFilter;
pub use fmt::{Attribute, Color, Location};
pub use level::{Level, ParseLevelError};
pub use logger::{Logger, LoggerBuilder, RecordStream};
pub use output::{FileOutput, LogRecord, Output, TerminalOutput};
