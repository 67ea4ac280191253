//! The dispatcher: gate on level, decorate, hand to the single active backend. Every entry
//! point returns the level's nominal boolean, never a delivery status.

mod bridge;
mod builder;
mod from_config;
mod stacktrace;
mod stream;

pub use bridge::{level_from_log, max_log_level};
pub use builder::{FileBuilder, LoggerBuilder, TerminalBuilder};
pub use stream::RecordStream;

use crate::filter::LevelFilter;
use crate::fmt::{Attribute, Color, Location};
use crate::level::{Level, ParseLevelError};
use crate::output::{LogRecord, Output};
use std::fmt;

/// Tag used for the library's own warnings.
pub(crate) const SELF_TAG: &str = "lightlog";

/// Immutable after build, so it can be shared across threads without locks. Interleaving
/// between threads is only as atomic as the backend's single write.
pub struct Logger {
    filter: LevelFilter,
    output: Box<dyn Output>,
    default_tag: Option<String>,
    location: bool,
}

impl Default for Logger {
    fn default() -> Self {
        Self::builder().build()
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger")
            .field("filter", &self.filter)
            .field("default_tag", &self.default_tag)
            .field("location", &self.location)
            .finish_non_exhaustive()
    }
}

impl Logger {
    #[must_use]
    pub fn builder() -> LoggerBuilder {
        LoggerBuilder::new()
    }

    /// Whether a record at `level` would reach the backend.
    #[must_use]
    pub fn is_enabled(&self, level: Level) -> bool {
        self.filter.is_enabled(level)
    }

    /// Filters, decorates and writes. Backend failures are dropped here on purpose:
    /// a log call never reports them.
    pub fn dispatch(&self, mut record: LogRecord) {
        if !self.filter.is_enabled(record.level) {
            return;
        }
        if !self.location {
            record.location = None;
        }
        if record.tag.is_none() {
            record.tag.clone_from(&self.default_tag);
        }
        let _ = self.output.emit(&record);
    }

    /// Core entry point behind every level method and macro.
    pub fn log_at(
        &self,
        level: Level,
        tag: Option<&str>,
        location: Option<Location>,
        msg: impl fmt::Display,
    ) -> bool {
        if self.filter.is_enabled(level) {
            let mut record = LogRecord::new(level).tag(tag).location(location);
            record.format(format_args!("{msg}"));
            self.dispatch(record);
        }
        level.nominal_result()
    }

    pub fn log(&self, level: Level, msg: impl fmt::Display) -> bool {
        self.log_at(level, None, None, msg)
    }

    pub fn log_t(&self, level: Level, tag: &str, msg: impl fmt::Display) -> bool {
        self.log_at(level, Some(tag), None, msg)
    }

    pub fn critical(&self, msg: impl fmt::Display) -> bool {
        self.log(Level::Critical, msg)
    }

    pub fn critical_t(&self, tag: &str, msg: impl fmt::Display) -> bool {
        self.log_t(Level::Critical, tag, msg)
    }

    pub fn error(&self, msg: impl fmt::Display) -> bool {
        self.log(Level::Error, msg)
    }

    pub fn error_t(&self, tag: &str, msg: impl fmt::Display) -> bool {
        self.log_t(Level::Error, tag, msg)
    }

    pub fn warn(&self, msg: impl fmt::Display) -> bool {
        self.log(Level::Warn, msg)
    }

    pub fn warn_t(&self, tag: &str, msg: impl fmt::Display) -> bool {
        self.log_t(Level::Warn, tag, msg)
    }

    pub fn info(&self, msg: impl fmt::Display) -> bool {
        self.log(Level::Info, msg)
    }

    pub fn info_t(&self, tag: &str, msg: impl fmt::Display) -> bool {
        self.log_t(Level::Info, tag, msg)
    }

    pub fn verbose(&self, msg: impl fmt::Display) -> bool {
        self.log(Level::Verbose, msg)
    }

    pub fn verbose_t(&self, tag: &str, msg: impl fmt::Display) -> bool {
        self.log_t(Level::Verbose, tag, msg)
    }

    pub fn debug(&self, msg: impl fmt::Display) -> bool {
        self.log(Level::Debug, msg)
    }

    pub fn debug_t(&self, tag: &str, msg: impl fmt::Display) -> bool {
        self.log_t(Level::Debug, tag, msg)
    }

    /// Like [`Self::log_at`] but the console leaves the line open (no trailing newline).
    pub fn show(&self, level: Level, tag: Option<&str>, msg: impl fmt::Display) -> bool {
        if self.filter.is_enabled(level) {
            let mut record = LogRecord::new(level).tag(tag).newline(false);
            record.format(format_args!("{msg}"));
            self.dispatch(record);
        }
        level.nominal_result()
    }

    /// Explicitly styled, level-less output. Never filtered.
    pub fn formatted(
        &self,
        tag: Option<&str>,
        attribute: Attribute,
        color: Color,
        msg: impl fmt::Display,
    ) -> bool {
        self.formatted_bg(tag, attribute, color, Color::Default, msg)
    }

    pub fn formatted_bg(
        &self,
        tag: Option<&str>,
        attribute: Attribute,
        color: Color,
        background: Color,
        msg: impl fmt::Display,
    ) -> bool {
        self.formatted_with(tag, &[attribute], color, background, msg)
    }

    /// Styled output with several attributes at once, e.g. bold and underlined.
    pub fn formatted_with(
        &self,
        tag: Option<&str>,
        attributes: &[Attribute],
        color: Color,
        background: Color,
        msg: impl fmt::Display,
    ) -> bool {
        let mut record = LogRecord::styled_with(attributes, color, background).tag(tag);
        record.format(format_args!("{msg}"));
        self.dispatch(record);
        true
    }

    /// Stream-style record; written when the stream is finished or dropped.
    #[must_use]
    pub fn stream(&self, level: Level) -> RecordStream<'_> {
        RecordStream::new(self, LogRecord::new(level))
    }

    #[must_use]
    pub fn stream_t(&self, tag: &str, level: Level) -> RecordStream<'_> {
        RecordStream::new(self, LogRecord::new(level).tag(Some(tag)))
    }

    #[must_use]
    pub fn styled_stream(&self, attribute: Attribute, color: Color) -> RecordStream<'_> {
        RecordStream::new(
            self,
            LogRecord::styled(attribute, color, Color::Default),
        )
    }

    /// Lenient level parsing: unknown names become INFO and a warning goes out through
    /// this same logger (subject to its own threshold).
    pub fn level_from_string(&self, name: &str) -> Level {
        name.parse().unwrap_or_else(|e: ParseLevelError| {
            self.warn_t(
                SELF_TAG,
                format_args!(
                    "Unknown logging level '{}'. Using INFO level as default.",
                    e.input()
                ),
            );
            Level::Info
        })
    }

    /// # Errors
    /// Returns the backend's flush error.
    pub fn flush(&self) -> Result<(), crate::Error> {
        self.output.flush()
    }

    #[must_use]
    pub const fn threshold(&self) -> Level {
        self.filter.threshold()
    }

    #[must_use]
    pub const fn filter(&self) -> &LevelFilter {
        &self.filter
    }

    #[must_use]
    pub fn default_tag(&self) -> Option<&str> {
        self.default_tag.as_deref()
    }

    #[must_use]
    pub const fn location_enabled(&self) -> bool {
        self.location
    }
}
