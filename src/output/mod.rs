//! Backends are interchangeable behind the `Output` trait: the logger holds exactly one and
//! never knows which. Custom backends implement the same trait.

mod file;
mod platform;
mod terminal;

pub use file::{DEFAULT_LOG_FILE, FileOutput};
pub use platform::{DebugChannelOutput, PlatformLog, Priority, SystemLogOutput};
#[cfg(unix)]
pub use platform::{Logd, Syslog};
pub use terminal::{ColorScheme, Stream, TerminalOutput, xcode_colors_enabled};

pub use crate::record::LogRecord;

/// `Send + Sync` so one backend instance can serve every thread.
pub trait Output: Send + Sync {
    /// Turns a record into the exact text this backend writes.
    fn render(&self, record: &LogRecord) -> String;

    /// Delivers already rendered text. The record is passed along for routing decisions
    /// (stdout vs stderr, native priority).
    ///
    /// # Errors
    /// The backend has no destination or the underlying write failed.
    fn write(&self, record: &LogRecord, rendered: &str) -> Result<(), crate::Error>;

    /// Render, then write.
    ///
    /// # Errors
    /// Whatever [`Output::write`] reports.
    fn emit(&self, record: &LogRecord) -> Result<(), crate::Error> {
        let rendered = self.render(record);
        self.write(record, &rendered)
    }

    /// Most backends flush on every write already.
    ///
    /// # Errors
    /// I/O errors from the underlying sink.
    fn flush(&self) -> Result<(), crate::Error> {
        Ok(())
    }
}
