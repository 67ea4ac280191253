//! Append-only log file. The handle is opened on the first write and then kept for the
//! life of the process; if that one attempt fails, every later record is dropped.

use super::{LogRecord, Output};
use std::fs::{self, File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

/// Relative to the working directory unless configured otherwise.
pub const DEFAULT_LOG_FILE: &str = "output.log";

#[derive(Debug)]
pub struct FileOutput {
    path: PathBuf,
    handle: OnceLock<Option<File>>,
}

impl Default for FileOutput {
    fn default() -> Self {
        Self::new()
    }
}

impl FileOutput {
    #[must_use]
    pub fn new() -> Self {
        Self {
            path: PathBuf::from(DEFAULT_LOG_FILE),
            handle: OnceLock::new(),
        }
    }

    /// `~` is expanded to the home directory.
    #[must_use]
    pub fn path(mut self, path: impl AsRef<str>) -> Self {
        self.path = PathBuf::from(shellexpand::tilde(path.as_ref()).as_ref());
        self
    }

    #[must_use]
    pub fn log_path(&self) -> &Path {
        &self.path
    }

    fn open(path: &Path) -> Option<File> {
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
            && !parent.exists()
        {
            fs::create_dir_all(parent).ok()?;
        }
        OpenOptions::new().create(true).append(true).open(path).ok()
    }

    fn handle(&self) -> Option<&File> {
        self.handle.get_or_init(|| Self::open(&self.path)).as_ref()
    }
}

impl Output for FileOutput {
    fn render(&self, record: &LogRecord) -> String {
        let mut line = record.decorated();
        line.push('\n');
        line
    }

    fn write(&self, _record: &LogRecord, rendered: &str) -> Result<(), crate::Error> {
        let Some(mut file) = self.handle() else {
            return Err(crate::Error::Unavailable(self.path.display().to_string()));
        };
        // Single write per line; `&File` needs no lock of our own.
        file.write_all(rendered.as_bytes())?;
        file.flush()?;
        Ok(())
    }

    fn flush(&self) -> Result<(), crate::Error> {
        if let Some(mut file) = self.handle.get().and_then(Option::as_ref) {
            file.flush()?;
        }
        Ok(())
    }
}
