//! Stream-style logging: build the body piece by piece, write once at the end of scope.

use super::Logger;
use crate::output::LogRecord;
use std::fmt;

/// Holds one record until it is finished or dropped. When the level is filtered out the
/// stream swallows everything, and an empty body is never written.
pub struct RecordStream<'a> {
    logger: &'a Logger,
    record: LogRecord,
    enabled: bool,
    done: bool,
}

impl<'a> RecordStream<'a> {
    pub(super) fn new(logger: &'a Logger, record: LogRecord) -> Self {
        let enabled = logger.is_enabled(record.level);
        Self {
            logger,
            record,
            enabled,
            done: false,
        }
    }

    /// Appends any displayable value.
    pub fn append(&mut self, value: impl fmt::Display) -> &mut Self {
        if self.enabled {
            self.record.append(value);
        }
        self
    }

    /// Leave the console line open.
    #[must_use]
    pub fn no_newline(mut self) -> Self {
        self.record.newline = false;
        self
    }

    #[must_use]
    pub fn body(&self) -> &str {
        &self.record.body
    }

    /// Writes now and returns the level's nominal result.
    pub fn finish(mut self) -> bool {
        self.complete();
        self.record.level.nominal_result()
    }

    fn complete(&mut self) {
        if self.done {
            return;
        }
        self.done = true;
        if !self.enabled || self.record.body.is_empty() {
            return;
        }
        let level = self.record.level;
        let record = std::mem::replace(&mut self.record, LogRecord::new(level));
        self.logger.dispatch(record);
    }
}

impl fmt::Write for RecordStream<'_> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        if self.enabled {
            self.record.body.push_str(s);
        }
        Ok(())
    }
}

impl Drop for RecordStream<'_> {
    fn drop(&mut self) {
        self.complete();
    }
}
