//! Stepwise construction of a [`Logger`]. Exactly one backend ends up active: every
//! backend method replaces the previous choice, and nothing chosen means the platform
//! default.

use super::Logger;
use crate::filter::LevelFilter;
use crate::level::Level;
use crate::output::{
    ColorScheme, DebugChannelOutput, FileOutput, Output, PlatformLog, SystemLogOutput,
    TerminalOutput,
};

/// Android logs to the system log, Windows to a plain console, everything else to a
/// colorized terminal.
#[must_use]
pub fn platform_default_output() -> Box<dyn Output> {
    #[cfg(target_os = "android")]
    {
        Box::new(SystemLogOutput::new(crate::output::Logd::new()))
    }
    #[cfg(windows)]
    {
        Box::new(TerminalOutput::plain())
    }
    #[cfg(not(any(target_os = "android", windows)))]
    {
        Box::new(TerminalOutput::new())
    }
}

#[derive(Default)]
pub struct LoggerBuilder {
    pub(super) filter: LevelFilter,
    pub(super) output: Option<Box<dyn Output>>,
    pub(super) default_tag: Option<String>,
    pub(super) location: bool,
}

impl LoggerBuilder {
    /// All levels enabled, no tag, no location prefix.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Least severe level still written.
    #[must_use]
    pub const fn level(mut self, threshold: Level) -> Self {
        self.filter = LevelFilter::new(threshold);
        self
    }

    /// Turns one level family on or off on top of the threshold.
    #[must_use]
    pub const fn enable(mut self, level: Level, on: bool) -> Self {
        self.filter = self.filter.with_level(level, on);
        self
    }

    #[must_use]
    pub const fn filter(mut self, filter: LevelFilter) -> Self {
        self.filter = filter;
        self
    }

    /// Tag applied to records logged without one.
    #[must_use]
    pub fn tag(mut self, tag: impl Into<String>) -> Self {
        self.default_tag = Some(tag.into());
        self
    }

    /// Prefix every body with `[file:line/function] ` when the call site is known.
    #[must_use]
    pub const fn location(mut self, enabled: bool) -> Self {
        self.location = enabled;
        self
    }

    #[must_use]
    pub fn terminal(self) -> TerminalBuilder {
        TerminalBuilder {
            parent: self,
            output: TerminalOutput::new(),
        }
    }

    #[must_use]
    pub fn file(self) -> FileBuilder {
        FileBuilder {
            parent: self,
            output: FileOutput::new(),
        }
    }

    #[must_use]
    pub fn system_log(self, channel: impl PlatformLog + 'static) -> Self {
        self.output(SystemLogOutput::new(channel))
    }

    #[must_use]
    pub fn debug_channel(self, channel: impl PlatformLog + 'static) -> Self {
        self.output(DebugChannelOutput::new(channel))
    }

    /// Custom backend.
    #[must_use]
    pub fn output(self, output: impl Output + 'static) -> Self {
        self.boxed_output(Box::new(output))
    }

    #[must_use]
    pub fn boxed_output(mut self, output: Box<dyn Output>) -> Self {
        self.output = Some(output);
        self
    }

    #[must_use]
    pub fn build(self) -> Logger {
        Logger {
            filter: self.filter,
            output: self.output.unwrap_or_else(platform_default_output),
            default_tag: self.default_tag,
            location: self.location,
        }
    }
}

pub struct TerminalBuilder {
    parent: LoggerBuilder,
    output: TerminalOutput,
}

impl TerminalBuilder {
    #[must_use]
    pub const fn colors(mut self, enabled: bool) -> Self {
        self.output = self.output.colors(enabled);
        self
    }

    #[must_use]
    pub fn scheme(mut self, scheme: ColorScheme) -> Self {
        self.output = self.output.scheme(scheme);
        self
    }

    /// Sub-builder consumes self, so there must be a way back.
    #[must_use]
    pub fn done(self) -> LoggerBuilder {
        self.parent.output(self.output)
    }
}

pub struct FileBuilder {
    parent: LoggerBuilder,
    output: FileOutput,
}

impl FileBuilder {
    /// Defaults to `output.log` in the working directory.
    #[must_use]
    pub fn path(mut self, path: impl AsRef<str>) -> Self {
        self.output = self.output.path(path);
        self
    }

    #[must_use]
    pub fn done(self) -> LoggerBuilder {
        self.parent.output(self.output)
    }
}
