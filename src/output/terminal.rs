//! Console output. Errors go to stderr, everything else to stdout, and every line is flushed
//! immediately so nothing sits in a buffer when the process dies.

use crate::fmt::{colorize, colorize_attributes, colorize_xcode, xcode_level_rgb};
use crate::level::Level;

use super::{LogRecord, Output};
use std::io::{self, Write};
use std::sync::OnceLock;

/// Environment variable the XcodeColors plugin sets when it is installed.
pub const XCODE_COLORS_ENV: &str = "XcodeColors";

/// Which escape dialect the colorized console speaks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorScheme {
    /// SGR sequences understood by every ANSI terminal.
    #[default]
    Ansi,
    /// `ESC[fgR,G,B;` sequences for the Xcode console plugin.
    Xcode,
}

/// Standard stream a record is routed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stream {
    Stdout,
    Stderr,
}

impl Stream {
    #[must_use]
    pub const fn for_level(level: Level) -> Self {
        if level.is_error() {
            Self::Stderr
        } else {
            Self::Stdout
        }
    }
}

/// The plugin is present only when the variable is exactly `YES`.
#[must_use]
pub fn xcode_colors_enabled(value: Option<&str>) -> bool {
    value == Some("YES")
}

fn xcode_colors_available() -> bool {
    static AVAILABLE: OnceLock<bool> = OnceLock::new();
    *AVAILABLE.get_or_init(|| {
        xcode_colors_enabled(std::env::var(XCODE_COLORS_ENV).ok().as_deref())
    })
}

/// Colorized by default; `plain()` gives the same routing without escapes.
#[derive(Debug, Clone)]
pub struct TerminalOutput {
    colors_enabled: bool,
    scheme: ColorScheme,
}

impl Default for TerminalOutput {
    fn default() -> Self {
        Self::new()
    }
}

impl TerminalOutput {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            colors_enabled: true,
            scheme: ColorScheme::Ansi,
        }
    }

    #[must_use]
    pub const fn plain() -> Self {
        Self {
            colors_enabled: false,
            scheme: ColorScheme::Ansi,
        }
    }

    /// Piped output and consoles without escape support need colors off.
    #[must_use]
    pub const fn colors(mut self, enabled: bool) -> Self {
        self.colors_enabled = enabled;
        self
    }

    /// Selecting `Xcode` disables coloring outright when the plugin is not detected.
    #[must_use]
    pub fn scheme(self, scheme: ColorScheme) -> Self {
        let available = scheme != ColorScheme::Xcode || xcode_colors_available();
        self.scheme_with(scheme, available)
    }

    /// [`Self::scheme`] with the plugin detection result supplied by the caller.
    #[must_use]
    pub const fn scheme_with(mut self, scheme: ColorScheme, available: bool) -> Self {
        self.scheme = scheme;
        if !available {
            self.colors_enabled = false;
        }
        self
    }

    #[must_use]
    pub const fn colors_enabled(&self) -> bool {
        self.colors_enabled
    }

    fn paint(&self, record: &LogRecord, message: &str) -> String {
        let (attributes, fg, bg) = record.style();
        match self.scheme {
            ColorScheme::Ansi => match attributes {
                [attribute] => colorize(message, *attribute, fg, bg),
                several => colorize_attributes(message, several, fg, bg),
            },
            ColorScheme::Xcode => {
                let rgb = if record.level == Level::None {
                    fg.rgb()
                } else {
                    xcode_level_rgb(record.level)
                };
                colorize_xcode(message, rgb)
            }
        }
    }
}

impl Output for TerminalOutput {
    fn render(&self, record: &LogRecord) -> String {
        let message = record.message();
        let mut line = if self.colors_enabled {
            let painted = self.paint(record, &message);
            record.decorate(&painted)
        } else {
            record.decorate(&message)
        };
        if record.newline {
            line.push('\n');
        }
        line
    }

    fn write(&self, record: &LogRecord, rendered: &str) -> Result<(), crate::Error> {
        match Stream::for_level(record.level) {
            Stream::Stderr => {
                let mut err = io::stderr().lock();
                err.write_all(rendered.as_bytes())?;
                err.flush()?;
            }
            Stream::Stdout => {
                let mut out = io::stdout().lock();
                out.write_all(rendered.as_bytes())?;
                out.flush()?;
            }
        }
        Ok(())
    }

    fn flush(&self) -> Result<(), crate::Error> {
        io::stdout().flush()?;
        io::stderr().flush()?;
        Ok(())
    }
}
