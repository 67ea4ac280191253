//! The eight classic terminal colors, their bright variants, and "default". Foreground and
//! background share the palette and differ only in the SGR base (30 vs 40); the bright
//! variants sit 60 above their base color, which lands them on 90-97 and 100-107.

use crate::level::Level;
use std::fmt::{self, Write as _};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Color {
    Black = 0,
    Red = 1,
    Green = 2,
    Yellow = 3,
    Blue = 4,
    Magenta = 5,
    Cyan = 6,
    White = 7,
    #[default]
    Default = 9,
    BrightBlack = 60,
    BrightRed = 61,
    BrightGreen = 62,
    BrightYellow = 63,
    BrightBlue = 64,
    BrightMagenta = 65,
    BrightCyan = 66,
    BrightWhite = 67,
}

impl Color {
    /// Terminates any active SGR styling so subsequent text returns to the terminal default.
    pub const RESET: &'static str = "\x1b[0m";

    /// SGR parameter selecting this color as foreground.
    #[must_use]
    pub const fn fg_code(self) -> u8 {
        30 + self as u8
    }

    /// SGR parameter selecting this color as background.
    #[must_use]
    pub const fn bg_code(self) -> u8 {
        40 + self as u8
    }

    #[must_use]
    pub const fn is_bright(self) -> bool {
        self as u8 >= 60
    }

    /// The normal-intensity color a bright variant is based on.
    #[must_use]
    pub const fn base(self) -> Self {
        match self {
            Self::BrightBlack => Self::Black,
            Self::BrightRed => Self::Red,
            Self::BrightGreen => Self::Green,
            Self::BrightYellow => Self::Yellow,
            Self::BrightBlue => Self::Blue,
            Self::BrightMagenta => Self::Magenta,
            Self::BrightCyan => Self::Cyan,
            Self::BrightWhite => Self::White,
            other => other,
        }
    }

    /// Conventional color for a severity when nothing explicit was requested.
    #[must_use]
    pub const fn for_level(level: Level) -> Self {
        match level {
            Level::Critical | Level::Error => Self::Red,
            Level::Warn => Self::Yellow,
            Level::Info => Self::Green,
            Level::Verbose => Self::White,
            Level::Debug => Self::Blue,
            Level::None => Self::Default,
        }
    }

    /// RGB triple used by the XcodeColors escape scheme. The plugin has no intensity
    /// channel, so bright variants share their base color's triple.
    #[must_use]
    pub const fn rgb(self) -> (u8, u8, u8) {
        match self.base() {
            Self::Black | Self::Default => (0, 0, 0),
            Self::Red => (255, 0, 0),
            Self::Green => (34, 139, 34),
            Self::Yellow => (255, 215, 0),
            Self::Blue => (0, 0, 255),
            Self::Magenta => (255, 20, 147),
            Self::Cyan => (0, 255, 255),
            Self::White => (255, 255, 255),
            _ => (0, 0, 0),
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Black => "black",
            Self::Red => "red",
            Self::Green => "green",
            Self::Yellow => "yellow",
            Self::Blue => "blue",
            Self::Magenta => "magenta",
            Self::Cyan => "cyan",
            Self::White => "white",
            Self::Default => "default",
            Self::BrightBlack => "bright_black",
            Self::BrightRed => "bright_red",
            Self::BrightGreen => "bright_green",
            Self::BrightYellow => "bright_yellow",
            Self::BrightBlue => "bright_blue",
            Self::BrightMagenta => "bright_magenta",
            Self::BrightCyan => "bright_cyan",
            Self::BrightWhite => "bright_white",
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// XcodeColors wants slightly different shades per level than the plain palette gives.
#[must_use]
pub const fn xcode_level_rgb(level: Level) -> (u8, u8, u8) {
    match level {
        Level::Verbose | Level::None => (0, 0, 0),
        Level::Debug => (0, 0, 255),
        Level::Info => (34, 139, 34),
        Level::Warn => (255, 165, 0),
        Level::Error | Level::Critical => (255, 0, 0),
    }
}

/// Wraps `text` in the SGR sequence `ESC[attr;fgm ESC[bgm` and a trailing reset.
#[must_use]
pub fn colorize(text: &str, attribute: super::Attribute, fg: Color, bg: Color) -> String {
    format!(
        "\x1b[{};{}m\x1b[{}m{text}{}",
        attribute.code(),
        fg.fg_code(),
        bg.bg_code(),
        Color::RESET
    )
}

/// Several attributes at once: `ESC[fg;bg;a1;a2...m`, each attribute emitted once in
/// ascending code order, then a trailing reset.
#[must_use]
pub fn colorize_attributes(
    text: &str,
    attributes: &[super::Attribute],
    fg: Color,
    bg: Color,
) -> String {
    let mut codes = attributes.to_vec();
    codes.sort_unstable();
    codes.dedup();

    let mut out = format!("\x1b[{};{}", fg.fg_code(), bg.bg_code());
    for attribute in codes {
        let _ = write!(out, ";{}", attribute.code());
    }
    out.push('m');
    out.push_str(text);
    out.push_str(Color::RESET);
    out
}

/// XcodeColors plugin format: `ESC[fgR,G,B;` before, `ESC[;` after.
#[must_use]
pub fn colorize_xcode(text: &str, (r, g, b): (u8, u8, u8)) -> String {
    format!("\x1b[fg{r},{g},{b};{text}\x1b[;")
}
