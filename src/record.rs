//! One log statement in flight: metadata plus the message body built up by formatting
//! calls, and the prepend operations that turn the body into a finished line.

use crate::fmt::{Attribute, Color, Location, prepend_location};
use crate::level::Level;
use chrono::Local;
use std::fmt;

const PLAIN: &[Attribute] = &[Attribute::Reset];

/// Local wall-clock time with millisecond precision, e.g. `14:03:27.512`.
#[must_use]
pub fn current_time() -> String {
    Local::now().format("%H:%M:%S%.3f").to_string()
}

/// Carries everything a backend needs to render one line. Lives for a single statement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogRecord {
    /// Source/category label; `None` renders no tag at all.
    pub tag: Option<String>,
    pub level: Level,
    /// Only honored when `level` is `Level::None`; otherwise the level decides the style.
    /// Empty means no emphasis.
    pub attributes: Vec<Attribute>,
    pub color: Color,
    pub background: Color,
    /// Console backends skip the line terminator when `false`.
    pub newline: bool,
    pub body: String,
    pub location: Option<Location>,
}

impl LogRecord {
    #[must_use]
    pub const fn new(level: Level) -> Self {
        Self {
            tag: None,
            level,
            attributes: Vec::new(),
            color: Color::Default,
            background: Color::Default,
            newline: true,
            body: String::new(),
            location: None,
        }
    }

    /// Untagged-level record with an explicit look.
    #[must_use]
    pub fn styled(attribute: Attribute, color: Color, background: Color) -> Self {
        Self::styled_with(&[attribute], color, background)
    }

    /// Like [`Self::styled`] with any number of attributes switched on together.
    #[must_use]
    pub fn styled_with(attributes: &[Attribute], color: Color, background: Color) -> Self {
        Self {
            tag: None,
            level: Level::None,
            attributes: attributes.to_vec(),
            color,
            background,
            newline: true,
            body: String::new(),
            location: None,
        }
    }

    #[must_use]
    pub fn tag(mut self, tag: Option<&str>) -> Self {
        self.tag = tag.map(ToString::to_string);
        self
    }

    #[must_use]
    pub const fn newline(mut self, newline: bool) -> Self {
        self.newline = newline;
        self
    }

    #[must_use]
    pub const fn location(mut self, location: Option<Location>) -> Self {
        self.location = location;
        self
    }

    /// Replaces the body with the rendered format arguments.
    pub fn format(&mut self, args: fmt::Arguments<'_>) {
        self.body.clear();
        let _ = fmt::Write::write_fmt(&mut self.body, args);
    }

    /// Appends any displayable value to the body.
    pub fn append(&mut self, value: impl fmt::Display) -> &mut Self {
        let _ = fmt::Write::write_fmt(&mut self.body, format_args!("{value}"));
        self
    }

    /// Style the console should apply to the body: the level's color for severities, the
    /// explicit attributes/colors for `Level::None`.
    #[must_use]
    pub fn style(&self) -> (&[Attribute], Color, Color) {
        match self.level {
            Level::None if !self.attributes.is_empty() => {
                (self.attributes.as_slice(), self.color, self.background)
            }
            Level::None => (PLAIN, self.color, self.background),
            level => (PLAIN, Color::for_level(level), Color::Default),
        }
    }

    /// Body with the location prefix applied, if any.
    #[must_use]
    pub fn message(&self) -> String {
        let mut message = self.body.clone();
        if let Some(location) = &self.location {
            prepend_location(location, &mut message);
        }
        message
    }

    /// Inserts `HH:MM:SS.mmm ` and, for real severities, `LABEL:\t ` at the front.
    pub fn prepend_timestamp_and_level(&self, body: &mut String) {
        self.prepend_header_at(body, &current_time());
    }

    /// Same as [`Self::prepend_timestamp_and_level`] with a caller-supplied timestamp.
    pub fn prepend_header_at(&self, body: &mut String, timestamp: &str) {
        if self.level != Level::None {
            body.insert_str(0, ":\t ");
            body.insert_str(0, self.level.label());
        }
        body.insert(0, ' ');
        body.insert_str(0, timestamp);
    }

    /// Inserts `[tag]: ` at the very front when a tag is present.
    pub fn prepend_tag(&self, body: &mut String) {
        if let Some(tag) = &self.tag {
            body.insert_str(0, "]: ");
            body.insert_str(0, tag);
            body.insert(0, '[');
        }
    }

    /// `[tag]: HH:MM:SS.mmm LABEL:\t ` followed by `message`. The tag always ends up leftmost.
    #[must_use]
    pub fn decorate(&self, message: &str) -> String {
        let mut line = message.to_string();
        self.prepend_timestamp_and_level(&mut line);
        self.prepend_tag(&mut line);
        line
    }

    /// Fully decorated line without a terminator.
    #[must_use]
    pub fn decorated(&self) -> String {
        self.decorate(&self.message())
    }
}

impl fmt::Write for LogRecord {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.body.push_str(s);
        Ok(())
    }
}
