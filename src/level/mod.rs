//! Severity levels that gate which records reach the active backend.

use std::fmt;
use std::str::FromStr;

/// Ordered by decreasing urgency: a lower discriminant is more severe, so a record passes
/// the filter when `level <= threshold`. `None` sits outside that ordering and marks
/// explicitly styled output that never goes through the threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum Level {
    /// The process cannot continue in a meaningful way.
    Critical = 0,
    /// An operation failed.
    Error = 1,
    /// Something unexpected happened that the program recovered from.
    Warn = 2,
    /// Normal operational milestones.
    #[default]
    Info = 3,
    /// Extra detail for tracking program flow.
    Verbose = 4,
    /// Developer diagnostics.
    Debug = 5,
    /// Untagged output: no label, no threshold.
    None = 1000,
}

impl Level {
    /// Short fixed label rendered in front of every record.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Critical => "CRIT",
            Self::Error => "ERR",
            Self::Warn => "WARN",
            Self::Info => "INFO",
            Self::Verbose => "VERB",
            Self::Debug => "DBG",
            Self::None => "",
        }
    }

    /// Canonical full name, the only spelling `FromStr` accepts.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Critical => "CRITICAL",
            Self::Error => "ERROR",
            Self::Warn => "WARNING",
            Self::Info => "INFO",
            Self::Verbose => "VERBOSE",
            Self::Debug => "DEBUG",
            Self::None => "NONE",
        }
    }

    /// Level identity encoded as a boolean: `true` for INFO and below, `false` for WARN
    /// and above. Every level call returns this, whether or not the record was written.
    #[must_use]
    pub const fn nominal_result(self) -> bool {
        !matches!(self, Self::Critical | Self::Error | Self::Warn)
    }

    /// ERROR and CRITICAL go to stderr on the console backends.
    #[must_use]
    pub const fn is_error(self) -> bool {
        matches!(self, Self::Critical | Self::Error)
    }

    /// Position in per-level tables; `None` has no slot.
    #[must_use]
    pub const fn index(self) -> Option<usize> {
        match self {
            Self::None => None,
            level => Some(level as usize),
        }
    }

    /// The six severities, most severe first.
    #[must_use]
    pub const fn all() -> [Self; 6] {
        [
            Self::Critical,
            Self::Error,
            Self::Warn,
            Self::Info,
            Self::Verbose,
            Self::Debug,
        ]
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Returned by `FromStr` so callers can tell an unknown name apart from a valid one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseLevelError(String);

impl ParseLevelError {
    /// The rejected input.
    #[must_use]
    pub fn input(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ParseLevelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown logging level '{}'", self.0)
    }
}

impl std::error::Error for ParseLevelError {}

impl FromStr for Level {
    type Err = ParseLevelError;

    /// Case-sensitive: only the canonical upper-case names are accepted.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "DEBUG" => Ok(Self::Debug),
            "VERBOSE" => Ok(Self::Verbose),
            "INFO" => Ok(Self::Info),
            "WARNING" => Ok(Self::Warn),
            "ERROR" => Ok(Self::Error),
            "CRITICAL" => Ok(Self::Critical),
            _ => Err(ParseLevelError(s.to_string())),
        }
    }
}

/// Lenient parse through the process-wide logger: unknown names fall back to INFO and a
/// warning is written through the same pipeline.
#[must_use]
pub fn from_string(name: &str) -> Level {
    crate::global::logger().level_from_string(name)
}
