//! The gate between formatting and dispatch. Only the level is ever inspected.

use crate::level::Level;

/// Threshold test: `None` always passes, everything else passes when it is at least as
/// severe as `threshold`.
#[must_use]
pub fn is_enabled(level: Level, threshold: Level) -> bool {
    level == Level::None || level <= threshold
}

/// Threshold plus per-level switches. Fixed once the logger is built.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LevelFilter {
    threshold: Level,
    enabled: [bool; 6],
}

impl Default for LevelFilter {
    fn default() -> Self {
        Self::new(Level::Debug)
    }
}

impl LevelFilter {
    /// Every level at or above `threshold` in severity is enabled.
    #[must_use]
    pub const fn new(threshold: Level) -> Self {
        Self {
            threshold,
            enabled: [true; 6],
        }
    }

    #[must_use]
    pub const fn threshold(&self) -> Level {
        self.threshold
    }

    /// Switches a single level family on or off, independent of the threshold.
    #[must_use]
    pub const fn with_level(mut self, level: Level, on: bool) -> Self {
        if let Some(i) = level.index() {
            self.enabled[i] = on;
        }
        self
    }

    #[must_use]
    pub fn is_enabled(&self, level: Level) -> bool {
        match level.index() {
            None => true,
            Some(i) => self.enabled[i] && is_enabled(level, self.threshold),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn threshold_admits_more_severe() {
        assert!(is_enabled(Level::Error, Level::Info));
        assert!(is_enabled(Level::Info, Level::Info));
        assert!(!is_enabled(Level::Debug, Level::Warn));
    }

    #[test]
    fn none_bypasses_threshold() {
        assert!(is_enabled(Level::None, Level::Critical));
        let filter = LevelFilter::new(Level::Critical);
        assert!(filter.is_enabled(Level::None));
    }

    #[test]
    fn per_level_switch() {
        let filter = LevelFilter::new(Level::Debug).with_level(Level::Verbose, false);
        assert!(filter.is_enabled(Level::Debug));
        assert!(!filter.is_enabled(Level::Verbose));
        assert!(filter.is_enabled(Level::Critical));
    }
}
