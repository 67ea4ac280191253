//! Logging the current call stack as one multi-line record.

use super::Logger;
use crate::level::Level;
use std::backtrace::Backtrace;

/// Frames from the capture machinery itself are noise.
const SKIPPED: &[&str] = &[
    "std::backtrace",
    "<std::backtrace",
    "lightlog::logger::stacktrace",
    "lightlog::logger::Logger::stacktrace",
];

impl Logger {
    /// Logs up to `max_frames` frames of the caller's stack.
    pub fn stacktrace(&self, tag: Option<&str>, level: Level, max_frames: usize) -> bool {
        if !self.is_enabled(level) {
            return level.nominal_result();
        }
        let trace = Backtrace::force_capture().to_string();
        self.log_at(level, tag, None, format_backtrace(&trace, max_frames))
    }
}

/// Reshapes `Backtrace`'s display output into `\n  symbol at file:line` lines.
#[must_use]
pub fn format_backtrace(trace: &str, max_frames: usize) -> String {
    let mut frames: Vec<String> = Vec::new();
    for line in trace.lines() {
        let trimmed = line.trim_start();
        if let Some(location) = trimmed.strip_prefix("at ") {
            if let Some(last) = frames.last_mut() {
                last.push_str(" at ");
                last.push_str(location);
            }
            continue;
        }
        let Some((index, symbol)) = trimmed.split_once(": ") else {
            continue;
        };
        if index.parse::<usize>().is_err() {
            continue;
        }
        frames.push(format!("  {symbol}"));
    }

    let kept: Vec<&String> = frames
        .iter()
        .filter(|f| !SKIPPED.iter().any(|s| f.trim_start().starts_with(s)))
        .take(max_frames)
        .collect();

    let mut out = String::from("\n");
    if kept.is_empty() {
        out.push_str("<empty, possibly corrupt>");
        return out;
    }
    for frame in kept {
        out.push_str(frame);
        out.push('\n');
    }
    out
}
