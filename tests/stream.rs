//! Tests for stream-style records.

use lightlog::output::LogRecord;
use lightlog::{Attribute, Color, Level, Logger, Output};
use std::fmt::Write as _;
use std::sync::{Arc, Mutex};

#[derive(Clone, Default)]
struct Capture(Arc<Mutex<Vec<String>>>);

impl Capture {
    fn lines(&self) -> Vec<String> {
        self.0.lock().unwrap().clone()
    }
}

impl Output for Capture {
    fn render(&self, record: &LogRecord) -> String {
        record.decorated()
    }

    fn write(&self, _record: &LogRecord, rendered: &str) -> Result<(), lightlog::Error> {
        self.0.lock().unwrap().push(rendered.to_string());
        Ok(())
    }
}

fn capturing(threshold: Level) -> (Logger, Capture) {
    let capture = Capture::default();
    let log = Logger::builder()
        .level(threshold)
        .output(capture.clone())
        .build();
    (log, capture)
}

#[test]
fn empty_critical_stream_writes_nothing() {
    let (log, capture) = capturing(Level::Debug);

    let stream = log.stream(Level::Critical);
    assert!(!stream.finish());
    assert!(capture.lines().is_empty());
}

#[test]
fn pieces_become_one_line() {
    let (log, capture) = capturing(Level::Debug);

    let mut stream = log.stream_t("JOB", Level::Warn);
    stream.append("retry ").append(3).append('/').append(5);
    write!(stream, " after {}ms", 250).unwrap();
    assert_eq!(stream.body(), "retry 3/5 after 250ms");
    assert!(!stream.finish());

    let lines = capture.lines();
    assert_eq!(lines.len(), 1);
    assert!(lines[0].starts_with("[JOB]: "));
    assert!(lines[0].ends_with("WARN:\t retry 3/5 after 250ms"));
}

#[test]
fn written_on_drop() {
    let (log, capture) = capturing(Level::Debug);
    {
        let mut stream = log.stream(Level::Info);
        stream.append("scoped");
        assert!(capture.lines().is_empty());
    }
    assert_eq!(capture.lines().len(), 1);
}

#[test]
fn filtered_stream_is_a_null_sink() {
    let (log, capture) = capturing(Level::Info);

    let mut stream = log.stream(Level::Debug);
    stream.append("never built");
    assert_eq!(stream.body(), "");
    assert!(stream.finish());
    assert!(capture.lines().is_empty());
}

#[test]
fn styled_stream_has_no_label() {
    let (log, capture) = capturing(Level::Critical);

    let mut stream = log.styled_stream(Attribute::Underline, Color::Magenta);
    stream.append("styled");
    assert!(stream.finish());

    let lines = capture.lines();
    assert_eq!(lines.len(), 1);
    assert!(lines[0].ends_with(" styled"));
    assert!(!lines[0].contains(":\t"));
}
