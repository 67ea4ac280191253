//! Tests for log level functionality.

use lightlog::output::LogRecord;
use lightlog::{Level, Logger, Output, ParseLevelError};
use std::sync::{Arc, Mutex};

#[test]
fn level_ordering() {
    assert!(Level::Critical < Level::Error);
    assert!(Level::Error < Level::Warn);
    assert!(Level::Warn < Level::Info);
    assert!(Level::Info < Level::Verbose);
    assert!(Level::Verbose < Level::Debug);
    assert!(Level::Debug < Level::None);
}

#[test]
fn level_labels() {
    let labels: Vec<&str> = Level::all().iter().map(|l| l.label()).collect();
    assert_eq!(labels, ["CRIT", "ERR", "WARN", "INFO", "VERB", "DBG"]);
    assert_eq!(Level::None.label(), "");
    assert_eq!(Level::Error.to_string(), "ERR");
}

#[test]
fn canonical_names_round_trip() {
    for level in Level::all() {
        assert_eq!(level.name().parse::<Level>(), Ok(level));
    }
    assert_eq!("WARNING".parse::<Level>(), Ok(Level::Warn));
}

#[test]
fn labels_do_not_round_trip() {
    assert!("ERR".parse::<Level>().is_err());
    assert!("WARN".parse::<Level>().is_err());
}

#[test]
fn parsing_is_case_sensitive() {
    let err = "info".parse::<Level>().unwrap_err();
    assert_eq!(err.input(), "info");
    assert_eq!(err.to_string(), "unknown logging level 'info'");
    assert!("NONE".parse::<Level>().is_err());
}

#[test]
fn parse_error_converts_to_crate_error() {
    let parse_err: ParseLevelError = "bogus".parse::<Level>().unwrap_err();
    let err: lightlog::Error = parse_err.into();
    assert!(matches!(err, lightlog::Error::InvalidLevel(ref s) if s == "bogus"));
}

#[test]
fn nominal_results() {
    assert!(!Level::Critical.nominal_result());
    assert!(!Level::Error.nominal_result());
    assert!(!Level::Warn.nominal_result());
    assert!(Level::Info.nominal_result());
    assert!(Level::Verbose.nominal_result());
    assert!(Level::Debug.nominal_result());
    assert!(Level::None.nominal_result());
}

#[test]
fn level_default() {
    assert_eq!(Level::default(), Level::Info);
}

#[derive(Clone, Default)]
struct Capture(Arc<Mutex<Vec<String>>>);

impl Output for Capture {
    fn render(&self, record: &LogRecord) -> String {
        record.decorated()
    }

    fn write(&self, _record: &LogRecord, rendered: &str) -> Result<(), lightlog::Error> {
        self.0.lock().unwrap().push(rendered.to_string());
        Ok(())
    }
}

#[test]
fn lenient_parse_falls_back_to_info_with_warning() {
    let capture = Capture::default();
    let log = Logger::builder().output(capture.clone()).build();

    assert_eq!(log.level_from_string("WARNING"), Level::Warn);
    assert!(capture.0.lock().unwrap().is_empty());

    assert_eq!(log.level_from_string("bogus"), Level::Info);
    let lines = capture.0.lock().unwrap();
    assert_eq!(lines.len(), 1);
    assert!(lines[0].starts_with("[lightlog]: "));
    assert!(lines[0].contains("WARN:\t Unknown logging level 'bogus'. Using INFO level as default."));
}

#[test]
fn lenient_parse_warning_respects_threshold() {
    let capture = Capture::default();
    let log = Logger::builder()
        .level(Level::Error)
        .output(capture.clone())
        .build();

    assert_eq!(log.level_from_string("bogus"), Level::Info);
    assert!(capture.0.lock().unwrap().is_empty());
}
