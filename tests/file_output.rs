use lightlog::output::FileOutput;
use lightlog::{Level, Logger, Output};
use std::fs;
use tempfile::TempDir;

fn file_logger(path: &std::path::Path) -> Logger {
    Logger::builder()
        .level(Level::Debug)
        .file()
        .path(path.to_string_lossy())
        .done()
        .build()
}

#[test]
fn two_info_calls_give_two_lines_in_order() {
    let tmp_dir = TempDir::new().unwrap();
    let path = tmp_dir.path().join("app.log");
    let log = file_logger(&path);

    assert!(log.info_t("APP", "first"));
    assert!(log.info("second"));
    log.flush().unwrap();

    let content = fs::read_to_string(&path).unwrap();
    assert!(content.ends_with('\n'));
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines.len(), 2);

    assert!(lines[0].starts_with("[APP]: "));
    assert!(lines[0].ends_with(" INFO:\t first"));
    assert!(lines[1].as_bytes()[2] == b':');
    assert!(lines[1].ends_with(" INFO:\t second"));
}

#[test]
fn file_lines_carry_no_escapes() {
    let tmp_dir = TempDir::new().unwrap();
    let path = tmp_dir.path().join("plain.log");
    let log = file_logger(&path);

    log.error("boom");
    log.formatted(None, lightlog::Attribute::Bold, lightlog::Color::Red, "styled");

    let content = fs::read_to_string(&path).unwrap();
    assert!(!content.contains('\x1b'));
    assert_eq!(content.lines().count(), 2);
}

#[test]
fn appends_to_existing_file() {
    let tmp_dir = TempDir::new().unwrap();
    let path = tmp_dir.path().join("existing.log");
    fs::write(&path, "earlier\n").unwrap();

    let log = file_logger(&path);
    log.warn("later");

    let content = fs::read_to_string(&path).unwrap();
    assert!(content.starts_with("earlier\n"));
    assert_eq!(content.lines().count(), 2);
}

#[test]
fn creates_missing_parent_directories() {
    let tmp_dir = TempDir::new().unwrap();
    let path = tmp_dir.path().join("nested").join("dir").join("out.log");

    file_logger(&path).info("hello");

    assert!(path.exists());
}

#[test]
fn unopenable_file_drops_records_silently() {
    let tmp_dir = TempDir::new().unwrap();
    // A directory cannot be opened for appending.
    let log = file_logger(tmp_dir.path());

    assert!(!log.error("dropped"));
    assert!(log.info("dropped"));

    let output = FileOutput::new().path(tmp_dir.path().to_string_lossy());
    let record = lightlog::LogRecord::new(Level::Info);
    assert!(matches!(
        output.emit(&record),
        Err(lightlog::Error::Unavailable(_))
    ));
}

#[test]
fn default_path() {
    let output = FileOutput::new();
    assert_eq!(output.log_path(), std::path::Path::new("output.log"));
}
