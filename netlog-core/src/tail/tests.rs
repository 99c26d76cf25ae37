use crate::tail::{LineSource, LogTail, StartPosition, TailError};
use pretty_assertions::assert_eq;
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::Path;
use tempfile::tempdir;

fn append(path: &Path, data: &[u8]) {
    let mut f = OpenOptions::new().append(true).open(path).unwrap();
    f.write_all(data).unwrap();
}

#[test]
fn starts_at_end_by_default() {
    // Arrange
    let dir = tempdir().unwrap();
    let path = dir.path().join("fw.log");
    fs::write(&path, "old line\n").unwrap();
    let mut tail = LogTail::open(&path, StartPosition::default()).unwrap();

    // Act
    append(&path, b"new line\n");
    let lines = tail.poll_lines().unwrap();

    // Assert
    assert_eq!(lines, vec!["new line".to_string()]);
}

#[test]
fn beginning_replays_existing_lines() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("fw.log");
    fs::write(&path, "one\ntwo\n").unwrap();
    let mut tail = LogTail::open(&path, StartPosition::Beginning).unwrap();

    let lines = tail.poll_lines().unwrap();

    assert_eq!(lines, vec!["one".to_string(), "two".to_string()]);
    assert_eq!(tail.offset(), 8);
}

#[test]
fn nothing_new_yields_empty_batch() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("fw.log");
    fs::write(&path, "").unwrap();
    let mut tail = LogTail::open(&path, StartPosition::End).unwrap();

    assert!(tail.poll_lines().unwrap().is_empty());
    assert!(tail.poll_lines().unwrap().is_empty());
}

#[test]
fn partial_line_waits_for_newline() {
    // Arrange
    let dir = tempdir().unwrap();
    let path = dir.path().join("fw.log");
    fs::write(&path, "").unwrap();
    let mut tail = LogTail::open(&path, StartPosition::End).unwrap();

    // Act
    append(&path, b"SRC=10.0.0.1 DST=8.8");
    let first = tail.poll_lines().unwrap();
    append(&path, b".8.8 LEN=52\nSRC=");
    let second = tail.poll_lines().unwrap();

    // Assert
    assert!(first.is_empty());
    assert_eq!(second, vec!["SRC=10.0.0.1 DST=8.8.8.8 LEN=52".to_string()]);
}

#[test]
fn crlf_and_blank_lines_are_cleaned() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("fw.log");
    fs::write(&path, "").unwrap();
    let mut tail = LogTail::open(&path, StartPosition::End).unwrap();

    append(&path, b"a\r\n\n   \nb\n");

    assert_eq!(
        tail.poll_lines().unwrap(),
        vec!["a".to_string(), "b".to_string()]
    );
}

#[test]
fn invalid_utf8_is_replaced() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("fw.log");
    fs::write(&path, "").unwrap();
    let mut tail = LogTail::open(&path, StartPosition::End).unwrap();

    append(&path, b"SRC=10.0.0.1 \xff\n");

    assert_eq!(
        tail.poll_lines().unwrap(),
        vec!["SRC=10.0.0.1 \u{FFFD}".to_string()]
    );
}

#[test]
fn truncated_file_is_read_from_start() {
    // Arrange
    let dir = tempdir().unwrap();
    let path = dir.path().join("fw.log");
    fs::write(&path, "first line\nsecond line\n").unwrap();
    let mut tail = LogTail::open(&path, StartPosition::Beginning).unwrap();
    assert_eq!(tail.poll_lines().unwrap().len(), 2);

    // Act
    fs::write(&path, "fresh\n").unwrap();
    let lines = tail.poll_lines().unwrap();

    // Assert
    assert_eq!(lines, vec!["fresh".to_string()]);
    assert_eq!(tail.offset(), 6);
}

#[test]
fn missing_file_fails_to_open() {
    let dir = tempdir().unwrap();

    let err = LogTail::open(dir.path().join("absent.log"), StartPosition::End).unwrap_err();

    assert!(matches!(err, TailError::Open { .. }));
}
