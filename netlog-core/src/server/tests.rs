use crate::server::{BatchSummary, DirectionPoller, PidFile, Shutdown};
use crate::tail::{LineSource, TailError};
use crate::traffic::{Direction, TrafficManager};
use pretty_assertions::assert_eq;
use std::collections::VecDeque;
use std::fs;
use std::net::Ipv4Addr;
use std::sync::Arc;
use std::time::Duration;
use tempfile::tempdir;

/// Hands out one scripted batch per poll.
struct ScriptedSource {
    batches: VecDeque<Result<Vec<String>, TailError>>,
}

impl ScriptedSource {
    fn new() -> Self {
        Self {
            batches: VecDeque::new(),
        }
    }

    fn lines(mut self, lines: &[&str]) -> Self {
        self.batches
            .push_back(Ok(lines.iter().map(|l| l.to_string()).collect()));
        self
    }

    fn failure(mut self) -> Self {
        self.batches.push_back(Err(TailError::read(
            "scripted.log",
            std::io::Error::other("disk went away"),
        )));
        self
    }
}

impl LineSource for ScriptedSource {
    fn poll_lines(&mut self) -> Result<Vec<String>, TailError> {
        self.batches.pop_front().unwrap_or_else(|| Ok(Vec::new()))
    }
}

fn packet(src: &str, dst: &str, len: u64) -> String {
    format!("kernel: [FW] IN=br0 OUT=eth0 SRC={src} DST={dst} LEN={len} PROTO=UDP")
}

#[test]
fn batch_is_published_after_ingest() {
    // Arrange
    let manager = Arc::new(TrafficManager::new());
    let a = packet("192.168.1.10", "1.1.1.1", 60);
    let b = packet("192.168.1.11", "1.1.1.1", 40);
    let source = ScriptedSource::new().lines(&[&a, &b]);
    let mut poller = DirectionPoller::new(Direction::Upload, source, manager.clone());

    // Act
    let summary = poller.poll_once().unwrap();

    // Assert
    assert_eq!(
        summary,
        BatchSummary {
            lines: 2,
            ingested: 2,
            skipped: 0,
            grew: 2,
        }
    );

    let published = manager.read(Direction::Upload);
    assert_eq!(published.devices.len(), 2);
    assert_eq!(
        published
            .devices
            .get(Ipv4Addr::new(192, 168, 1, 10))
            .unwrap()
            .total_bytes(),
        60
    );
    assert!(manager.read(Direction::Download).devices.is_empty());
}

#[test]
fn unparsable_lines_are_skipped() {
    let manager = Arc::new(TrafficManager::new());
    let good = packet("192.168.1.10", "1.1.1.1", 60);
    let source = ScriptedSource::new().lines(&["garbage", &good, "SRC=1.2.3 DST=1.1.1.1 LEN=5"]);
    let mut poller = DirectionPoller::new(Direction::Upload, source, manager.clone());

    let summary = poller.poll_once().unwrap();

    assert_eq!(summary.lines, 3);
    assert_eq!(summary.ingested, 1);
    assert_eq!(summary.skipped, 2);
    assert_eq!(manager.read(Direction::Upload).devices.len(), 1);
}

#[test]
fn batch_of_only_bad_lines_publishes_nothing() {
    let manager = Arc::new(TrafficManager::new());
    let before = manager.read(Direction::Download);
    let source = ScriptedSource::new().lines(&["nope", "still nope"]);
    let mut poller = DirectionPoller::new(Direction::Download, source, manager.clone());

    poller.poll_once().unwrap();

    assert!(Arc::ptr_eq(&before, &manager.read(Direction::Download)));
}

#[test]
fn empty_poll_publishes_nothing() {
    let manager = Arc::new(TrafficManager::new());
    let before = manager.read(Direction::Upload);
    let mut poller = DirectionPoller::new(Direction::Upload, ScriptedSource::new(), manager.clone());

    let summary = poller.poll_once().unwrap();

    assert_eq!(summary, BatchSummary::default());
    assert!(Arc::ptr_eq(&before, &manager.read(Direction::Upload)));
}

#[test]
fn read_failure_is_not_fatal() {
    // Arrange
    let manager = Arc::new(TrafficManager::new());
    let good = packet("192.168.1.10", "1.1.1.1", 60);
    let source = ScriptedSource::new().failure().lines(&[&good]);
    let mut poller = DirectionPoller::new(Direction::Upload, source, manager.clone());

    // Act
    let first = poller.poll_once().unwrap();
    let second = poller.poll_once().unwrap();

    // Assert
    assert_eq!(first, BatchSummary::default());
    assert_eq!(second.ingested, 1);
    assert_eq!(manager.snapshot(Direction::Upload).len(), 1);
}

#[test]
fn download_lines_are_keyed_by_destination() {
    let manager = Arc::new(TrafficManager::new());
    let line = packet("1.1.1.1", "192.168.1.10", 1500);
    let source = ScriptedSource::new().lines(&[&line]);
    let mut poller = DirectionPoller::new(Direction::Download, source, manager.clone());

    poller.poll_once().unwrap();

    let speeds = manager.snapshot(Direction::Download);
    assert_eq!(speeds.len(), 1);
    assert_eq!(speeds[0].address, Ipv4Addr::new(192, 168, 1, 10));
}

#[test]
fn later_batches_build_on_earlier_ones() {
    let manager = Arc::new(TrafficManager::new());
    let a = packet("192.168.1.10", "1.1.1.1", 60);
    let b = packet("192.168.1.10", "9.9.9.9", 40);
    let source = ScriptedSource::new().lines(&[&a]).lines(&[&a, &b]);
    let mut poller = DirectionPoller::new(Direction::Upload, source, manager.clone());

    poller.poll_once().unwrap();
    let second = poller.poll_once().unwrap();

    assert_eq!(second.grew, 0);
    let published = manager.read(Direction::Upload);
    let node = published.devices.get(Ipv4Addr::new(192, 168, 1, 10)).unwrap();
    assert_eq!(node.total_bytes(), 160);
    assert_eq!(node.peers().len(), 2);
    assert_eq!(poller.aggregator().table().len(), 1);
}

#[test]
fn run_returns_once_shutdown_is_requested() {
    let manager = Arc::new(TrafficManager::new());
    let line = packet("192.168.1.10", "1.1.1.1", 60);
    let source = ScriptedSource::new().lines(&[&line]);
    let poller = DirectionPoller::new(Direction::Upload, source, manager.clone());
    let shutdown = Shutdown::new();
    shutdown.request();

    let result = poller.run(&shutdown, Duration::from_millis(1));

    assert!(result.is_ok());
    // Flag was set before the first batch.
    assert!(manager.snapshot(Direction::Upload).is_empty());
}

#[test]
fn shutdown_request_reports_previous_state() {
    let shutdown = Shutdown::new();
    let clone = shutdown.clone();

    assert!(!shutdown.is_requested());
    assert!(!clone.request());
    assert!(shutdown.is_requested());
    assert!(shutdown.request());
}

#[test]
fn pid_file_is_removed_on_drop() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("netlog.pid");

    let pid = PidFile::create(&path).unwrap();
    let contents = fs::read_to_string(&path).unwrap();
    assert_eq!(contents.trim(), std::process::id().to_string());

    drop(pid);
    assert!(!path.exists());
}

#[test]
fn pid_file_in_missing_directory_fails() {
    let dir = tempdir().unwrap();

    let result = PidFile::create(dir.path().join("no/such/dir/netlog.pid"));

    assert!(result.is_err());
}
