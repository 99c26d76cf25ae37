use crate::harness::LogFile;
use netlog_core::conf::{NetlogConfig, SourceConfig, validate_config};
use netlog_core::server::{Shutdown, TrafficMonitor};
use netlog_core::traffic::Direction;
use std::thread;
use std::time::{Duration, Instant};

/// Replays both files from the start and polls every 5 ms.
pub fn test_config(upload: &LogFile, download: &LogFile) -> NetlogConfig {
    let cfg = NetlogConfig {
        poll_interval_ms: 5,
        sources: vec![
            SourceConfig {
                direction: Direction::Upload,
                path: upload.path().to_path_buf(),
                from_start: true,
            },
            SourceConfig {
                direction: Direction::Download,
                path: download.path().to_path_buf(),
                from_start: true,
            },
        ],
        ..Default::default()
    };
    validate_config(&cfg).unwrap();
    cfg
}

pub fn start_monitor(upload: &LogFile, download: &LogFile) -> TrafficMonitor {
    TrafficMonitor::start(&test_config(upload, download), Shutdown::new()).unwrap()
}

/// Polls `cond` until it holds or `timeout` passes.
pub fn wait_until(timeout: Duration, mut cond: impl FnMut() -> bool) -> bool {
    let deadline = Instant::now() + timeout;
    loop {
        if cond() {
            return true;
        }
        if Instant::now() >= deadline {
            return false;
        }
        thread::sleep(Duration::from_millis(5));
    }
}
