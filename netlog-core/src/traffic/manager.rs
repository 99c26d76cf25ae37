use crate::report::{GlobalSpeeds, TrafficReport};
use crate::traffic::snapshot::{SnapshotPublisher, TrafficSnapshot};
use crate::traffic::types::{DeviceSpeed, Direction};
use std::sync::Arc;

/// Read side shared between the polling loops and whoever presents the data.
///
/// Holds one [`SnapshotPublisher`] per direction. Polling loops publish into
/// it; reporters only read.
#[derive(Debug, Default)]
pub struct TrafficManager {
    upload: SnapshotPublisher,
    download: SnapshotPublisher,
}

impl TrafficManager {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn publisher(&self, direction: Direction) -> &SnapshotPublisher {
        match direction {
            Direction::Upload => &self.upload,
            Direction::Download => &self.download,
        }
    }
}

/// Snapshot API (read-only)
impl TrafficManager {
    pub fn read(&self, direction: Direction) -> Arc<TrafficSnapshot> {
        self.publisher(direction).read()
    }

    /// Known devices of `direction` with their speeds, in table order.
    pub fn snapshot(&self, direction: Direction) -> Vec<DeviceSpeed> {
        self.read(direction).device_speeds()
    }

    /// Smoothed throughput of `direction`, in bytes/second.
    pub fn global_speed(&self, direction: Direction) -> f32 {
        self.read(direction).global_speed
    }

    pub fn report(&self) -> TrafficReport {
        let upload = self.read(Direction::Upload);
        let download = self.read(Direction::Download);

        TrafficReport {
            timestamp: chrono::Utc::now(),
            upload: upload.device_speeds(),
            download: download.device_speeds(),
            speed: GlobalSpeeds {
                upload: upload.global_speed,
                download: download.global_speed,
            },
        }
    }
}
