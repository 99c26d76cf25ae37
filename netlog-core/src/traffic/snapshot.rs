use crate::traffic::aggregator::TrafficAggregator;
use crate::traffic::table::DeviceTable;
use crate::traffic::throughput::GlobalSpeedWindow;
use crate::traffic::types::DeviceSpeed;
use arc_swap::ArcSwap;
use std::sync::Arc;

/// Immutable copy of one direction's device table and global speed.
///
/// Safe to read from any thread.
/// Replaced wholesale by the owning polling loop, never mutated in place.
#[derive(Debug, Clone, Default)]
pub struct TrafficSnapshot {
    pub devices: DeviceTable,
    pub global_speed: f32,
}

impl TrafficSnapshot {
    pub fn capture(table: &DeviceTable, global: &GlobalSpeedWindow) -> Self {
        Self {
            devices: table.clone(),
            global_speed: global.speed(),
        }
    }

    pub fn from_aggregator(aggregator: &TrafficAggregator) -> Self {
        Self::capture(aggregator.table(), aggregator.global())
    }

    pub fn device_speeds(&self) -> Vec<DeviceSpeed> {
        self.devices.device_speeds()
    }
}

/// Single-writer, many-reader hand-off point for one direction.
///
/// The copy is taken before the swap, so readers always see either the
/// previous or the next complete table.
#[derive(Debug)]
pub struct SnapshotPublisher {
    current: ArcSwap<TrafficSnapshot>,
}

impl Default for SnapshotPublisher {
    fn default() -> Self {
        Self::new()
    }
}

impl SnapshotPublisher {
    pub fn new() -> Self {
        Self {
            current: ArcSwap::from_pointee(TrafficSnapshot::default()),
        }
    }

    pub fn publish(&self, table: &DeviceTable, global: &GlobalSpeedWindow) {
        self.current
            .store(Arc::new(TrafficSnapshot::capture(table, global)));
    }

    pub fn publish_aggregator(&self, aggregator: &TrafficAggregator) {
        self.publish(aggregator.table(), aggregator.global());
    }

    pub fn read(&self) -> Arc<TrafficSnapshot> {
        self.current.load_full()
    }
}
