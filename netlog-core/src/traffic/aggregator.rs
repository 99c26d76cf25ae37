use crate::traffic::error::IngestError;
use crate::traffic::parse::parse_line;
use crate::traffic::table::DeviceTable;
use crate::traffic::throughput::GlobalSpeedWindow;
use crate::traffic::types::{ChangeFlag, Direction};
use std::time::Instant;

/// Folds one raw log line into a direction's table and global window.
///
/// Nothing is mutated unless the line parses. For `Download` the packet's
/// destination becomes the table key and its source the peer.
pub fn ingest(
    table: &mut DeviceTable,
    window: &mut GlobalSpeedWindow,
    line: &str,
    direction: Direction,
    now: Instant,
) -> Result<ChangeFlag, IngestError> {
    let packet = parse_line(line)?;
    let (own, peer) = packet.oriented(direction);

    let flag = table.upsert(own, peer, packet.length, now)?;
    window.record(packet.length, now);

    Ok(flag)
}

/// Mutable state of one direction's pipeline. Owned by its polling loop.
#[derive(Debug, Clone)]
pub struct TrafficAggregator {
    direction: Direction,
    table: DeviceTable,
    global: GlobalSpeedWindow,
}

impl TrafficAggregator {
    pub fn new(direction: Direction) -> Self {
        Self {
            direction,
            table: DeviceTable::new(),
            global: GlobalSpeedWindow::new(),
        }
    }

    pub fn ingest(&mut self, line: &str, now: Instant) -> Result<ChangeFlag, IngestError> {
        ingest(
            &mut self.table,
            &mut self.global,
            line,
            self.direction,
            now,
        )
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn table(&self) -> &DeviceTable {
        &self.table
    }

    pub fn global(&self) -> &GlobalSpeedWindow {
        &self.global
    }

    pub fn global_speed(&self) -> f32 {
        self.global.speed()
    }
}
