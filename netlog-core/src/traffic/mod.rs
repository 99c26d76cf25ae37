//! Traffic aggregation engine.
//!
//! raw log line
//! parse_line
//! PacketRecord
//! DeviceTable + GlobalSpeedWindow (owned by one polling loop)
//! SnapshotPublisher
//! TrafficManager (read by reporters)

mod aggregator;
mod error;
mod manager;
mod parse;
mod snapshot;
mod table;
mod throughput;
mod types;

#[cfg(test)]
mod tests;

pub use aggregator::*;
pub use error::*;
pub use manager::*;
pub use parse::*;
pub use snapshot::*;
pub use table::*;
pub use throughput::*;
pub use types::*;
