use serde::{Deserialize, Serialize};
use std::fmt;
use std::net::Ipv4Addr;
use std::str::FromStr;

/// Which side of the gateway a log file describes.
///
/// Both directions share the same table representation. For `Download` the
/// packet's destination is the local device and its source is the peer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Upload,
    Download,
}

impl Direction {
    pub const ALL: [Direction; 2] = [Direction::Upload, Direction::Download];

    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Upload => "upload",
            Direction::Download => "download",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Direction {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "upload" => Ok(Direction::Upload),
            "download" => Ok(Direction::Download),
            other => Err(format!("unknown direction '{other}'")),
        }
    }
}

/// Whether an ingest call changed the shape of the device table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeFlag {
    Unchanged,
    /// A device or a peer was appended.
    TableGrew,
}

impl ChangeFlag {
    pub fn grew(&self) -> bool {
        matches!(self, ChangeFlag::TableGrew)
    }
}

/// Fields extracted from a single firewall log line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PacketRecord {
    pub src: Ipv4Addr,
    pub dst: Ipv4Addr,
    pub length: u64,
}

impl PacketRecord {
    /// Returns `(own, peer)` addresses as seen from `direction`.
    pub fn oriented(&self, direction: Direction) -> (Ipv4Addr, Ipv4Addr) {
        match direction {
            Direction::Upload => (self.src, self.dst),
            Direction::Download => (self.dst, self.src),
        }
    }
}

/// Presentation-facing view of one device.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DeviceSpeed {
    #[serde(rename = "device")]
    pub address: Ipv4Addr,
    pub speed: f32,
}
