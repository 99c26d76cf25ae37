use crate::traffic::error::FatalError;
use crate::traffic::throughput::{ByteWindow, DEVICE_WINDOW};
use crate::traffic::types::{ChangeFlag, DeviceSpeed};
use serde::Serialize;
use std::net::Ipv4Addr;
use std::time::Instant;

/// Cumulative bytes a device sent to one peer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PeerStat {
    pub peer_address: Ipv4Addr,
    pub total_bytes: u64,
}

/// Aggregate for one traffic source.
///
/// `total_bytes` always equals the sum of the peers' `total_bytes`. Fields are
/// private so that only [`DeviceTable::upsert`] can move them.
#[derive(Debug, Clone)]
pub struct DeviceNode {
    own_address: Ipv4Addr,
    total_bytes: u64,
    peers: Vec<PeerStat>,
    window: ByteWindow,
    avg_speed: f32,
}

impl DeviceNode {
    /// A device seen for the first time, already holding its first peer.
    fn new(
        own_address: Ipv4Addr,
        peer_address: Ipv4Addr,
        length: u64,
        now: Instant,
    ) -> Result<Self, FatalError> {
        let mut peers = Vec::new();
        peers
            .try_reserve(1)
            .map_err(|e| FatalError::append_failure(peer_address, e))?;
        peers.push(PeerStat {
            peer_address,
            total_bytes: length,
        });

        let mut window = ByteWindow::new(DEVICE_WINDOW);
        window.record(length, now);

        Ok(Self {
            own_address,
            total_bytes: length,
            peers,
            window,
            avg_speed: 0.0,
        })
    }

    fn record(
        &mut self,
        peer_address: Ipv4Addr,
        length: u64,
        now: Instant,
    ) -> Result<ChangeFlag, FatalError> {
        // Grow first: a failed allocation must leave the counters untouched.
        let (idx, flag) = match self
            .peers
            .iter()
            .position(|p| p.peer_address == peer_address)
        {
            Some(idx) => (idx, ChangeFlag::Unchanged),
            None => {
                self.peers
                    .try_reserve(1)
                    .map_err(|e| FatalError::append_failure(peer_address, e))?;
                self.peers.push(PeerStat {
                    peer_address,
                    total_bytes: 0,
                });
                (self.peers.len() - 1, ChangeFlag::TableGrew)
            }
        };

        self.total_bytes = self.total_bytes.saturating_add(length);
        let peer = &mut self.peers[idx];
        peer.total_bytes = peer.total_bytes.saturating_add(length);

        if let Some(speed) = self.window.record(length, now) {
            self.avg_speed = speed;
        }

        Ok(flag)
    }

    pub fn own_address(&self) -> Ipv4Addr {
        self.own_address
    }

    pub fn total_bytes(&self) -> u64 {
        self.total_bytes
    }

    pub fn peers(&self) -> &[PeerStat] {
        &self.peers
    }

    pub fn peer(&self, address: Ipv4Addr) -> Option<&PeerStat> {
        self.peers.iter().find(|p| p.peer_address == address)
    }

    /// Last completed 1 s window speed, in bytes/second.
    pub fn avg_speed(&self) -> f32 {
        self.avg_speed
    }

    pub fn window_accumulated_bytes(&self) -> u64 {
        self.window.accumulated()
    }

    pub fn window_start(&self) -> Option<Instant> {
        self.window.start()
    }
}

/// Devices in first-seen order, unique by address.
///
/// Lookups are linear scans; a home or office gateway sees tens to low
/// hundreds of devices.
#[derive(Debug, Clone, Default)]
pub struct DeviceTable {
    nodes: Vec<DeviceNode>,
}

impl DeviceTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `length` bytes from `own` to `peer`, creating either on first sight.
    pub fn upsert(
        &mut self,
        own: Ipv4Addr,
        peer: Ipv4Addr,
        length: u64,
        now: Instant,
    ) -> Result<ChangeFlag, FatalError> {
        if let Some(node) = self.nodes.iter_mut().find(|n| n.own_address == own) {
            return node.record(peer, length, now);
        }

        let node = DeviceNode::new(own, peer, length, now)?;
        self.nodes
            .try_reserve(1)
            .map_err(|e| FatalError::append_failure(own, e))?;
        self.nodes.push(node);

        Ok(ChangeFlag::TableGrew)
    }

    pub fn get(&self, address: Ipv4Addr) -> Option<&DeviceNode> {
        self.nodes.iter().find(|n| n.own_address == address)
    }

    pub fn nodes(&self) -> &[DeviceNode] {
        &self.nodes
    }

    pub fn iter(&self) -> impl Iterator<Item = &DeviceNode> {
        self.nodes.iter()
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn device_speeds(&self) -> Vec<DeviceSpeed> {
        self.nodes
            .iter()
            .map(|n| DeviceSpeed {
                address: n.own_address,
                speed: n.avg_speed,
            })
            .collect()
    }
}
