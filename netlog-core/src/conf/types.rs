use crate::report::ReportMode;
use crate::tail::StartPosition;
use crate::traffic::Direction;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

pub const CONFIG_VERSION: u32 = 1;
pub const DEFAULT_CONFIG_PATH: &str = "config/netlog.hcl";
pub const DEFAULT_POLL_INTERVAL_MS: u64 = 100;
pub const DEFAULT_REPORT_INTERVAL_MS: u64 = 1000;

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct NetlogConfig {
    // Configuration schema version
    #[serde(default = "default_version")]
    pub version: u32,

    /// Optional pid file path
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pid_file: Option<PathBuf>,

    /// Sleep between two polls of the same log file.
    #[serde(default = "default_poll_interval_ms")]
    pub poll_interval_ms: u64,

    #[serde(default)]
    pub sources: Vec<SourceConfig>,

    #[serde(default)]
    pub report: ReportConfig,
}

impl Default for NetlogConfig {
    fn default() -> Self {
        Self {
            version: CONFIG_VERSION,
            pid_file: None,
            poll_interval_ms: DEFAULT_POLL_INTERVAL_MS,
            sources: Vec::new(),
            report: ReportConfig::default(),
        }
    }
}

impl NetlogConfig {
    pub fn poll_interval(&self) -> Duration {
        Duration::from_millis(self.poll_interval_ms)
    }

    pub fn source(&self, direction: Direction) -> Option<&SourceConfig> {
        self.sources.iter().find(|s| s.direction == direction)
    }

    /// Replaces the source for `source.direction`, or adds it.
    pub fn set_source(&mut self, source: SourceConfig) {
        match self
            .sources
            .iter_mut()
            .find(|s| s.direction == source.direction)
        {
            Some(existing) => *existing = source,
            None => self.sources.push(source),
        }
    }
}

/// One firewall log file and the direction it describes.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct SourceConfig {
    pub direction: Direction,
    pub path: PathBuf,

    /// Replay lines already in the file instead of starting at its end.
    #[serde(default)]
    pub from_start: bool,
}

impl SourceConfig {
    pub fn start_position(&self) -> StartPosition {
        if self.from_start {
            StartPosition::Beginning
        } else {
            StartPosition::End
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ReportConfig {
    #[serde(default)]
    pub mode: ReportMode,

    #[serde(default = "default_report_interval_ms")]
    pub interval_ms: u64,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            mode: ReportMode::default(),
            interval_ms: DEFAULT_REPORT_INTERVAL_MS,
        }
    }
}

impl ReportConfig {
    pub fn interval(&self) -> Duration {
        Duration::from_millis(self.interval_ms)
    }
}

/// Command-line values that take precedence over the config file.
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub upload: Option<PathBuf>,
    pub download: Option<PathBuf>,
    pub from_start: bool,
    pub report_mode: Option<ReportMode>,
    pub pid_file: Option<PathBuf>,
    pub poll_interval_ms: Option<u64>,
}

impl ConfigOverrides {
    pub fn names_sources(&self) -> bool {
        self.upload.is_some() || self.download.is_some()
    }
}

fn default_version() -> u32 {
    CONFIG_VERSION
}

fn default_poll_interval_ms() -> u64 {
    DEFAULT_POLL_INTERVAL_MS
}

fn default_report_interval_ms() -> u64 {
    DEFAULT_REPORT_INTERVAL_MS
}
