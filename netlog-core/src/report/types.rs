use crate::traffic::DeviceSpeed;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Point-in-time view of both directions, as handed to presentation code.
#[derive(Debug, Clone, Serialize)]
pub struct TrafficReport {
    pub timestamp: DateTime<Utc>,
    pub upload: Vec<DeviceSpeed>,
    pub download: Vec<DeviceSpeed>,
    pub speed: GlobalSpeeds,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GlobalSpeeds {
    pub upload: f32,
    pub download: f32,
}

/// How the running monitor presents its figures.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportMode {
    /// Redrawn terminal table.
    #[default]
    Dashboard,
    /// One JSON object per tick on stdout.
    Json,
    /// A structured log event per tick.
    Log,
}

impl FromStr for ReportMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "dashboard" => Ok(ReportMode::Dashboard),
            "json" => Ok(ReportMode::Json),
            "log" => Ok(ReportMode::Log),
            other => Err(format!(
                "unknown report mode '{other}' (expected dashboard, json or log)"
            )),
        }
    }
}

impl fmt::Display for ReportMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ReportMode::Dashboard => "dashboard",
            ReportMode::Json => "json",
            ReportMode::Log => "log",
        };
        f.write_str(s)
    }
}
