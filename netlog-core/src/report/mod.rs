//! Console presentation of published traffic snapshots.
//!
//! There are three ways to show the figures:
//! - **Dashboard**: clears the terminal and redraws a table of devices and speeds
//! - **Json**: prints one JSON object per tick, keyed `upload`, `download` and `speed`
//! - **Log**: emits a structured `tracing` event per tick

mod render;
mod reporter;
mod types;


pub use render::{format_speed, render_dashboard};
pub use reporter::Reporter;
pub use types::{GlobalSpeeds, ReportMode, TrafficReport};
