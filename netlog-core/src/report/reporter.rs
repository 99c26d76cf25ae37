use crate::report::render::{hide_cursor, redraw, render_dashboard, show_cursor};
use crate::report::types::{ReportMode, TrafficReport};

/// Writes periodic traffic reports in the configured [`ReportMode`].
#[derive(Debug, Clone, Copy)]
pub struct Reporter {
    mode: ReportMode,
}

impl Reporter {
    pub fn new(mode: ReportMode) -> Self {
        Self { mode }
    }

    pub fn mode(&self) -> ReportMode {
        self.mode
    }

    pub fn begin(&self) {
        if self.mode == ReportMode::Dashboard {
            hide_cursor();
        }
    }

    pub fn emit(&self, report: &TrafficReport) -> serde_json::Result<()> {
        match self.mode {
            ReportMode::Dashboard => redraw(&render_dashboard(report)),
            ReportMode::Json => println!("{}", serde_json::to_string(report)?),
            ReportMode::Log => tracing::info!(
                upload_devices = report.upload.len(),
                download_devices = report.download.len(),
                upload_speed = report.speed.upload,
                download_speed = report.speed.download,
                "traffic report"
            ),
        }
        Ok(())
    }

    pub fn finish(&self) {
        if self.mode == ReportMode::Dashboard {
            show_cursor();
        }
    }
}
