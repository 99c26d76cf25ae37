use crate::conf::NetlogConfig;
use crate::report::Reporter;
use crate::server::monitor::TrafficMonitor;
use crate::server::pid::PidFile;
use crate::server::shutdown::Shutdown;
use anyhow::{Context, Result};
use std::thread;
use std::time::{Duration, Instant};

/// Granularity of the report loop's shutdown check.
const REPORT_TICK: Duration = Duration::from_millis(50);

/// Run the monitor until Ctrl+C, or until every direction has stopped.
pub fn run(config: NetlogConfig) -> Result<()> {
    let shutdown = Shutdown::new();
    shutdown
        .install_ctrlc_handler()
        .context("failed to install Ctrl+C handler")?;

    run_until(config, shutdown)
}

/// Same as [`run`] but driven by an externally owned shutdown flag.
pub fn run_until(config: NetlogConfig, shutdown: Shutdown) -> Result<()> {
    let _pid_file = config
        .pid_file
        .as_ref()
        .and_then(|path| match PidFile::create(path) {
            Ok(pid) => {
                tracing::info!(pid_file = %pid.path().display(), "pid file written");
                Some(pid)
            }
            Err(e) => {
                tracing::warn!(error = %e, "failed to write pid file; continuing");
                None
            }
        });

    let monitor = TrafficMonitor::start(&config, shutdown.clone())?;
    let reporter = Reporter::new(config.report.mode);

    report_loop(&monitor, &reporter, &shutdown, config.report.interval());

    let result = monitor.stop();
    if result.is_ok() {
        tracing::info!("gracefully terminated");
    }
    result
}

fn report_loop(
    monitor: &TrafficMonitor,
    reporter: &Reporter,
    shutdown: &Shutdown,
    interval: Duration,
) {
    reporter.begin();
    let mut last_report: Option<Instant> = None;

    while !shutdown.is_requested() && monitor.is_running() {
        if last_report.is_none_or(|at| at.elapsed() >= interval) {
            if let Err(e) = reporter.emit(&monitor.manager().report()) {
                tracing::warn!(error = %e, "failed to emit report");
            }
            last_report = Some(Instant::now());
        }
        thread::sleep(REPORT_TICK);
    }

    reporter.finish();
}
