use crate::server::shutdown::Shutdown;
use crate::tail::LineSource;
use crate::traffic::{Direction, FatalError, IngestError, TrafficAggregator, TrafficManager};
use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

/// Counts for one drained batch of lines.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BatchSummary {
    pub lines: usize,
    pub ingested: usize,
    pub skipped: usize,
    pub grew: usize,
}

/// Single-threaded pipeline for one direction.
///
/// Owns its aggregator exclusively; the only state it shares is what it
/// publishes into the [`TrafficManager`] after each batch.
pub struct DirectionPoller<S> {
    source: S,
    aggregator: TrafficAggregator,
    manager: Arc<TrafficManager>,
}

impl<S: LineSource> DirectionPoller<S> {
    pub fn new(direction: Direction, source: S, manager: Arc<TrafficManager>) -> Self {
        Self {
            source,
            aggregator: TrafficAggregator::new(direction),
            manager,
        }
    }

    pub fn direction(&self) -> Direction {
        self.aggregator.direction()
    }

    pub fn aggregator(&self) -> &TrafficAggregator {
        &self.aggregator
    }

    /// Drains every line currently available, then publishes once.
    pub fn poll_once(&mut self) -> Result<BatchSummary, FatalError> {
        let direction = self.direction();

        let lines = match self.source.poll_lines() {
            Ok(lines) => lines,
            Err(e) => {
                // Transient; the next poll tries again.
                tracing::warn!(%direction, error = %e, "failed to read log source");
                return Ok(BatchSummary::default());
            }
        };

        let mut summary = BatchSummary {
            lines: lines.len(),
            ..Default::default()
        };
        let mut fatal = None;

        for line in &lines {
            match self.aggregator.ingest(line, Instant::now()) {
                Ok(flag) => {
                    summary.ingested += 1;
                    if flag.grew() {
                        summary.grew += 1;
                    }
                }
                Err(IngestError::Parse(e)) => {
                    summary.skipped += 1;
                    tracing::warn!(%direction, error = %e, line = %line, "skipping log line");
                }
                Err(IngestError::Fatal(e)) => {
                    tracing::error!(%direction, error = %e, "device table could not grow");
                    fatal = Some(e);
                    break;
                }
            }
        }

        if summary.ingested > 0 {
            self.manager
                .publisher(direction)
                .publish_aggregator(&self.aggregator);
        }

        if let Some(e) = fatal {
            return Err(e);
        }

        if summary.lines > 0 {
            tracing::debug!(
                %direction,
                lines = summary.lines,
                skipped = summary.skipped,
                grew = summary.grew,
                devices = self.aggregator.table().len(),
                "batch ingested"
            );
        }

        Ok(summary)
    }

    /// Polls until shutdown is requested. The flag is only checked between
    /// batches, so a batch in progress always completes.
    pub fn run(mut self, shutdown: &Shutdown, poll_interval: Duration) -> Result<(), FatalError> {
        let direction = self.direction();
        tracing::info!(%direction, "polling loop started");

        while !shutdown.is_requested() {
            self.poll_once()?;
            thread::sleep(poll_interval);
        }

        tracing::info!(
            %direction,
            devices = self.aggregator.table().len(),
            "polling loop stopped"
        );
        Ok(())
    }
}
