use crate::conf::NetlogConfig;
use crate::server::poller::DirectionPoller;
use crate::server::shutdown::Shutdown;
use crate::tail::LogTail;
use crate::traffic::{Direction, FatalError, TrafficManager};
use anyhow::{Context, Result, bail};
use std::sync::Arc;
use std::thread::{self, JoinHandle};

struct PollerHandle {
    direction: Direction,
    handle: JoinHandle<Result<(), FatalError>>,
}

/// The running set of polling threads, one per configured direction.
pub struct TrafficMonitor {
    manager: Arc<TrafficManager>,
    shutdown: Shutdown,
    pollers: Vec<PollerHandle>,
}

impl TrafficMonitor {
    /// Opens every configured source, then spawns one polling thread per
    /// direction. Nothing is spawned if any source fails to open.
    pub fn start(config: &NetlogConfig, shutdown: Shutdown) -> Result<Self> {
        let manager = Arc::new(TrafficManager::new());

        let mut tails = Vec::with_capacity(config.sources.len());
        for source in &config.sources {
            let tail = LogTail::open(&source.path, source.start_position())
                .with_context(|| format!("failed to start {} source", source.direction))?;
            tracing::info!(
                direction = %source.direction,
                path = %source.path.display(),
                from_start = source.from_start,
                "tailing log file"
            );
            tails.push((source.direction, tail));
        }

        let poll_interval = config.poll_interval();
        let mut pollers = Vec::with_capacity(tails.len());

        for (direction, tail) in tails {
            let poller = DirectionPoller::new(direction, tail, manager.clone());
            let stop = shutdown.clone();

            let spawned = thread::Builder::new()
                .name(format!("netlog-{direction}"))
                .spawn(move || poller.run(&stop, poll_interval))
                .with_context(|| format!("failed to spawn {direction} polling thread"));

            match spawned {
                Ok(handle) => pollers.push(PollerHandle { direction, handle }),
                Err(e) => {
                    // Stop whatever already started before bailing.
                    shutdown.request();
                    for started in pollers {
                        let _ = started.handle.join();
                    }
                    return Err(e);
                }
            }
        }

        Ok(Self {
            manager,
            shutdown,
            pollers,
        })
    }

    pub fn manager(&self) -> &Arc<TrafficManager> {
        &self.manager
    }

    pub fn shutdown(&self) -> &Shutdown {
        &self.shutdown
    }

    /// True while at least one polling thread is still alive.
    pub fn is_running(&self) -> bool {
        self.pollers.iter().any(|p| !p.handle.is_finished())
    }

    /// Requests shutdown and waits for every polling thread.
    pub fn stop(self) -> Result<()> {
        self.shutdown.request();
        self.join()
    }

    /// Waits for every polling thread. Fails if any direction stopped on a
    /// fatal error.
    pub fn join(self) -> Result<()> {
        let mut failed = Vec::new();

        for PollerHandle { direction, handle } in self.pollers {
            match handle.join() {
                Ok(Ok(())) => {}
                Ok(Err(e)) => {
                    tracing::error!(%direction, error = %e, "ingestion stopped");
                    failed.push(direction);
                }
                Err(_) => {
                    tracing::error!(%direction, "polling thread panicked");
                    failed.push(direction);
                }
            }
        }

        if !failed.is_empty() {
            let names: Vec<_> = failed.iter().map(|d| d.as_str()).collect();
            bail!("ingestion failed for: {}", names.join(", "));
        }

        Ok(())
    }
}
