mod monitor;
mod pid;
mod poller;
mod setup;
mod shutdown;

#[cfg(test)]
mod tests;

pub use monitor::TrafficMonitor;
pub use pid::PidFile;
pub use poller::{BatchSummary, DirectionPoller};
pub use setup::{run, run_until};
pub use shutdown::Shutdown;
