use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// Cooperative stop flag shared by the polling loops and the report loop.
#[derive(Debug, Clone, Default)]
pub struct Shutdown {
    requested: Arc<AtomicBool>,
}

impl Shutdown {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` if shutdown had already been requested.
    pub fn request(&self) -> bool {
        self.requested.swap(true, Ordering::SeqCst)
    }

    pub fn is_requested(&self) -> bool {
        self.requested.load(Ordering::SeqCst)
    }

    /// First Ctrl+C stops gracefully; a second one exits immediately.
    pub fn install_ctrlc_handler(&self) -> Result<(), ctrlc::Error> {
        let shutdown = self.clone();

        ctrlc::set_handler(move || {
            if shutdown.request() {
                tracing::warn!("forced termination requested");
                std::process::exit(1);
            }
            tracing::info!("shutdown requested, finishing current batch");
        })
    }
}
