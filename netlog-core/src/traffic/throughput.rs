use std::time::{Duration, Instant};

/// Window length for per-device speeds. Short, to stay responsive.
pub const DEVICE_WINDOW: Duration = Duration::from_secs(1);

/// Window length for the global per-direction speed. Longer, to smooth.
pub const GLOBAL_WINDOW: Duration = Duration::from_secs(3);

/// Number of completed global windows averaged into the reported speed.
pub const SAMPLE_RING_LEN: usize = 8;

/// Tumbling byte counter that yields a speed each time a window closes.
#[derive(Debug, Clone)]
pub struct ByteWindow {
    length: Duration,
    accumulated: u64,
    start: Option<Instant>,
}

impl ByteWindow {
    pub fn new(length: Duration) -> Self {
        Self {
            length,
            accumulated: 0,
            start: None,
        }
    }

    /// Adds `bytes` observed at `now`.
    ///
    /// The very first packet only opens the window. Afterwards, once at least
    /// `length` has elapsed, the accumulated bytes (this packet included) are
    /// divided by the elapsed time and the window restarts empty at `now`.
    pub fn record(&mut self, bytes: u64, now: Instant) -> Option<f32> {
        let Some(start) = self.start else {
            self.start = Some(now);
            self.accumulated = bytes;
            return None;
        };

        self.accumulated = self.accumulated.saturating_add(bytes);

        let elapsed = now.saturating_duration_since(start);
        if elapsed < self.length || elapsed.is_zero() {
            return None;
        }

        let speed = (self.accumulated as f64 / elapsed.as_secs_f64()) as f32;
        self.start = Some(now);
        self.accumulated = 0;

        Some(speed)
    }

    pub fn accumulated(&self) -> u64 {
        self.accumulated
    }

    pub fn start(&self) -> Option<Instant> {
        self.start
    }
}

/// Global throughput for one direction: a 3 s window feeding a ring of the
/// last eight window speeds.
#[derive(Debug, Clone)]
pub struct GlobalSpeedWindow {
    window: ByteWindow,
    samples: [f32; SAMPLE_RING_LEN],
    write_index: usize,
}

impl Default for GlobalSpeedWindow {
    fn default() -> Self {
        Self::new()
    }
}

impl GlobalSpeedWindow {
    pub fn new() -> Self {
        Self {
            window: ByteWindow::new(GLOBAL_WINDOW),
            samples: [0.0; SAMPLE_RING_LEN],
            write_index: 0,
        }
    }

    /// Returns the sample written to the ring, if this packet closed a window.
    pub fn record(&mut self, bytes: u64, now: Instant) -> Option<f32> {
        let speed = self.window.record(bytes, now)?;

        self.samples[self.write_index] = speed;
        self.write_index = (self.write_index + 1) % SAMPLE_RING_LEN;

        Some(speed)
    }

    /// Mean of every ring slot. Slots not yet written count as zero.
    pub fn speed(&self) -> f32 {
        self.samples.iter().sum::<f32>() / SAMPLE_RING_LEN as f32
    }

    pub fn samples(&self) -> &[f32; SAMPLE_RING_LEN] {
        &self.samples
    }

    pub fn write_index(&self) -> usize {
        self.write_index
    }

    pub fn accumulated(&self) -> u64 {
        self.window.accumulated()
    }
}
