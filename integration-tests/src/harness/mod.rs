mod logfile;
pub mod monitor;
pub mod tracing;

pub use logfile::{LogFile, packet_line};
pub use monitor::{start_monitor, test_config, wait_until};
pub use self::tracing::{CapturedEvent, captured_events, init_test_tracing};
