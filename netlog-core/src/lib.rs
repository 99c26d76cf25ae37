pub mod cli;
pub mod conf;
pub mod logging;
pub mod report;
pub mod server;
pub mod tail;
pub mod traffic;
