mod error;
mod loader;
pub mod types;

pub use error::ConfigError;
pub use loader::{apply_overrides, load_config, parse_config, resolve_config, validate_config};
pub use types::{
    ConfigOverrides, DEFAULT_CONFIG_PATH, NetlogConfig, ReportConfig, SourceConfig,
};
