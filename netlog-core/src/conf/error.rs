use crate::traffic::Direction;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    // IO
    #[error("failed to read config file {path}: {source}")]
    ReadFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // Parsing
    #[error("failed to parse HCL in {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: hcl::Error,
    },

    // Validation
    #[error("unsupported config version {version} (expected {expected})")]
    UnsupportedVersion { version: u32, expected: u32 },

    #[error("no log sources configured; at least one of upload or download is required")]
    NoSources,

    #[error("duplicate {direction} source: {first} and {second}")]
    DuplicateSource {
        direction: Direction,
        first: PathBuf,
        second: PathBuf,
    },

    #[error("{field} must be greater than zero")]
    ZeroInterval { field: &'static str },
}

impl ConfigError {
    pub fn read_file(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::ReadFile {
            path: path.into(),
            source,
        }
    }

    pub fn parse(path: impl Into<PathBuf>, source: hcl::Error) -> Self {
        Self::Parse {
            path: path.into(),
            source,
        }
    }
}
