use crate::conf::error::ConfigError;
use crate::conf::types::{
    CONFIG_VERSION, ConfigOverrides, DEFAULT_CONFIG_PATH, NetlogConfig, SourceConfig,
};
use crate::traffic::Direction;
use std::fs;
use std::path::Path;

/// Reads, parses and validates a config file.
pub fn load_config(path: &Path) -> Result<NetlogConfig, ConfigError> {
    let cfg = parse_config(path)?;
    validate_config(&cfg)?;
    Ok(cfg)
}

/// Builds the effective config for `netlog run`.
///
/// An explicit `path` must exist. Without one, the default path is used when
/// present and an empty config otherwise, so that command-line sources alone
/// are enough to start.
pub fn resolve_config(
    path: Option<&Path>,
    overrides: ConfigOverrides,
) -> Result<NetlogConfig, ConfigError> {
    let mut cfg = match path {
        Some(path) => parse_config(path)?,
        None => {
            let default = Path::new(DEFAULT_CONFIG_PATH);
            if default.exists() {
                parse_config(default)?
            } else {
                tracing::debug!(path = DEFAULT_CONFIG_PATH, "no config file, using defaults");
                NetlogConfig::default()
            }
        }
    };

    apply_overrides(&mut cfg, overrides);
    validate_config(&cfg)?;

    Ok(cfg)
}

pub fn parse_config(path: &Path) -> Result<NetlogConfig, ConfigError> {
    let s = fs::read_to_string(path).map_err(|e| ConfigError::read_file(path, e))?;
    hcl::from_str(&s).map_err(|e| ConfigError::parse(path, e))
}

pub fn apply_overrides(cfg: &mut NetlogConfig, overrides: ConfigOverrides) {
    let sources = [
        (Direction::Upload, overrides.upload),
        (Direction::Download, overrides.download),
    ];
    for (direction, path) in sources {
        if let Some(path) = path {
            cfg.set_source(SourceConfig {
                direction,
                path,
                from_start: false,
            });
        }
    }

    if overrides.from_start {
        for source in &mut cfg.sources {
            source.from_start = true;
        }
    }

    if let Some(mode) = overrides.report_mode {
        cfg.report.mode = mode;
    }
    if let Some(pid_file) = overrides.pid_file {
        cfg.pid_file = Some(pid_file);
    }
    if let Some(ms) = overrides.poll_interval_ms {
        cfg.poll_interval_ms = ms;
    }
}

pub fn validate_config(cfg: &NetlogConfig) -> Result<(), ConfigError> {
    if cfg.version != CONFIG_VERSION {
        return Err(ConfigError::UnsupportedVersion {
            version: cfg.version,
            expected: CONFIG_VERSION,
        });
    }

    if cfg.sources.is_empty() {
        return Err(ConfigError::NoSources);
    }

    for (i, source) in cfg.sources.iter().enumerate() {
        if let Some(other) = cfg.sources[i + 1..]
            .iter()
            .find(|s| s.direction == source.direction)
        {
            return Err(ConfigError::DuplicateSource {
                direction: source.direction,
                first: source.path.clone(),
                second: other.path.clone(),
            });
        }
    }

    if cfg.poll_interval_ms == 0 {
        return Err(ConfigError::ZeroInterval {
            field: "poll_interval_ms",
        });
    }

    if cfg.report.interval_ms == 0 {
        return Err(ConfigError::ZeroInterval {
            field: "report.interval_ms",
        });
    }

    Ok(())
}
