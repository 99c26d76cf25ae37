use crate::cli::conf::{config_error_hint, write_template};
use crate::conf::{ConfigError, load_config};
use crate::traffic::Direction;
use std::fs;
use tempfile::tempdir;

#[test]
fn starter_template_is_a_valid_config() {
    // Arrange
    let dir = tempdir().unwrap();
    let path = dir.path().join("config/netlog.hcl");

    // Act
    write_template(&path).unwrap();
    let cfg = load_config(&path).unwrap();

    // Assert
    assert_eq!(cfg.sources.len(), 2);
    assert!(cfg.source(Direction::Upload).is_some());
    assert!(cfg.source(Direction::Download).is_some());
}

#[test]
fn template_never_overwrites() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("netlog.hcl");
    fs::write(&path, "keep me").unwrap();

    assert!(write_template(&path).is_err());
    assert_eq!(fs::read_to_string(&path).unwrap(), "keep me");
}

#[test]
fn validation_errors_carry_hints() {
    assert!(config_error_hint(&ConfigError::NoSources).is_some());
    assert!(config_error_hint(&ConfigError::ZeroInterval { field: "poll_interval_ms" }).is_some());
}
