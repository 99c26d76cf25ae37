use crate::conf::{ConfigError, NetlogConfig, load_config};
use owo_colors::OwoColorize;
use std::path::PathBuf;

pub fn check(path: PathBuf, plain: bool) -> anyhow::Result<()> {
    match load_config(&path) {
        Ok(cfg) => {
            print_summary(&cfg);
            Ok(())
        }
        Err(err) => {
            print_config_error(&err, plain);
            std::process::exit(1);
        }
    }
}

fn print_summary(cfg: &NetlogConfig) {
    println!("✔ Config loaded successfully");
    for source in &cfg.sources {
        let start = if source.from_start { "start" } else { "end" };
        println!(
            "✔ {} source: {} (from {start})",
            source.direction,
            source.path.display()
        );
    }
    println!(
        "✔ report: {} every {} ms",
        cfg.report.mode, cfg.report.interval_ms
    );
    println!("✔ poll interval: {} ms", cfg.poll_interval_ms);
}

fn print_config_error(err: &ConfigError, plain: bool) {
    if plain {
        eprintln!("{err}");
    } else {
        eprintln!();
        eprintln!("{} {}", "error:".red().bold(), err);
    }
    if let Some(hint) = config_error_hint(err) {
        eprintln!();
        eprintln!("{hint}");
    }
}

pub fn config_error_hint(err: &ConfigError) -> Option<&'static str> {
    match err {
        ConfigError::NoSources => Some(
            "Declare at least one log source.\n\
             \n\
             Example:\n\
             \n\
             sources = [\n\
             \x20 {\n\
             \x20   direction = \"upload\"\n\
             \x20   path      = \"/var/log/netlog/upload.log\"\n\
             \x20 }\n\
             ]",
        ),

        ConfigError::DuplicateSource { .. } => Some(
            "Each direction may be read from a single log file.\n\
             \n\
             Remove one of the sources or change its `direction`.",
        ),

        ConfigError::UnsupportedVersion { .. } => Some("Set `version = 1` at the top of the file."),

        ConfigError::ZeroInterval { .. } => Some("Intervals are in milliseconds and must be at least 1."),

        _ => None,
    }
}
