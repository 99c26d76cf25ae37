use clap::{Args, Parser, Subcommand};
use netlog_core::cli;
use netlog_core::conf::{ConfigOverrides, resolve_config};
use netlog_core::logging::init_logging;
use netlog_core::report::ReportMode;
use netlog_core::server;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "netlog",
    version,
    about = "netlog: per-device traffic rates from firewall logs"
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Configuration tooling
    Config {
        #[command(subcommand)]
        cmd: cli::conf::ConfigCmd,
    },

    /// Tail the firewall logs and report traffic (default)
    Run(RunArgs),
}

#[derive(Args, Debug, Default)]
struct RunArgs {
    /// Path to the netlog config file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Firewall log with upload (outbound) lines
    #[arg(long)]
    upload: Option<PathBuf>,

    /// Firewall log with download (inbound) lines
    #[arg(long)]
    download: Option<PathBuf>,

    /// Replay existing file contents instead of starting at the end
    #[arg(long)]
    from_start: bool,

    /// Report output: dashboard, json or log
    #[arg(long)]
    report: Option<ReportMode>,

    #[arg(long)]
    pid_file: Option<PathBuf>,

    #[arg(long)]
    poll_interval_ms: Option<u64>,
}

impl RunArgs {
    fn overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            upload: self.upload.clone(),
            download: self.download.clone(),
            from_start: self.from_start,
            report_mode: self.report,
            pid_file: self.pid_file.clone(),
            poll_interval_ms: self.poll_interval_ms,
        }
    }
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Some(Command::Config { cmd }) => {
            if let Err(e) = cli::conf::run(cmd) {
                eprintln!("config error: {e:#}");
                std::process::exit(1);
            }
        }

        Some(Command::Run(args)) => run(args),

        None => run(RunArgs::default()),
    }
}

fn run(args: RunArgs) {
    init_logging();

    let cfg = match resolve_config(args.config.as_deref(), args.overrides()) {
        Ok(cfg) => cfg,
        Err(e) => {
            tracing::error!(error = %e, "invalid configuration");
            std::process::exit(1);
        }
    };

    if let Err(e) = server::run(cfg) {
        tracing::error!(error = %format!("{e:#}"), "netlog stopped with an error");
        std::process::exit(1);
    }
}
