// # ddnsd - DynDNS client for Hetzner DNS
//
// Thin integration layer: parses arguments, sets up logging, wires the
// Hetzner provider and the HTTP IP source into a `SyncEngine` and runs a
// single sync pass. All sync logic lives in ddns-core.
//
// ## Usage
//
// ```bash
// ddnsd --config /etc/ddns/config.toml
// ```
//
// Run it periodically from cron or a systemd timer; the process exits after
// one pass.
//
// ## Environment
//
// - `DDNS_LOG_LEVEL`: trace, debug, info (default), warn, error

use clap::Parser;
use ddns_core::{Error, Result, SyncConfig, SyncEngine};
use ddns_ip_http::HttpIpSource;
use ddns_provider_hetzner::HetznerProvider;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

/// Exit codes for different termination scenarios
///
/// - 0: Every target processed
/// - 1: Configuration or startup error
/// - 2: Runtime error (HTTP, network, zone not found)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DdnsExitCode {
    /// All targets synced
    Success = 0,
    /// Configuration error or startup failure
    ConfigError = 1,
    /// Runtime error during the sync pass
    RuntimeError = 2,
}

impl DdnsExitCode {
    fn for_error(error: &Error) -> Self {
        if error.is_config() {
            DdnsExitCode::ConfigError
        } else {
            DdnsExitCode::RuntimeError
        }
    }
}

impl From<DdnsExitCode> for ExitCode {
    fn from(code: DdnsExitCode) -> Self {
        ExitCode::from(code as u8)
    }
}

/// DynDNS client for Hetzner DNS
#[derive(Debug, Parser)]
#[command(name = "ddnsd", version, about)]
struct Cli {
    /// Path to a config.toml file
    #[arg(short = 'c', long = "config")]
    config: PathBuf,
}

/// Map a `DDNS_LOG_LEVEL` value to a tracing level
fn parse_log_level(value: &str) -> Result<Level> {
    match value.to_lowercase().as_str() {
        "trace" => Ok(Level::TRACE),
        "debug" => Ok(Level::DEBUG),
        "info" => Ok(Level::INFO),
        "warn" => Ok(Level::WARN),
        "error" => Ok(Level::ERROR),
        _ => Err(Error::config(format!(
            "DDNS_LOG_LEVEL '{}' is not valid. Valid levels: trace, debug, info, warn, error",
            value
        ))),
    }
}

/// Install a bare stdout subscriber so progress lines read as plain output
fn init_tracing(level: Level) -> Result<()> {
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .without_time()
        .with_target(false)
        .with_level(false)
        .with_writer(std::io::stdout)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .map_err(|e| Error::config(format!("Failed to set tracing subscriber: {}", e)))
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let log_level = std::env::var("DDNS_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());
    let startup = parse_log_level(&log_level).and_then(init_tracing);
    if let Err(e) = startup {
        eprintln!("{}", e);
        return DdnsExitCode::ConfigError.into();
    }

    let config = match SyncConfig::load(&cli.config) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Could not read config {}: {}", cli.config.display(), e);
            return DdnsExitCode::ConfigError.into();
        }
    };

    // stdout carries only the progress lines
    if let Some(notice) = empty_targets_notice(&config) {
        eprintln!("{}", notice);
    }

    let rt = match tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
    {
        Ok(runtime) => runtime,
        Err(e) => {
            eprintln!("Failed to create tokio runtime: {}", e);
            return DdnsExitCode::RuntimeError.into();
        }
    };

    let code = match rt.block_on(run(config)) {
        Ok(()) => DdnsExitCode::Success,
        Err(e) => {
            eprintln!("Error: {}", e);
            DdnsExitCode::for_error(&e)
        }
    };

    code.into()
}

/// Notice for a configuration whose `targets` list is empty
fn empty_targets_notice(config: &SyncConfig) -> Option<&'static str> {
    config
        .targets
        .is_empty()
        .then_some("No targets configured, nothing will be updated")
}

/// Build the engine from configuration
fn build_engine(config: SyncConfig) -> Result<SyncEngine> {
    let provider = HetznerProvider::new(&config.api_token)?;
    let ip_source = HttpIpSource::new();

    Ok(SyncEngine::new(
        Box::new(provider),
        Box::new(ip_source),
        config.targets,
    ))
}

/// Run one sync pass
async fn run(config: SyncConfig) -> Result<()> {
    let engine = build_engine(config)?;
    engine.run().await
}
