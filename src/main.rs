//! Dice roller service.
//!
//! # Architecture Overview
//!
//! ```text
//! request ─▶ request id ─▶ request span ─▶ timeout ─▶ /rolldice
//!                                                        │
//!                                   ┌────────────────────┤
//!                                   ▼                    ▼
//!                               roll span           dice.rolls
//!                             (roll.value)        {roll.value}
//!                                   │                    │
//!                                   ▼                    ▼
//! response ◀─ "1".."6"         stdout logs      Prometheus scrape
//! ```

use std::path::PathBuf;

use clap::Parser;
use diceroller::config::{apply_overrides, load_config, ConfigError, DiceConfig};
use diceroller::lifecycle::startup;
use diceroller::observability::logging::init_logging;

#[derive(Parser)]
#[command(name = "diceroller")]
#[command(about = "Rolls a die over HTTP, with tracing and metrics", long_about = None)]
struct Cli {
    /// Path to a TOML configuration file.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Override `listener.bind_address`.
    #[arg(short, long)]
    bind_address: Option<String>,

    /// Log as JSON regardless of the configured format.
    #[arg(long)]
    json_logs: bool,
}

fn resolve_config(cli: &Cli) -> Result<DiceConfig, ConfigError> {
    let config = match &cli.config {
        Some(path) => load_config(path)?,
        None => DiceConfig::default(),
    };

    apply_overrides(config, cli.bind_address.as_deref(), cli.json_logs)
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let config = resolve_config(&cli)?;

    init_logging(&config.observability)?;

    tracing::info!(version = env!("CARGO_PKG_VERSION"), "diceroller starting");
    tracing::info!(
        bind_address = %config.listener.bind_address,
        request_timeout_secs = config.timeouts.request_secs,
        instrumented = config.observability.instrumented,
        metrics_enabled = config.observability.metrics_enabled,
        "Configuration loaded"
    );

    startup::run(config).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
