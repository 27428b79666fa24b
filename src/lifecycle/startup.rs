//! Startup orchestration.
//!
//! # Responsibilities
//! - Install the metrics exporter
//! - Bind the listener
//! - Run the server until a shutdown signal arrives
//!
//! Logging is installed by the caller before this runs. Any startup error is
//! fatal.

use std::net::SocketAddr;

use tokio::net::TcpListener;

use crate::config::DiceConfig;
use crate::http::HttpServer;
use crate::lifecycle::{signals, Shutdown};
use crate::observability::metrics::init_metrics;

#[derive(Debug, thiserror::Error)]
pub enum StartupError {
    #[error("invalid address '{address}': {source}")]
    Address {
        address: String,
        source: std::net::AddrParseError,
    },

    #[error("metrics exporter: {0}")]
    Metrics(#[from] metrics_exporter_prometheus::BuildError),

    #[error("server: {0}")]
    Io(#[from] std::io::Error),
}

fn parse_addr(address: &str) -> Result<SocketAddr, StartupError> {
    address.parse().map_err(|source| StartupError::Address {
        address: address.to_string(),
        source,
    })
}

/// Start every subsystem and serve until Ctrl+C or SIGTERM.
pub async fn run(config: DiceConfig) -> Result<(), StartupError> {
    if config.observability.metrics_enabled {
        init_metrics(parse_addr(&config.observability.metrics_address)?)?;
    }

    let listener = TcpListener::bind(parse_addr(&config.listener.bind_address)?).await?;
    tracing::info!(address = %listener.local_addr()?, "Listening for connections");

    let shutdown = Shutdown::new();
    let server_shutdown = shutdown.subscribe();
    tokio::spawn(async move {
        signals::wait_for_signal().await;
        shutdown.trigger();
    });

    HttpServer::new(config).run(listener, server_shutdown).await?;
    Ok(())
}
