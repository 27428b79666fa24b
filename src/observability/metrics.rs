//! Metrics collection and exposition.
//!
//! # Metrics
//! - `dice.rolls` (counter): rolls by `roll.value`
//!
//! # Design Decisions
//! - Handlers hold a [`Counter`] handle; the backend behind it is swappable
//! - Increments are atomic adds in the recorder, never awaited
//! - Prometheus exporter runs its own listener, separate from the API

use std::net::SocketAddr;

use metrics_exporter_prometheus::{BuildError, PrometheusBuilder};

/// Name of the roll counter.
pub const DICE_ROLLS: &str = "dice.rolls";

/// Description published with the roll counter.
pub const DICE_ROLLS_DESCRIPTION: &str = "The number of rolls by roll value";

/// Monotonic counter instrument.
pub trait Counter: Send + Sync {
    /// Add `delta`, tagging the increment with `labels`.
    fn add(&self, delta: u64, labels: &[(&'static str, String)]);
}

/// Counter forwarding to the `metrics` facade.
///
/// Resolves the recorder on each add, so the exporter installed at startup
/// (or a local recorder in tests) receives the increment.
#[derive(Debug, Clone)]
pub struct MetricsCounter {
    name: &'static str,
}

impl MetricsCounter {
    /// Create the handle and publish its description.
    pub fn register(name: &'static str, description: &'static str) -> Self {
        metrics::describe_counter!(name, description);
        Self { name }
    }

    /// The `dice.rolls` counter.
    pub fn dice_rolls() -> Self {
        Self::register(DICE_ROLLS, DICE_ROLLS_DESCRIPTION)
    }

    pub fn name(&self) -> &'static str {
        self.name
    }
}

impl Counter for MetricsCounter {
    fn add(&self, delta: u64, labels: &[(&'static str, String)]) {
        let labels: Vec<metrics::Label> = labels
            .iter()
            .map(|(key, value)| metrics::Label::new(*key, value.clone()))
            .collect();
        metrics::counter!(self.name, labels).increment(delta);
    }
}

/// Install the Prometheus exporter as the global recorder, serving scrapes
/// on `addr`. Must be called from within the tokio runtime.
pub fn init_metrics(addr: SocketAddr) -> Result<(), BuildError> {
    PrometheusBuilder::new().with_http_listener(addr).install()?;
    tracing::info!(address = %addr, "Metrics exporter listening");
    Ok(())
}
