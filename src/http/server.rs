//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create Axum Router with the `/rolldice` handler
//! - Wire up middleware (request ID, per-request span, timeout)
//! - Bind server to listener and drain on shutdown

use std::sync::Arc;
use std::time::Duration;

use axum::{routing::get, Router};
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower::ServiceBuilder;
use tower_http::{
    request_id::{PropagateRequestIdLayer, SetRequestIdLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::config::DiceConfig;
use crate::dice::{RandomSource, ThreadRngSource};
use crate::http::handlers::{roll_dice, roll_dice_plain};
use crate::http::request::{request_span, MakeRequestUuid, X_REQUEST_ID};
use crate::observability::metrics::{Counter, MetricsCounter};

/// Process-wide handles injected into handlers.
///
/// Built once at startup; handlers only invoke them.
#[derive(Clone)]
pub struct AppState {
    pub source: Arc<dyn RandomSource>,
    pub rolls: Arc<dyn Counter>,
}

impl AppState {
    pub fn new(source: Arc<dyn RandomSource>, rolls: Arc<dyn Counter>) -> Self {
        Self { source, rolls }
    }

    /// `rand`-backed source and the `dice.rolls` counter on the global recorder.
    pub fn production() -> Self {
        Self::new(Arc::new(ThreadRngSource), Arc::new(MetricsCounter::dice_rolls()))
    }
}

/// HTTP server for the dice roller.
pub struct HttpServer {
    router: Router,
    config: DiceConfig,
}

impl HttpServer {
    /// Create a new HTTP server with production telemetry handles.
    pub fn new(config: DiceConfig) -> Self {
        Self::with_state(config, AppState::production())
    }

    /// Create a server around caller-supplied handles.
    pub fn with_state(config: DiceConfig, state: AppState) -> Self {
        let router = build_router(&config, state);
        Self { router, config }
    }

    /// Run the server until `shutdown` fires.
    pub async fn run(
        self,
        listener: TcpListener,
        mut shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(
            address = %addr,
            instrumented = self.config.observability.instrumented,
            "HTTP server starting"
        );

        axum::serve(listener, self.router)
            .with_graceful_shutdown(async move {
                let _ = shutdown.recv().await;
                tracing::info!("Shutdown signal received");
            })
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }

    /// Get a reference to the config.
    pub fn config(&self) -> &DiceConfig {
        &self.config
    }
}

/// Build the Axum router with all middleware layers.
///
/// `observability.instrumented` picks the `/rolldice` handler variant.
#[allow(deprecated)]
pub fn build_router(config: &DiceConfig, state: AppState) -> Router {
    let routes = if config.observability.instrumented {
        Router::new().route("/rolldice", get(roll_dice))
    } else {
        Router::new().route("/rolldice", get(roll_dice_plain))
    };

    routes.with_state(state).layer(
        ServiceBuilder::new()
            .layer(SetRequestIdLayer::new(X_REQUEST_ID, MakeRequestUuid))
            .layer(TraceLayer::new_for_http().make_span_with(request_span::<axum::body::Body>))
            .layer(TimeoutLayer::new(Duration::from_secs(config.timeouts.request_secs)))
            .layer(PropagateRequestIdLayer::new(X_REQUEST_ID)),
    )
}
