//! Shared test doubles for integration tests.

#![allow(dead_code)]

use std::collections::HashMap;
use std::fmt;
use std::sync::{Arc, Mutex};

use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use tower::ServiceExt;
use tracing::{
    field::{Field, Visit},
    span::{Attributes, Id, Record},
    Subscriber,
};
use tracing_subscriber::{layer::Context, registry::LookupSpan, Layer};

use diceroller::config::DiceConfig;
use diceroller::dice::{RandomSource, RollError};
use diceroller::http::{server::build_router, AppState};
use diceroller::observability::metrics::Counter;

/// Source that always returns the same value.
pub struct FixedSource(pub u8);

impl RandomSource for FixedSource {
    fn uniform_int(&self, _low: u8, _high: u8) -> Result<u8, RollError> {
        Ok(self.0)
    }
}

/// Source that always fails.
pub struct FailingSource;

impl RandomSource for FailingSource {
    fn uniform_int(&self, _low: u8, _high: u8) -> Result<u8, RollError> {
        Err(RollError::Source("injected failure".into()))
    }
}

/// One recorded counter increment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Increment {
    pub delta: u64,
    pub labels: Vec<(String, String)>,
}

impl Increment {
    pub fn label(&self, key: &str) -> Option<&str> {
        self.labels
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }
}

/// Counter that remembers every increment.
#[derive(Default)]
pub struct RecordingCounter {
    increments: Mutex<Vec<Increment>>,
}

impl RecordingCounter {
    pub fn increments(&self) -> Vec<Increment> {
        self.increments.lock().unwrap().clone()
    }

    pub fn total(&self) -> u64 {
        self.increments().iter().map(|i| i.delta).sum()
    }
}

impl Counter for RecordingCounter {
    fn add(&self, delta: u64, labels: &[(&'static str, String)]) {
        self.increments.lock().unwrap().push(Increment {
            delta,
            labels: labels
                .iter()
                .map(|(k, v)| (k.to_string(), v.clone()))
                .collect(),
        });
    }
}

/// A span as seen by [`SpanCapture`].
#[derive(Debug, Clone)]
pub struct CapturedSpan {
    id: u64,
    pub name: &'static str,
    pub parent: Option<&'static str>,
    pub fields: HashMap<String, String>,
    pub closes: usize,
}

impl CapturedSpan {
    pub fn field(&self, name: &str) -> Option<&str> {
        self.fields.get(name).map(String::as_str)
    }
}

/// Layer recording span creation, attributes and closure.
#[derive(Clone, Default)]
pub struct SpanCapture {
    spans: Arc<Mutex<Vec<CapturedSpan>>>,
}

impl SpanCapture {
    /// Spans with `name`, in creation order.
    pub fn named(&self, name: &str) -> Vec<CapturedSpan> {
        self.spans
            .lock()
            .unwrap()
            .iter()
            .filter(|s| s.name == name)
            .cloned()
            .collect()
    }

    /// Install a registry with this layer as the thread's default subscriber.
    pub fn install(&self) -> tracing::subscriber::DefaultGuard {
        use tracing_subscriber::layer::SubscriberExt;
        tracing::subscriber::set_default(tracing_subscriber::registry().with(self.clone()))
    }

    fn with_latest<F: FnOnce(&mut CapturedSpan)>(&self, id: &Id, f: F) {
        let mut spans = self.spans.lock().unwrap();
        // Registry ids are reused once a span closes; the latest entry wins.
        if let Some(span) = spans.iter_mut().rev().find(|s| s.id == id.into_u64()) {
            f(span);
        }
    }
}

struct FieldVisitor<'a>(&'a mut HashMap<String, String>);

impl Visit for FieldVisitor<'_> {
    fn record_str(&mut self, field: &Field, value: &str) {
        self.0.insert(field.name().to_string(), value.to_string());
    }

    fn record_bool(&mut self, field: &Field, value: bool) {
        self.0.insert(field.name().to_string(), value.to_string());
    }

    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        self.0.insert(field.name().to_string(), format!("{:?}", value));
    }
}

impl<S> Layer<S> for SpanCapture
where
    S: Subscriber + for<'a> LookupSpan<'a>,
{
    fn on_new_span(&self, attrs: &Attributes<'_>, id: &Id, ctx: Context<'_, S>) {
        let parent = if let Some(parent) = attrs.parent() {
            ctx.span(parent).map(|s| s.name())
        } else if attrs.is_contextual() {
            ctx.lookup_current().map(|s| s.name())
        } else {
            None
        };

        let mut fields = HashMap::new();
        attrs.record(&mut FieldVisitor(&mut fields));

        self.spans.lock().unwrap().push(CapturedSpan {
            id: id.into_u64(),
            name: attrs.metadata().name(),
            parent,
            fields,
            closes: 0,
        });
    }

    fn on_record(&self, id: &Id, values: &Record<'_>, _ctx: Context<'_, S>) {
        self.with_latest(id, |span| values.record(&mut FieldVisitor(&mut span.fields)));
    }

    fn on_close(&self, id: Id, _ctx: Context<'_, S>) {
        self.with_latest(&id, |span| span.closes += 1);
    }
}

/// Router over `source` and `counter`, serving the instrumented or plain
/// `/rolldice` handler.
pub fn router_with(
    source: impl RandomSource + 'static,
    counter: Arc<RecordingCounter>,
    instrumented: bool,
) -> Router {
    let mut config = DiceConfig::default();
    config.observability.instrumented = instrumented;
    build_router(&config, AppState::new(Arc::new(source), counter))
}

/// Send `GET /rolldice` through the router, returning status, body and
/// the `x-request-id` response header.
pub async fn get_rolldice(router: &Router) -> (StatusCode, String, Option<String>) {
    let response = router
        .clone()
        .oneshot(
            Request::builder()
                .uri("/rolldice")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status();
    let request_id = response
        .headers()
        .get("x-request-id")
        .map(|v| v.to_str().unwrap().to_owned());
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, String::from_utf8(bytes.to_vec()).unwrap(), request_id)
}
