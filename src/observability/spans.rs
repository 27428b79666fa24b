//! Span target and attribute keys shared by handlers.
//!
//! The tracer is the `tracing` dispatcher installed at startup. Spans opened
//! under [`TARGET`] close when their last handle drops, so every exit path of
//! the enclosing scope releases them.

use tracing::Span;

/// Target for spans and events emitted by the roll handler.
pub const TARGET: &str = "diceroller";

/// Span attribute and counter label carrying the rolled face.
pub const ROLL_VALUE: &str = "roll.value";

/// Flag a span as failed.
pub fn record_error(span: &Span, error: &dyn std::error::Error) {
    span.record("error", true);
    span.record("exception.message", tracing::field::display(error));
}
