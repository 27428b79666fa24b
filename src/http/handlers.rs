//! `/rolldice` handlers.
//!
//! Two variants share one HTTP contract: the plain handler only rolls, the
//! instrumented handler wraps the roll in a `roll` span and counts it.

use axum::extract::State;

use crate::dice::{RandomSource, Roll, RollError};
use crate::http::error::AppError;
use crate::http::server::AppState;
use crate::observability::metrics::Counter;
use crate::observability::spans::{self, ROLL_VALUE};

/// Roll once inside a `roll` span and count the outcome.
///
/// The span is a child of whatever span is current (the request span when
/// called through the router). It closes when this function returns, on
/// success and on failure. The span attribute and the counter label are
/// both taken from the single [`Roll`] returned, and nothing is counted when
/// the roll fails.
pub fn instrumented_roll(
    source: &dyn RandomSource,
    counter: &dyn Counter,
) -> Result<Roll, RollError> {
    let span = tracing::info_span!(
        target: spans::TARGET,
        "roll",
        roll.value = tracing::field::Empty,
        error = tracing::field::Empty,
        exception.message = tracing::field::Empty,
    );
    let _entered = span.enter();

    match Roll::roll(source) {
        Ok(roll) => {
            let value = roll.to_string();
            span.record(ROLL_VALUE, value.as_str());
            counter.add(1, &[(ROLL_VALUE, value)]);
            Ok(roll)
        }
        Err(e) => {
            spans::record_error(&span, &e);
            tracing::error!(target: spans::TARGET, error = %e, "Roll failed");
            Err(e)
        }
    }
}

/// `GET /rolldice`, instrumented.
pub async fn roll_dice(State(state): State<AppState>) -> Result<String, AppError> {
    let roll = instrumented_roll(state.source.as_ref(), state.rolls.as_ref())?;
    Ok(roll.to_string())
}

/// `GET /rolldice`, without span or counter.
pub async fn roll_dice_plain(State(state): State<AppState>) -> Result<String, AppError> {
    let roll = Roll::roll(state.source.as_ref()).inspect_err(|e| {
        tracing::error!(target: spans::TARGET, error = %e, "Roll failed");
    })?;
    Ok(roll.to_string())
}
