//! Configuration validation.
//!
//! # Design Decisions
//! - Returns all validation errors, not just the first
//! - Validation is a pure function: DiceConfig → Result<(), Vec<ValidationError>>
//! - Runs after CLI overrides, before the config is used

use std::fmt;
use std::net::SocketAddr;

use crate::config::schema::DiceConfig;

/// A single semantic problem in the configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    pub field: &'static str,
    pub message: String,
}

impl ValidationError {
    fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Check the configuration for semantic errors.
pub fn validate_config(config: &DiceConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    let bind = config.listener.bind_address.parse::<SocketAddr>();
    if bind.is_err() {
        errors.push(ValidationError::new(
            "listener.bind_address",
            format!("'{}' is not a socket address", config.listener.bind_address),
        ));
    }

    if config.timeouts.request_secs == 0 {
        errors.push(ValidationError::new("timeouts.request_secs", "must be greater than 0"));
    }

    let obs = &config.observability;
    if obs.log_filter.trim().is_empty() {
        errors.push(ValidationError::new("observability.log_filter", "must not be empty"));
    }

    if obs.metrics_enabled {
        match obs.metrics_address.parse::<SocketAddr>() {
            Ok(metrics) => {
                if bind.as_ref().is_ok_and(|bind| *bind == metrics) {
                    errors.push(ValidationError::new(
                        "observability.metrics_address",
                        "must differ from listener.bind_address",
                    ));
                }
            }
            Err(_) => errors.push(ValidationError::new(
                "observability.metrics_address",
                format!("'{}' is not a socket address", obs.metrics_address),
            )),
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
