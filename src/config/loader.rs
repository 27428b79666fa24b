//! Configuration loading from disk.

use std::fs;
use std::path::Path;

use crate::config::schema::{DiceConfig, LogFormat};
use crate::config::validation::{validate_config, ValidationError};

/// Error type for configuration loading.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation failed: {}", join(.0))]
    Validation(Vec<ValidationError>),
}

fn join(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Parse and validate configuration from TOML text.
pub fn parse_config(content: &str) -> Result<DiceConfig, ConfigError> {
    let config: DiceConfig = toml::from_str(content)?;
    validate_config(&config).map_err(ConfigError::Validation)?;
    Ok(config)
}

/// Load and validate configuration from a TOML file.
pub fn load_config(path: &Path) -> Result<DiceConfig, ConfigError> {
    let content = fs::read_to_string(path)?;
    parse_config(&content)
}

/// Apply command line overrides on top of a loaded config and validate the
/// result again.
pub fn apply_overrides(
    mut config: DiceConfig,
    bind_address: Option<&str>,
    json_logs: bool,
) -> Result<DiceConfig, ConfigError> {
    if let Some(bind_address) = bind_address {
        config.listener.bind_address = bind_address.to_string();
    }
    if json_logs {
        config.observability.log_format = LogFormat::Json;
    }

    validate_config(&config).map_err(ConfigError::Validation)?;
    Ok(config)
}
