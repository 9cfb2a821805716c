//! Configuration file parsing (JSON format).

use std::path::Path;

use serde::Deserialize;

use crate::common::error::ConfigError;
use crate::config::types::Config;
use crate::config::validate::validate_config;

/// A config file holds either one relay config or an array of them.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum OneOrMany {
    One(Box<Config>),
    Many(Vec<Config>),
}

/// Load and validate every relay configuration in a JSON file.
pub fn load_configs(path: impl AsRef<Path>) -> Result<Vec<Config>, ConfigError> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::IoError {
        path: path.display().to_string(),
        source: e,
    })?;
    load_configs_str(&content)
}

/// Load and validate a single relay configuration from a JSON file.
///
/// Errors if the file holds more than one configuration; use
/// [`load_configs`] for multi-relay files.
pub fn load_config(path: impl AsRef<Path>) -> Result<Config, ConfigError> {
    let mut configs = load_configs(path)?;
    if configs.len() != 1 {
        return Err(ConfigError::ValidationError {
            message: format!(
                "expected a single relay configuration, found {}",
                configs.len()
            ),
        });
    }
    Ok(configs.remove(0))
}

/// Parse and validate relay configurations from a JSON string.
pub fn load_configs_str(content: &str) -> Result<Vec<Config>, ConfigError> {
    let parsed: OneOrMany =
        serde_json::from_str(content).map_err(|e| ConfigError::ParseError {
            message: e.to_string(),
        })?;

    let configs = match parsed {
        OneOrMany::One(config) => vec![*config],
        OneOrMany::Many(configs) => configs,
    };

    if configs.is_empty() {
        return Err(ConfigError::ValidationError {
            message: "config file holds no relay configurations".to_string(),
        });
    }

    for config in &configs {
        validate_config(config)?;
    }

    Ok(configs)
}
