use std::{str::FromStr, time::Duration};

use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("Invalid value for {name}: {value:?}")]
    InvalidValue { name: String, value: String },

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Reads `name` from the environment, falling back to `default` when unset or empty.
pub fn env_or<T: FromStr>(name: &str, default: T) -> Result<T, ConfigError> {
    match std::env::var(name) {
        Ok(value) if !value.trim().is_empty() => {
            value
                .trim()
                .parse::<T>()
                .map_err(|_| ConfigError::InvalidValue {
                    name: name.to_string(),
                    value,
                })
        }
        _ => Ok(default),
    }
}

pub fn env_opt(name: &str) -> Option<String> {
    std::env::var(name)
        .ok()
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

pub fn env_millis_or(name: &str, default: Duration) -> Result<Duration, ConfigError> {
    let millis = env_or(name, default.as_millis() as u64)?;
    Ok(Duration::from_millis(millis))
}
