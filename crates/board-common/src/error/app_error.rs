//! Application-level errors
//!
//! Errors raised while wiring the application together (configuration,
//! connecting to the store, binding the listener). Request-time errors are
//! handled by the service and API layers.

use thiserror::Error;

use crate::config::ConfigError;

/// Application bootstrap errors
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Database error: {0}")]
    Database(String),

    #[error("I/O error: {0}")]
    Io(String),
}

impl From<ConfigError> for AppError {
    fn from(e: ConfigError) -> Self {
        Self::Config(e.to_string())
    }
}

impl From<std::io::Error> for AppError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e.to_string())
    }
}
