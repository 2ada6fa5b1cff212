//! # board-common
//!
//! Shared utilities across the workspace: configuration, application errors,
//! and telemetry setup.

pub mod config;
pub mod error;
pub mod telemetry;

pub use config::{AppConfig, ChartConfig, ConfigError, DatabaseConfig, Environment, ServerConfig};
pub use error::AppError;
pub use telemetry::{init_tracing, try_init_tracing, TracingConfig};
