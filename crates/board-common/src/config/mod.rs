//! Application configuration

mod app_config;

pub use app_config::{
    AppConfig, ChartConfig, ConfigError, DatabaseConfig, Environment, ServerConfig,
};
