//! Configuration loading and management.
//!
//! This module is split into logical submodules:
//! - [`types`]: Core config struct definitions (Config, ServerConfig, ClientConfig)
//! - [`limits`]: Per-connection limits (LimitsConfig)
//! - [`defaults`]: serde default value functions
//! - [`validation`]: startup sanity checks

mod defaults;
mod limits;
mod types;
mod validation;

pub use defaults::{DEFAULT_LOGIN_ID, DEFAULT_PORT};
pub use limits::LimitsConfig;
pub use types::{ClientConfig, Config, ConfigError, ServerConfig};
pub use validation::{ValidationError, validate};

/// Environment variable naming an optional TOML config file.
pub const CONFIG_ENV: &str = "RELAYD_CONFIG";
