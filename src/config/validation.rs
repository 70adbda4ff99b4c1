//! Configuration validation.
//!
//! Validates configuration at startup to catch common errors early.

use super::Config;
use thiserror::Error;

/// Validation errors for configuration.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("limits.max_line_length must be greater than zero")]
    ZeroLineLength,
    #[error("limits.outgoing_queue must be greater than zero")]
    ZeroOutgoingQueue,
    #[error("client.host must not be empty")]
    EmptyClientHost,
}

/// Validate a configuration, returning all errors found.
pub fn validate(config: &Config) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.limits.max_line_length == 0 {
        errors.push(ValidationError::ZeroLineLength);
    }
    // tokio mpsc panics on a zero capacity
    if config.limits.outgoing_queue == 0 {
        errors.push(ValidationError::ZeroOutgoingQueue);
    }
    if config.client.host.trim().is_empty() {
        errors.push(ValidationError::EmptyClientHost);
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
