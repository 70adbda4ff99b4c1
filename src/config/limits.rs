//! Per-connection limits.

use serde::Deserialize;
use std::time::Duration;

use super::defaults::{default_max_line_length, default_outgoing_queue, default_shutdown_grace_ms};

/// Limits applied to every client connection.
#[derive(Debug, Clone, Deserialize)]
pub struct LimitsConfig {
    /// Longest accepted inbound line in bytes, terminator included.
    #[serde(default = "default_max_line_length")]
    pub max_line_length: usize,
    /// Outgoing lines buffered per connection before new ones are dropped.
    #[serde(default = "default_outgoing_queue")]
    pub outgoing_queue: usize,
    /// How long `#close`/`#quit` wait for connection tasks to wind down.
    #[serde(default = "default_shutdown_grace_ms")]
    pub shutdown_grace_ms: u64,
}

impl LimitsConfig {
    pub fn shutdown_grace(&self) -> Duration {
        Duration::from_millis(self.shutdown_grace_ms)
    }
}

impl Default for LimitsConfig {
    fn default() -> Self {
        Self {
            max_line_length: default_max_line_length(),
            outgoing_queue: default_outgoing_queue(),
            shutdown_grace_ms: default_shutdown_grace_ms(),
        }
    }
}
