//! Default value functions for configuration.

use std::net::{IpAddr, Ipv4Addr};

/// Port used when neither the config file nor the command line names one.
pub const DEFAULT_PORT: u16 = 5555;

/// Login id a client uses when started without one.
pub const DEFAULT_LOGIN_ID: &str = "ANONYMOUS";

// =============================================================================
// Server Defaults
// =============================================================================

pub fn default_bind() -> IpAddr {
    IpAddr::V4(Ipv4Addr::UNSPECIFIED)
}

pub fn default_port() -> u16 {
    DEFAULT_PORT
}

// =============================================================================
// Limits Defaults
// =============================================================================

pub fn default_max_line_length() -> usize {
    relay_proto::line::DEFAULT_MAX_LINE
}

pub fn default_outgoing_queue() -> usize {
    64
}

pub fn default_shutdown_grace_ms() -> u64 {
    5000
}

// =============================================================================
// Client Defaults
// =============================================================================

pub fn default_host() -> String {
    "localhost".to_string()
}
