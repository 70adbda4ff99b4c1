//! Standardized span constructors.

use std::net::SocketAddr;

use crate::state::ConnId;

pub mod spans {
    use super::{ConnId, SocketAddr};
    use tracing::{Span, info_span};

    /// Create a span for a client connection.
    pub fn connection(id: ConnId, addr: SocketAddr) -> Span {
        info_span!("connection", conn = %id, addr = %addr)
    }

    /// Create a span for a command execution.
    pub fn command(name: &str, conn: ConnId) -> Span {
        info_span!("command", name = %name, conn = %conn)
    }

    /// Create a span for an operator console command.
    pub fn admin(name: &str) -> Span {
        info_span!("admin", name = %name)
    }
}
