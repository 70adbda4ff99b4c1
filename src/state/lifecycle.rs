//! Listener lifecycle state.
//!
//! Pure bookkeeping: whether the server is accepting connections and on
//! which port. The guard for `#setport` lives here so it is checked in the
//! same critical section that changes the port.

use crate::error::LifecycleError;
use std::net::SocketAddr;

/// Whether the listener is up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListenState {
    Stopped,
    Listening { addr: SocketAddr },
}

/// Listener state plus the configured port.
#[derive(Debug, Clone)]
pub struct Lifecycle {
    port: u16,
    state: ListenState,
}

impl Lifecycle {
    pub fn new(port: u16) -> Self {
        Self {
            port,
            state: ListenState::Stopped,
        }
    }

    /// The configured port (what `#getport` reports).
    pub fn port(&self) -> u16 {
        self.port
    }

    pub fn state(&self) -> ListenState {
        self.state
    }

    pub fn is_listening(&self) -> bool {
        matches!(self.state, ListenState::Listening { .. })
    }

    /// Address actually bound, while listening.
    pub fn listening_addr(&self) -> Option<SocketAddr> {
        match self.state {
            ListenState::Listening { addr } => Some(addr),
            ListenState::Stopped => None,
        }
    }

    /// Change the port. Allowed only when stopped and `live_sessions` is 0.
    pub fn set_port(&mut self, port: u16, live_sessions: usize) -> Result<u16, LifecycleError> {
        let listening = self.is_listening();
        if listening || live_sessions > 0 {
            return Err(LifecycleError::NotClosed {
                reason: not_closed_reason(listening, live_sessions),
            });
        }
        self.port = port;
        Ok(port)
    }

    pub fn mark_listening(&mut self, addr: SocketAddr) {
        self.state = ListenState::Listening { addr };
    }

    /// Returns whether the state changed.
    pub fn mark_stopped(&mut self) -> bool {
        let was_listening = self.is_listening();
        self.state = ListenState::Stopped;
        was_listening
    }
}

fn not_closed_reason(listening: bool, live_sessions: usize) -> String {
    let sessions = match live_sessions {
        0 => None,
        1 => Some("1 client connection still active".to_string()),
        n => Some(format!("{n} client connections still active")),
    };
    match (listening, sessions) {
        (true, Some(s)) => format!("still listening, {s}"),
        (true, None) => "still listening".to_string(),
        (false, Some(s)) => s,
        (false, None) => String::new(),
    }
}
