//! Hub - shared state reached by every connection task.

use crate::state::{ConnId, ConnIdGenerator, Connections, UserDirectory};

/// Shared server state: the user directory and the live connections.
#[derive(Default)]
pub struct Hub {
    pub directory: UserDirectory,
    pub connections: Connections,
    conn_ids: ConnIdGenerator,
}

impl Hub {
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocate an id for a newly accepted connection.
    pub fn next_conn_id(&self) -> ConnId {
        self.conn_ids.next()
    }
}
