//! Live connection registry and broadcast.
//!
//! Membership changes take the write lock and broadcasts take the read
//! lock, so a broadcast always delivers to one consistent snapshot of the
//! members. Join and leave notices are sent while the write lock is still
//! held, so they are ordered with the membership change they announce.

use crate::network::ConnHandle;
use crate::state::ConnId;
use parking_lot::RwLock;
use std::collections::HashMap;

/// The set of connected sessions.
#[derive(Debug, Default)]
pub struct Connections {
    members: RwLock<HashMap<ConnId, ConnHandle>>,
}

impl Connections {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a connection, then announce it to every member (itself included).
    pub fn admit(&self, conn: ConnHandle, notice: &str) {
        let mut members = self.members.write();
        members.insert(conn.id(), conn);
        for member in members.values() {
            member.send(notice);
        }
    }

    /// Remove a connection and announce its departure to the rest.
    ///
    /// Returns `false` if the id was not a member; nothing is sent then.
    pub fn depart(&self, id: ConnId, notice: &str) -> bool {
        let mut members = self.members.write();
        if members.remove(&id).is_none() {
            return false;
        }
        for member in members.values() {
            member.send(notice);
        }
        true
    }

    /// Deliver a line to every member. Returns how many accepted it.
    pub fn broadcast(&self, line: &str) -> usize {
        let members = self.members.read();
        members.values().filter(|member| member.send(line)).count()
    }

    /// Ask every member to close. Returns how many were asked.
    pub fn close_all(&self) -> usize {
        let members = self.members.read();
        for member in members.values() {
            member.close();
        }
        members.len()
    }

    /// Tear down every member without waiting for a flush.
    pub fn abort_all(&self) -> usize {
        let members = self.members.read();
        for member in members.values() {
            member.abort();
        }
        members.len()
    }

    pub fn len(&self) -> usize {
        self.members.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.read().is_empty()
    }

    pub fn contains(&self, id: ConnId) -> bool {
        self.members.read().contains_key(&id)
    }
}
