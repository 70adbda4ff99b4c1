//! In-memory registry of user identities.
//!
//! Two indices are kept: uid → record and email → uid. Both live behind
//! one lock so that the check-then-insert of a registration is a single
//! atomic step.

use crate::error::DirectoryError;
use parking_lot::Mutex;
use std::collections::HashMap;

/// One registered user. Never modified or removed once created.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserRecord {
    pub uid: String,
    pub password: String,
    pub email: String,
}

#[derive(Debug, Default)]
struct Indices {
    by_uid: HashMap<String, UserRecord>,
    uid_by_email: HashMap<String, String>,
}

/// Registry of user records with unique uids and unique emails.
#[derive(Debug, Default)]
pub struct UserDirectory {
    inner: Mutex<Indices>,
}

impl UserDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a new user.
    ///
    /// The uid is checked before the email, so a request that collides on
    /// both reports the uid.
    pub fn register(&self, uid: &str, password: &str, email: &str) -> Result<(), DirectoryError> {
        let mut indices = self.inner.lock();

        if indices.by_uid.contains_key(uid) {
            return Err(DirectoryError::UidTaken(uid.to_string()));
        }
        if indices.uid_by_email.contains_key(email) {
            return Err(DirectoryError::EmailTaken(email.to_string()));
        }

        indices
            .uid_by_email
            .insert(email.to_string(), uid.to_string());
        indices.by_uid.insert(
            uid.to_string(),
            UserRecord {
                uid: uid.to_string(),
                password: password.to_string(),
                email: email.to_string(),
            },
        );
        Ok(())
    }

    /// Look up the uid registered with an email.
    pub fn uid_for_email(&self, email: &str) -> Option<String> {
        self.inner.lock().uid_by_email.get(email).cloned()
    }

    pub fn get(&self, uid: &str) -> Option<UserRecord> {
        self.inner.lock().by_uid.get(uid).cloned()
    }

    pub fn len(&self) -> usize {
        self.inner.lock().by_uid.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
