//! Per-connection session state.

/// What the server knows about one live connection.
///
/// Owned by the connection task and handed to handlers by `&mut`. The
/// identity moves from unset to set at most once; nothing clears it.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct SessionState {
    identity: Option<String>,
}

impl SessionState {
    pub fn new() -> Self {
        Self::default()
    }

    /// The login id, if the session has logged in.
    pub fn identity(&self) -> Option<&str> {
        self.identity.as_deref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.identity.is_some()
    }

    /// Record the login id. Returns `false` (and changes nothing) if one
    /// is already set.
    pub fn login(&mut self, identity: &str) -> bool {
        if self.identity.is_some() {
            return false;
        }
        self.identity = Some(identity.to_string());
        true
    }
}
