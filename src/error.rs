//! Unified error handling for relayd.
//!
//! Every rejection a client or operator can see is a typed variant here.
//! The `Display` text of a [`HandlerError`] is exactly the line sent back
//! to the originating session.

use relay_proto::CommandError;
use thiserror::Error;

// ============================================================================
// Handler Errors (client command processing)
// ============================================================================

/// Errors that can occur while handling a line from a chat client.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HandlerError {
    /// Wrong argument count or malformed argument.
    #[error("{0}")]
    Usage(String),

    #[error("{0} has already been used by another user. Please choose another uid.")]
    UidTaken(String),

    #[error(
        "{0} has already been used by another user. Please choose another email or request to send forgotten uid and/or pw."
    )]
    EmailTaken(String),

    #[error(
        "Sorry, {0} does not exist in our records. Please use the email address with which the account has been registered, or register another account."
    )]
    EmailUnknown(String),

    #[error("You are already logged in.")]
    AlreadyLoggedIn,

    /// Chat before login. The session is closed after the reply.
    #[error("You need to login before you can chat.")]
    NotLoggedIn,
}

impl HandlerError {
    /// Get a static error code string for log labeling.
    #[inline]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Usage(_) => "usage",
            Self::UidTaken(_) => "uid_taken",
            Self::EmailTaken(_) => "email_taken",
            Self::EmailUnknown(_) => "email_unknown",
            Self::AlreadyLoggedIn => "already_logged_in",
            Self::NotLoggedIn => "not_logged_in",
        }
    }

    /// Whether the originating connection must be closed after the reply.
    #[inline]
    pub fn closes_connection(&self) -> bool {
        matches!(self, Self::NotLoggedIn)
    }
}

impl From<CommandError> for HandlerError {
    fn from(err: CommandError) -> Self {
        Self::Usage(err.to_string())
    }
}

impl From<DirectoryError> for HandlerError {
    fn from(err: DirectoryError) -> Self {
        match err {
            DirectoryError::UidTaken(uid) => Self::UidTaken(uid),
            DirectoryError::EmailTaken(email) => Self::EmailTaken(email),
        }
    }
}

/// Result type for command handlers.
pub type HandlerResult = Result<(), HandlerError>;

// ============================================================================
// Directory Errors (registry conflicts)
// ============================================================================

/// Uniqueness violations reported by the user directory.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DirectoryError {
    #[error("uid {0} is already registered")]
    UidTaken(String),

    #[error("email {0} is already registered")]
    EmailTaken(String),
}

// ============================================================================
// Lifecycle Errors (operator console)
// ============================================================================

/// Rejections and failures of server lifecycle commands.
#[derive(Debug, Error)]
pub enum LifecycleError {
    /// `#setport` while listening or with live sessions.
    #[error("The server is not closed ({reason}). Port cannot be changed.")]
    NotClosed { reason: String },

    #[error("The server is already listening for clients.")]
    AlreadyListening,

    #[error("Error - Could not listen for clients on port {port}: {source}")]
    Bind {
        port: u16,
        #[source]
        source: std::io::Error,
    },
}

impl LifecycleError {
    /// Get a static error code string for log labeling.
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::NotClosed { .. } => "not_closed",
            Self::AlreadyListening => "already_listening",
            Self::Bind { .. } => "bind_failed",
        }
    }
}
