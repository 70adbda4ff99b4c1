//! # relay-proto
//!
//! Wire-level pieces of the relayd chat relay: newline framing and the
//! three command grammars spoken over it.
//!
//! Every line is either a command (it starts with [`COMMAND_MARKER`]) or
//! plain chat text. Commands are parsed into borrowed, typed variants so
//! handlers never re-inspect raw strings.
//!
//! ```rust
//! use relay_proto::ClientCommand;
//!
//! let cmd = ClientCommand::parse("#reg alice p1 a@x.com").unwrap();
//! assert_eq!(
//!     cmd,
//!     ClientCommand::Register { uid: "alice", password: "p1", email: "a@x.com" }
//! );
//! assert_eq!(ClientCommand::Login("bob").to_string(), "#login bob");
//! ```

#![deny(clippy::all)]
#![warn(missing_docs)]

pub mod command;
pub mod error;
#[cfg(feature = "tokio")]
pub mod line;

pub use command::{split_command, AdminCommand, ClientCommand, ConsoleCommand, COMMAND_MARKER};
pub use error::{CommandError, ProtocolError};
#[cfg(feature = "tokio")]
pub use line::LineCodec;
