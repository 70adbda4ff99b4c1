//! Server operator console lines.

use std::fmt;

use super::{expect_no_args, port_arg, split_command};
use crate::error::CommandError;

/// A line typed at the server operator console.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdminCommand<'a> {
    /// `#quit`: close everything and exit.
    Quit,
    /// `#stop`: stop accepting new connections.
    Stop,
    /// `#close`: stop accepting and drop every session.
    Close,
    /// `#setport <n>`
    SetPort(u16),
    /// `#start`: resume accepting connections.
    Start,
    /// `#getport`
    GetPort,
    /// Plain text, relayed to every session.
    Broadcast(&'a str),
}

impl<'a> AdminCommand<'a> {
    /// Parse one operator line.
    pub fn parse(line: &'a str) -> Result<Self, CommandError> {
        let Some((verb, rest)) = split_command(line) else {
            return Ok(Self::Broadcast(line));
        };

        match verb.to_ascii_lowercase().as_str() {
            "quit" => expect_no_args(rest, "usage: #quit").map(|_| Self::Quit),
            "stop" => expect_no_args(rest, "usage: #stop").map(|_| Self::Stop),
            "close" => expect_no_args(rest, "usage: #close").map(|_| Self::Close),
            "start" => expect_no_args(rest, "usage: #start").map(|_| Self::Start),
            "getport" => expect_no_args(rest, "usage: #getport").map(|_| Self::GetPort),
            "setport" => port_arg(rest, "usage: #setport <port>").map(Self::SetPort),
            _ => Err(CommandError::Unknown(verb.to_string())),
        }
    }

    /// Lowercase verb, for logging. Plain text is `"broadcast"`.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Quit => "quit",
            Self::Stop => "stop",
            Self::Close => "close",
            Self::SetPort(_) => "setport",
            Self::Start => "start",
            Self::GetPort => "getport",
            Self::Broadcast(_) => "broadcast",
        }
    }
}

impl fmt::Display for AdminCommand<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Quit => f.write_str("#quit"),
            Self::Stop => f.write_str("#stop"),
            Self::Close => f.write_str("#close"),
            Self::SetPort(port) => write!(f, "#setport {port}"),
            Self::Start => f.write_str("#start"),
            Self::GetPort => f.write_str("#getport"),
            Self::Broadcast(text) => f.write_str(text),
        }
    }
}
