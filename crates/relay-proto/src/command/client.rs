//! Client-to-server protocol lines.

use std::fmt;

use super::{args, split_command};
use crate::error::CommandError;

/// Usage line for `#login`.
pub const LOGIN_USAGE: &str = "usage: #login <id>";
/// Usage line for `#reg`.
pub const REG_USAGE: &str = "usage: #reg <uid> <pw> <email>";
/// Usage line for `#regInfo`.
pub const REG_INFO_USAGE: &str = "usage: #regInfo <email>";

/// A line received from a chat client.
///
/// Marker-prefixed lines with an unrecognized verb are chat, not errors:
/// the server relays them like any other text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClientCommand<'a> {
    /// `#login <id>`
    Login(&'a str),
    /// `#reg <uid> <pw> <email>`
    Register {
        /// Requested identity.
        uid: &'a str,
        /// Password, stored as given.
        password: &'a str,
        /// Contact address; unique across records.
        email: &'a str,
    },
    /// `#regInfo <email>`
    RegInfo {
        /// Address to look up.
        email: &'a str,
    },
    /// Any other line.
    Chat(&'a str),
}

impl<'a> ClientCommand<'a> {
    /// Parse one inbound line.
    pub fn parse(line: &'a str) -> Result<Self, CommandError> {
        let Some((verb, rest)) = split_command(line) else {
            return Ok(Self::Chat(line));
        };

        match verb.to_ascii_lowercase().as_str() {
            "login" => match args(rest)[..] {
                [id] => Ok(Self::Login(id)),
                _ => Err(CommandError::Usage(LOGIN_USAGE)),
            },
            "reg" => match args(rest)[..] {
                [uid, password, email] => Ok(Self::Register {
                    uid,
                    password,
                    email,
                }),
                _ => Err(CommandError::Usage(REG_USAGE)),
            },
            "reginfo" => match args(rest)[..] {
                [email] => Ok(Self::RegInfo { email }),
                _ => Err(CommandError::Usage(REG_INFO_USAGE)),
            },
            _ => Ok(Self::Chat(line)),
        }
    }

    /// Lowercase verb name, used for logging.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Login(_) => "login",
            Self::Register { .. } => "reg",
            Self::RegInfo { .. } => "reginfo",
            Self::Chat(_) => "chat",
        }
    }
}

impl fmt::Display for ClientCommand<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Login(id) => write!(f, "#login {id}"),
            Self::Register {
                uid,
                password,
                email,
            } => write!(f, "#reg {uid} {password} {email}"),
            Self::RegInfo { email } => write!(f, "#regInfo {email}"),
            Self::Chat(text) => f.write_str(text),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login() {
        assert_eq!(
            ClientCommand::parse("#login bob"),
            Ok(ClientCommand::Login("bob"))
        );
        assert_eq!(
            ClientCommand::parse("#LOGIN bob"),
            Ok(ClientCommand::Login("bob"))
        );
    }

    #[test]
    fn test_login_wrong_arity() {
        assert_eq!(
            ClientCommand::parse("#login"),
            Err(CommandError::Usage(LOGIN_USAGE))
        );
        assert_eq!(
            ClientCommand::parse("#login bob smith"),
            Err(CommandError::Usage(LOGIN_USAGE))
        );
    }

    #[test]
    fn test_login_prefix_is_not_login() {
        // A verb that merely starts with "login" is chat
        assert_eq!(
            ClientCommand::parse("#loginbob"),
            Ok(ClientCommand::Chat("#loginbob"))
        );
    }

    #[test]
    fn test_register() {
        assert_eq!(
            ClientCommand::parse("#Reg alice p1 a@x.com"),
            Ok(ClientCommand::Register {
                uid: "alice",
                password: "p1",
                email: "a@x.com"
            })
        );
    }

    #[test]
    fn test_register_wrong_arity() {
        for line in ["#reg", "#reg alice", "#reg alice p1", "#reg a b c d"] {
            assert_eq!(
                ClientCommand::parse(line),
                Err(CommandError::Usage(REG_USAGE)),
                "{line}"
            );
        }
    }

    #[test]
    fn test_reg_info_takes_one_argument() {
        assert_eq!(
            ClientCommand::parse("#regInfo a@x.com"),
            Ok(ClientCommand::RegInfo { email: "a@x.com" })
        );
        assert_eq!(
            ClientCommand::parse("#reginfo a@x.com"),
            Ok(ClientCommand::RegInfo { email: "a@x.com" })
        );
        assert_eq!(
            ClientCommand::parse("#regInfo alice p1 a@x.com"),
            Err(CommandError::Usage(REG_INFO_USAGE))
        );
        assert_eq!(
            ClientCommand::parse("#regInfo"),
            Err(CommandError::Usage(REG_INFO_USAGE))
        );
    }

    #[test]
    fn test_chat() {
        assert_eq!(
            ClientCommand::parse("hello there"),
            Ok(ClientCommand::Chat("hello there"))
        );
        assert_eq!(
            ClientCommand::parse("#nope x"),
            Ok(ClientCommand::Chat("#nope x"))
        );
    }

    #[test]
    fn test_display_wire_form() {
        assert_eq!(ClientCommand::Login("bob").to_string(), "#login bob");
        assert_eq!(
            ClientCommand::RegInfo { email: "a@x.com" }.to_string(),
            "#regInfo a@x.com"
        );
        assert_eq!(ClientCommand::Chat("hi").to_string(), "hi");
    }
}
