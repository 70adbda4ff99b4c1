//! Client-local console lines.

use super::{args, expect_no_args, port_arg, split_command};
use crate::command::client::LOGIN_USAGE;
use crate::error::CommandError;

/// A line typed at a chat client's console.
///
/// Verbs the client does not handle itself (including server commands
/// such as `#reg`) are forwarded verbatim as [`ConsoleCommand::Send`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConsoleCommand<'a> {
    /// `#quit`: disconnect and exit.
    Quit,
    /// `#logoff`: disconnect, keep the login id.
    Logoff,
    /// `#setport <n>`
    SetPort(u16),
    /// `#sethost <h>`
    SetHost(&'a str),
    /// `#login <id>`: connect and log in.
    Login(&'a str),
    /// `#gethost`
    GetHost,
    /// `#getport`
    GetPort,
    /// Anything else, sent to the server.
    Send(&'a str),
}

impl<'a> ConsoleCommand<'a> {
    /// Parse one console line.
    pub fn parse(line: &'a str) -> Result<Self, CommandError> {
        let Some((verb, rest)) = split_command(line) else {
            return Ok(Self::Send(line));
        };

        match verb.to_ascii_lowercase().as_str() {
            "quit" => expect_no_args(rest, "usage: #quit").map(|_| Self::Quit),
            "logoff" => expect_no_args(rest, "usage: #logoff").map(|_| Self::Logoff),
            "gethost" => expect_no_args(rest, "usage: #gethost").map(|_| Self::GetHost),
            "getport" => expect_no_args(rest, "usage: #getport").map(|_| Self::GetPort),
            "setport" => port_arg(rest, "usage: #setport <port>").map(Self::SetPort),
            "sethost" => match args(rest)[..] {
                [host] => Ok(Self::SetHost(host)),
                _ => Err(CommandError::Usage("usage: #sethost <host>")),
            },
            "login" => match args(rest)[..] {
                [id] => Ok(Self::Login(id)),
                _ => Err(CommandError::Usage(LOGIN_USAGE)),
            },
            _ => Ok(Self::Send(line)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_local_verbs() {
        assert_eq!(ConsoleCommand::parse("#quit"), Ok(ConsoleCommand::Quit));
        assert_eq!(ConsoleCommand::parse("#LogOff"), Ok(ConsoleCommand::Logoff));
        assert_eq!(ConsoleCommand::parse("#gethost"), Ok(ConsoleCommand::GetHost));
        assert_eq!(ConsoleCommand::parse("#getport"), Ok(ConsoleCommand::GetPort));
        assert_eq!(
            ConsoleCommand::parse("#sethost chat.example.org"),
            Ok(ConsoleCommand::SetHost("chat.example.org"))
        );
        assert_eq!(
            ConsoleCommand::parse("#login carol"),
            Ok(ConsoleCommand::Login("carol"))
        );
    }

    #[test]
    fn test_setport_parse_error() {
        assert_eq!(
            ConsoleCommand::parse("#setport 5556"),
            Ok(ConsoleCommand::SetPort(5556))
        );
        assert_eq!(
            ConsoleCommand::parse("#setport nope"),
            Err(CommandError::InvalidPort("nope".to_string()))
        );
    }

    #[test]
    fn test_login_requires_id() {
        assert_eq!(
            ConsoleCommand::parse("#login"),
            Err(CommandError::Usage(LOGIN_USAGE))
        );
    }

    #[test]
    fn test_server_commands_are_forwarded() {
        assert_eq!(
            ConsoleCommand::parse("#reg alice p1 a@x.com"),
            Ok(ConsoleCommand::Send("#reg alice p1 a@x.com"))
        );
        assert_eq!(
            ConsoleCommand::parse("good morning"),
            Ok(ConsoleCommand::Send("good morning"))
        );
    }
}
