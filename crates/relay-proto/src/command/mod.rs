//! Command grammars.
//!
//! A line whose first character is [`COMMAND_MARKER`] carries a verb and
//! whitespace-delimited arguments; everything else is free text. Three
//! grammars share that shape:
//!
//! - [`ClientCommand`]: lines a chat client sends to the server
//! - [`AdminCommand`]: lines typed at the server operator console
//! - [`ConsoleCommand`]: lines typed at a client's local console
//!
//! Verbs are matched ASCII case-insensitively. Parsing borrows from the
//! input line.

mod admin;
mod client;
mod console;

pub use admin::AdminCommand;
pub use client::ClientCommand;
pub use console::ConsoleCommand;

use crate::error::CommandError;

/// First character of every command line.
pub const COMMAND_MARKER: char = '#';

/// Split a command line into its verb and the remainder.
///
/// Returns `None` when the line is not a command. The verb is returned as
/// typed; the remainder has leading whitespace removed.
///
/// ```rust
/// use relay_proto::split_command;
///
/// assert_eq!(split_command("#setport 6000"), Some(("setport", "6000")));
/// assert_eq!(split_command("#QUIT"), Some(("QUIT", "")));
/// assert_eq!(split_command("hello #world"), None);
/// ```
pub fn split_command(line: &str) -> Option<(&str, &str)> {
    let body = line.strip_prefix(COMMAND_MARKER)?;
    match body.find(char::is_whitespace) {
        Some(idx) => Some((&body[..idx], body[idx..].trim_start())),
        None => Some((body, "")),
    }
}

/// Tokenize the argument part of a command line.
pub(crate) fn args(rest: &str) -> Vec<&str> {
    rest.split_whitespace().collect()
}

/// Reject arguments on a verb that takes none.
pub(crate) fn expect_no_args(rest: &str, usage: &'static str) -> Result<(), CommandError> {
    if rest.trim().is_empty() {
        Ok(())
    } else {
        Err(CommandError::Usage(usage))
    }
}

/// Parse a single port argument.
pub(crate) fn port_arg(rest: &str, usage: &'static str) -> Result<u16, CommandError> {
    match args(rest)[..] {
        [n] => n
            .parse::<u16>()
            .map_err(|_| CommandError::InvalidPort(n.to_string())),
        _ => Err(CommandError::Usage(usage)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_command_with_args() {
        assert_eq!(
            split_command("#reg alice p1 a@x.com"),
            Some(("reg", "alice p1 a@x.com"))
        );
    }

    #[test]
    fn test_split_command_extra_spacing() {
        assert_eq!(split_command("#login   bob"), Some(("login", "bob")));
    }

    #[test]
    fn test_split_command_bare_marker() {
        assert_eq!(split_command("#"), Some(("", "")));
    }

    #[test]
    fn test_split_command_not_a_command() {
        assert_eq!(split_command("login bob"), None);
        assert_eq!(split_command(" #login bob"), None);
        assert_eq!(split_command(""), None);
    }

    #[test]
    fn test_port_arg() {
        assert_eq!(port_arg("6000", "u"), Ok(6000));
        assert_eq!(
            port_arg("70000", "u"),
            Err(CommandError::InvalidPort("70000".to_string()))
        );
        assert_eq!(port_arg("", "u"), Err(CommandError::Usage("u")));
        assert_eq!(port_arg("1 2", "u"), Err(CommandError::Usage("u")));
    }
}
