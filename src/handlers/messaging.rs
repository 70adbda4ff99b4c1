//! Chat relay.

use super::Context;
use super::helpers::chat_line;
use crate::error::{HandlerError, HandlerResult};
use tracing::info;

/// Relay a chat line from a logged-in session to every session.
pub(super) fn handle_chat(ctx: &mut Context<'_>, text: &str) -> HandlerResult {
    let identity = ctx.session.identity().ok_or(HandlerError::NotLoggedIn)?;

    info!(conn = %ctx.conn.id(), identity = %identity, "Message received: {}", text);
    let delivered = ctx.hub.connections.broadcast(&chat_line(identity, text));
    tracing::debug!(delivered, "Chat relayed");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::super::test_support::Peer;
    use super::super::DispatchResult;
    use crate::state::Hub;

    #[test]
    fn test_chat_fans_out_to_everyone() {
        let hub = Hub::new();
        let [mut a, mut b, mut c] = Peer::join_all(&hub);
        a.send(&hub, "#login bob");
        b.send(&hub, "#login carol");

        assert_eq!(a.send(&hub, "hello"), DispatchResult::Continue);

        assert_eq!(a.lines(), vec!["bob> hello"]);
        assert_eq!(b.lines(), vec!["bob> hello"]);
        assert_eq!(c.lines(), vec!["bob> hello"]);
    }

    #[test]
    fn test_chat_before_login_rejected_and_closed() {
        let hub = Hub::new();
        let [mut a, mut b] = Peer::join_all(&hub);

        assert_eq!(a.send(&hub, "hello"), DispatchResult::Close);

        assert_eq!(a.lines(), vec!["You need to login before you can chat."]);
        assert!(b.lines().is_empty());
    }

    #[test]
    fn test_unknown_command_is_chat() {
        let hub = Hub::new();
        let mut a = Peer::join(&hub, 1);
        a.send(&hub, "#login bob");

        a.send(&hub, "#shrug ok");
        assert_eq!(a.lines(), vec!["bob> #shrug ok"]);
    }
}
