//! Session lifecycle: login, connect and disconnect notices.

use super::helpers::{CONNECT_NOTICE, disconnect_notice};
use super::{Context, DispatchResult, dispatch};
use crate::error::{HandlerError, HandlerResult};
use crate::network::{ConnHandle, ConnectionHooks};
use crate::state::{ConnId, Hub, SessionState};
use async_trait::async_trait;
use relay_proto::ProtocolError;
use tracing::{info, warn};

/// `#login <id>`: set the session identity, once.
pub(super) fn handle_login(ctx: &mut Context<'_>, id: &str) -> HandlerResult {
    if !ctx.session.login(id) {
        return Err(HandlerError::AlreadyLoggedIn);
    }
    info!(conn = %ctx.conn.id(), identity = %id, "Client logged in");
    Ok(())
}

#[async_trait]
impl ConnectionHooks for Hub {
    fn allocate_id(&self) -> ConnId {
        self.next_conn_id()
    }

    async fn on_connect(&self, conn: &ConnHandle) {
        info!(conn = %conn.id(), addr = %conn.addr(), "{}", CONNECT_NOTICE);
        self.connections.admit(conn.clone(), CONNECT_NOTICE);
    }

    async fn on_message(
        &self,
        conn: &ConnHandle,
        session: &mut SessionState,
        line: &str,
    ) -> DispatchResult {
        let mut ctx = Context {
            hub: self,
            conn,
            session,
        };
        dispatch(&mut ctx, line)
    }

    async fn on_disconnect(&self, conn: &ConnHandle, session: &SessionState) {
        let notice = disconnect_notice(session.identity());
        if self.connections.depart(conn.id(), &notice) {
            info!(conn = %conn.id(), identity = ?session.identity(), "{}", notice);
        }
    }

    async fn on_error(&self, conn: &ConnHandle, session: &SessionState, error: &ProtocolError) {
        warn!(
            conn = %conn.id(),
            identity = ?session.identity(),
            error = %error,
            "Connection terminated abnormally"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_support::Peer;
    use super::*;

    #[test]
    fn test_login_sets_identity_silently() {
        let hub = Hub::new();
        let mut a = Peer::join(&hub, 1);

        assert_eq!(a.send(&hub, "#login bob"), DispatchResult::Continue);
        assert_eq!(a.session.identity(), Some("bob"));
        assert!(a.lines().is_empty());
    }

    #[test]
    fn test_second_login_rejected() {
        let hub = Hub::new();
        let mut a = Peer::join(&hub, 1);
        a.send(&hub, "#login bob");

        assert_eq!(a.send(&hub, "#login mallory"), DispatchResult::Continue);
        assert_eq!(a.lines(), vec!["You are already logged in."]);
        assert_eq!(a.session.identity(), Some("bob"));
    }

    #[tokio::test]
    async fn test_connect_announced_to_all() {
        let hub = Hub::new();
        let mut a = Peer::join(&hub, 1);

        let addr = "127.0.0.1:40001".parse().unwrap();
        let (b, mut b_rx) = ConnHandle::new(ConnId::new(2), addr, 8);
        hub.on_connect(&b).await;

        assert_eq!(a.lines(), vec![CONNECT_NOTICE]);
        assert_eq!(b_rx.try_recv().unwrap(), CONNECT_NOTICE);
        assert_eq!(hub.connections.len(), 2);
        drop(b);
    }

    #[tokio::test]
    async fn test_authenticated_disconnect_names_identity() {
        let hub = Hub::new();
        let [mut a, mut b] = Peer::join_all(&hub);
        b.send(&hub, "#login carol");

        hub.on_disconnect(&b.conn, &b.session).await;

        assert_eq!(a.lines(), vec!["carol has disconnected"]);
        assert!(b.lines().is_empty());
        assert_eq!(hub.connections.len(), 1);
    }

    #[tokio::test]
    async fn test_anonymous_disconnect() {
        let hub = Hub::new();
        let [mut a, b] = Peer::join_all(&hub);

        hub.on_disconnect(&b.conn, &b.session).await;

        assert_eq!(a.lines(), vec!["A Client has disconnected"]);
    }

    #[tokio::test]
    async fn test_disconnect_is_announced_once() {
        let hub = Hub::new();
        let [mut a, mut b] = Peer::join_all(&hub);
        b.send(&hub, "#login carol");

        hub.on_disconnect(&b.conn, &b.session).await;
        hub.on_disconnect(&b.conn, &b.session).await;

        assert_eq!(a.lines().len(), 1);
    }
}
