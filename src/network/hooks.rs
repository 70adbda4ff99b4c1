//! Seam between the transport and the chat logic.

use crate::handlers::DispatchResult;
use crate::network::ConnHandle;
use crate::state::{ConnId, SessionState};
use async_trait::async_trait;
use relay_proto::ProtocolError;

/// Callbacks a connection task makes over its lifetime.
///
/// The transport owns the socket and the session state; everything else
/// goes through these hooks. Exactly one `on_connect` and one
/// `on_disconnect` are made per connection, in that order.
#[async_trait]
pub trait ConnectionHooks: Send + Sync + 'static {
    /// Allocate an id for a newly accepted socket.
    fn allocate_id(&self) -> ConnId;

    async fn on_connect(&self, conn: &ConnHandle);

    /// Handle one decoded line.
    async fn on_message(
        &self,
        conn: &ConnHandle,
        session: &mut SessionState,
        line: &str,
    ) -> DispatchResult;

    async fn on_disconnect(&self, conn: &ConnHandle, session: &SessionState);

    /// A read or write failed. `on_disconnect` still follows.
    async fn on_error(&self, conn: &ConnHandle, session: &SessionState, error: &ProtocolError);
}
