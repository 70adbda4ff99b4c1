//! Cloneable capability for one live connection.

use crate::state::ConnId;
use std::net::SocketAddr;
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;
use tracing::debug;

/// Handle to a connection task: queue a line to it, or ask it to close.
///
/// Sending never blocks. A full or closed queue drops the line, which is
/// the delivery contract for every server → client message.
#[derive(Debug, Clone)]
pub struct ConnHandle {
    id: ConnId,
    addr: SocketAddr,
    outgoing: mpsc::Sender<String>,
    close: CancellationToken,
    abort: CancellationToken,
}

impl ConnHandle {
    /// Create a handle and the receiving end of its outgoing queue.
    pub fn new(id: ConnId, addr: SocketAddr, queue: usize) -> (Self, mpsc::Receiver<String>) {
        let (outgoing, rx) = mpsc::channel(queue);
        let handle = Self {
            id,
            addr,
            outgoing,
            close: CancellationToken::new(),
            abort: CancellationToken::new(),
        };
        (handle, rx)
    }

    pub fn id(&self) -> ConnId {
        self.id
    }

    pub fn addr(&self) -> SocketAddr {
        self.addr
    }

    /// Queue a line for this connection. Returns `false` if it was dropped.
    pub fn send(&self, line: impl Into<String>) -> bool {
        match self.outgoing.try_send(line.into()) {
            Ok(()) => true,
            Err(e) => {
                debug!(conn = %self.id, error = %e, "Dropped outgoing line");
                false
            }
        }
    }

    /// Ask the connection task to flush queued lines and close.
    pub fn close(&self) {
        self.close.cancel();
    }

    /// Resolves once [`close`](Self::close) has been called.
    pub async fn closed(&self) {
        self.close.cancelled().await;
    }

    /// Tear the connection down without flushing.
    pub fn abort(&self) {
        self.close.cancel();
        self.abort.cancel();
    }

    /// Resolves once [`abort`](Self::abort) has been called.
    pub async fn aborted(&self) {
        self.abort.cancelled().await;
    }
}
