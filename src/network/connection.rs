//! Connection - Handles an individual client connection.
//!
//! Each Connection runs in its own Tokio task:
//!
//! ```text
//!    ┌──────────────────────────────────────────────┐
//!    │             Connection Task                  │
//!    │                                              │
//!    │  FramedRead ──▶ tokio::select! ◀── close     │
//!    │                   │        ▲                 │
//!    │                   ▼        │                 │
//!    │              [Hooks] ──▶ [Outgoing Queue]    │
//!    │                            │                 │
//!    │                            ▼                 │
//!    │                       FramedWrite            │
//!    └──────────────────────────────────────────────┘
//! ```
//!
//! Replies and broadcasts from other sessions both arrive through the
//! outgoing queue, so a session sees them in the order they were queued.
//! A close request interrupts a pending write, and an abort drops the
//! socket outright.

use crate::handlers::DispatchResult;
use crate::network::{ConnHandle, ConnectionHooks};
use crate::state::SessionState;
use futures_util::{SinkExt, StreamExt};
use relay_proto::LineCodec;
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpStream;
use tokio::net::tcp::OwnedWriteHalf;
use tokio::sync::mpsc;
use tokio_util::codec::{FramedRead, FramedWrite};
use tracing::{debug, info, warn};

/// Longest a closing session may spend writing out its queued lines.
const CLOSE_FLUSH_TIMEOUT: Duration = Duration::from_secs(1);

/// Why the main loop ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Exit {
    /// Peer closed the socket.
    Eof,
    /// A handler asked for the session to end.
    Rejected,
    /// The server asked the session to end.
    Closed,
    /// The server tore the session down without a flush.
    Aborted,
    /// Read or write failure.
    Failed,
}

/// A client connection handler.
pub struct Connection {
    handle: ConnHandle,
    outgoing_rx: mpsc::Receiver<String>,
    stream: TcpStream,
    hooks: Arc<dyn ConnectionHooks>,
    max_line: usize,
}

impl Connection {
    /// Create a new connection handler.
    pub fn new(
        handle: ConnHandle,
        outgoing_rx: mpsc::Receiver<String>,
        stream: TcpStream,
        hooks: Arc<dyn ConnectionHooks>,
        max_line: usize,
    ) -> Self {
        Self {
            handle,
            outgoing_rx,
            stream,
            hooks,
            max_line,
        }
    }

    /// Run the connection until the peer leaves or the session is closed.
    ///
    /// `on_disconnect` runs on every exit path, aborts included.
    pub async fn run(self) {
        let Self {
            handle,
            outgoing_rx,
            stream,
            hooks,
            max_line,
        } = self;
        let mut session = SessionState::new();

        hooks.on_connect(&handle).await;

        let exit = tokio::select! {
            exit = serve(&handle, hooks.as_ref(), &mut session, outgoing_rx, stream, max_line) => exit,
            _ = handle.aborted() => Exit::Aborted,
        };

        if exit == Exit::Aborted {
            warn!(identity = ?session.identity(), "Connection aborted");
        }
        hooks.on_disconnect(&handle, &session).await;
        info!(?exit, identity = ?session.identity(), "Connection closed");
    }
}

/// The read/write loop. Owns the socket; dropping it closes the socket.
async fn serve(
    handle: &ConnHandle,
    hooks: &dyn ConnectionHooks,
    session: &mut SessionState,
    mut outgoing_rx: mpsc::Receiver<String>,
    stream: TcpStream,
    max_line: usize,
) -> Exit {
    let (read_half, write_half) = stream.into_split();
    let mut reader = FramedRead::new(read_half, LineCodec::with_max_len(max_line));
    let mut writer = FramedWrite::new(write_half, LineCodec::with_max_len(max_line));

    let exit = 'session: loop {
        tokio::select! {
            result = reader.next() => {
                match result {
                    Some(Ok(line)) => {
                        debug!(raw = %line, "Received line");
                        if hooks.on_message(handle, session, &line).await == DispatchResult::Close {
                            break Exit::Rejected;
                        }
                    }
                    Some(Err(e)) => {
                        hooks.on_error(handle, session, &e).await;
                        break Exit::Failed;
                    }
                    None => break Exit::Eof,
                }
            }

            Some(line) = outgoing_rx.recv() => {
                // A peer that stops reading must not pin the task in a write.
                tokio::select! {
                    result = writer.send(line) => {
                        if let Err(e) = result {
                            hooks.on_error(handle, session, &e).await;
                            break 'session Exit::Failed;
                        }
                    }
                    _ = handle.closed() => break 'session Exit::Closed,
                }
            }

            _ = handle.closed() => break Exit::Closed,
        }
    };

    if matches!(exit, Exit::Rejected | Exit::Closed)
        && tokio::time::timeout(CLOSE_FLUSH_TIMEOUT, flush_pending(&mut writer, &mut outgoing_rx))
            .await
            .is_err()
    {
        debug!("Gave up flushing queued lines on close");
    }
    exit
}

/// Write whatever is already queued, then stop.
async fn flush_pending(
    writer: &mut FramedWrite<OwnedWriteHalf, LineCodec>,
    outgoing_rx: &mut mpsc::Receiver<String>,
) {
    while let Ok(line) = outgoing_rx.try_recv() {
        if let Err(e) = writer.feed(line).await {
            debug!(error = %e, "Dropped queued lines on close");
            return;
        }
    }
    if let Err(e) = writer.flush().await {
        debug!(error = %e, "Flush failed on close");
    }
}
