//! Gateway - TCP listener that accepts incoming connections.
//!
//! The Gateway binds a socket and spawns a [`Connection`] task for each
//! incoming client on a shared [`TaskTracker`], so the server can wait for
//! every session to finish after the listener is gone.

use crate::config::LimitsConfig;
use crate::network::{ConnHandle, Connection, ConnectionHooks};
use crate::telemetry::spans;
use std::io;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::sync::oneshot;
use tokio_util::task::TaskTracker;
use tracing::{Instrument, error, info, instrument};

/// The Gateway accepts incoming TCP connections and spawns handlers.
pub struct Gateway {
    listener: TcpListener,
    hooks: Arc<dyn ConnectionHooks>,
    limits: LimitsConfig,
    tracker: TaskTracker,
}

impl Gateway {
    /// Bind the gateway to the specified address.
    pub async fn bind(
        addr: SocketAddr,
        hooks: Arc<dyn ConnectionHooks>,
        limits: LimitsConfig,
        tracker: TaskTracker,
    ) -> io::Result<Self> {
        let listener = TcpListener::bind(addr).await?;
        info!(%addr, "Listener bound");
        Ok(Self {
            listener,
            hooks,
            limits,
            tracker,
        })
    }

    /// The address actually bound. Differs from the requested one for port 0.
    pub fn local_addr(&self) -> io::Result<SocketAddr> {
        self.listener.local_addr()
    }

    /// Accept connections until `stop` fires or its sender is dropped.
    ///
    /// Sessions already accepted keep running after this returns.
    #[instrument(skip_all, name = "gateway")]
    pub async fn run(self, mut stop: oneshot::Receiver<()>) {
        loop {
            tokio::select! {
                _ = &mut stop => break,

                accepted = self.listener.accept() => {
                    match accepted {
                        Ok((stream, addr)) => self.spawn_connection(stream, addr),
                        Err(e) => error!(error = %e, "Failed to accept connection"),
                    }
                }
            }
        }

        drop(self.listener);
        info!("Server has stopped listening for connections.");
    }

    fn spawn_connection(&self, stream: tokio::net::TcpStream, addr: SocketAddr) {
        if let Err(e) = stream.set_nodelay(true) {
            error!(%addr, error = %e, "Failed to set TCP_NODELAY");
        }

        let id = self.hooks.allocate_id();
        info!(conn = %id, %addr, "Connection accepted");

        let (handle, outgoing_rx) = ConnHandle::new(id, addr, self.limits.outgoing_queue);
        let connection = Connection::new(
            handle,
            outgoing_rx,
            stream,
            Arc::clone(&self.hooks),
            self.limits.max_line_length,
        );
        self.tracker
            .spawn(connection.run().instrument(spans::connection(id, addr)));
    }
}
