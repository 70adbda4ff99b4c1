//! Server - listener lifecycle and the operator console commands.
//!
//! The [`Server`] owns the shared [`Hub`], the [`Lifecycle`] state and the
//! running [`Gateway`], if any. Every lifecycle transition happens under one
//! async mutex, so `#setport` cannot interleave with `#start`.

use crate::config::{Config, LimitsConfig};
use crate::error::LifecycleError;
use crate::handlers::server_line;
use crate::network::{ConnectionHooks, Gateway};
use crate::state::{Hub, Lifecycle};
use crate::telemetry::spans;
use relay_proto::{AdminCommand, CommandError};
use std::net::{IpAddr, SocketAddr};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::{Mutex, broadcast, oneshot};
use tokio::task::JoinHandle;
use tokio::time::Instant;
use tokio_util::task::TaskTracker;
use tracing::{Instrument, info, warn};

/// How often `close` re-signals sessions while waiting for them to exit.
const CLOSE_RETRY: Duration = Duration::from_millis(100);

/// How long `close` waits for aborted sessions to deregister.
const ABORT_WAIT: Duration = Duration::from_secs(1);

struct GatewayHandle {
    stop: oneshot::Sender<()>,
    task: JoinHandle<()>,
}

struct Control {
    lifecycle: Lifecycle,
    gateway: Option<GatewayHandle>,
}

/// A relay server instance.
pub struct Server {
    hub: Arc<Hub>,
    bind: IpAddr,
    limits: LimitsConfig,
    control: Mutex<Control>,
    shutdown_tx: broadcast::Sender<()>,
    tracker: TaskTracker,
}

impl Server {
    /// Create a stopped server from configuration.
    pub fn new(config: &Config) -> Self {
        let (shutdown_tx, _) = broadcast::channel(4);
        Self {
            hub: Arc::new(Hub::new()),
            bind: config.server.bind,
            limits: config.limits.clone(),
            control: Mutex::new(Control {
                lifecycle: Lifecycle::new(config.server.port),
                gateway: None,
            }),
            shutdown_tx,
            tracker: TaskTracker::new(),
        }
    }

    pub fn hub(&self) -> &Arc<Hub> {
        &self.hub
    }

    /// Fires once `quit` has finished unwinding.
    pub fn subscribe_shutdown(&self) -> broadcast::Receiver<()> {
        self.shutdown_tx.subscribe()
    }

    /// The configured port.
    pub async fn port(&self) -> u16 {
        self.control.lock().await.lifecycle.port()
    }

    /// The bound address while listening.
    pub async fn local_addr(&self) -> Option<SocketAddr> {
        self.control.lock().await.lifecycle.listening_addr()
    }

    pub async fn is_listening(&self) -> bool {
        self.control.lock().await.lifecycle.is_listening()
    }

    /// Begin accepting connections on the configured port.
    pub async fn start(&self) -> Result<SocketAddr, LifecycleError> {
        let mut control = self.control.lock().await;
        if control.lifecycle.is_listening() {
            return Err(LifecycleError::AlreadyListening);
        }

        let port = control.lifecycle.port();
        let hooks: Arc<dyn ConnectionHooks> = self.hub.clone();
        let bind_err = |source| LifecycleError::Bind { port, source };
        let gateway = Gateway::bind(
            SocketAddr::new(self.bind, port),
            hooks,
            self.limits.clone(),
            self.tracker.clone(),
        )
        .await
        .map_err(bind_err)?;
        let addr = gateway.local_addr().map_err(bind_err)?;

        let (stop, stop_rx) = oneshot::channel();
        let task = tokio::spawn(gateway.run(stop_rx));
        control.gateway = Some(GatewayHandle { stop, task });
        control.lifecycle.mark_listening(addr);

        info!(port = addr.port(), "Server listening for connections on port {}", addr.port());
        Ok(addr)
    }

    /// Stop accepting connections. Existing sessions stay connected.
    ///
    /// Returns `false` if the server was not listening.
    pub async fn stop(&self) -> bool {
        let mut control = self.control.lock().await;
        Self::stop_locked(&mut control).await
    }

    async fn stop_locked(control: &mut Control) -> bool {
        if let Some(gateway) = control.gateway.take() {
            let _ = gateway.stop.send(());
            if let Err(e) = gateway.task.await {
                warn!(error = %e, "Gateway task failed");
            }
        }
        control.lifecycle.mark_stopped()
    }

    /// Stop listening and disconnect every session.
    ///
    /// Returns whether the server was listening. Waits up to the configured
    /// grace period for connection tasks to finish, then aborts the rest.
    pub async fn close(&self) -> bool {
        let mut control = self.control.lock().await;
        let was_listening = Self::stop_locked(&mut control).await;

        self.tracker.close();
        let deadline = Instant::now() + self.limits.shutdown_grace();
        loop {
            let asked = self.hub.connections.close_all();
            if tokio::time::timeout(CLOSE_RETRY, self.tracker.wait())
                .await
                .is_ok()
            {
                info!(sessions = asked, "All client connections closed");
                break;
            }
            if Instant::now() >= deadline {
                let aborted = self.hub.connections.abort_all();
                warn!(aborted, "Connections still open after grace period; aborting");
                if tokio::time::timeout(ABORT_WAIT, self.tracker.wait())
                    .await
                    .is_err()
                {
                    warn!(remaining = self.tracker.len(), "Connection tasks did not exit");
                }
                break;
            }
        }
        self.tracker.reopen();

        was_listening
    }

    /// Close everything, then fire the shutdown signal.
    pub async fn quit(&self) {
        self.close().await;
        info!("Server shutting down");
        let _ = self.shutdown_tx.send(());
    }

    /// Change the port. Only allowed once the server is fully closed.
    pub async fn set_port(&self, port: u16) -> Result<u16, LifecycleError> {
        let mut control = self.control.lock().await;
        control.lifecycle.set_port(port, self.hub.connections.len())
    }

    /// Send an operator message to every session.
    pub fn broadcast(&self, text: &str) -> usize {
        self.hub.connections.broadcast(&server_line(text))
    }

    /// Handle one line typed at the operator console.
    ///
    /// Returns the text to show the operator, if any.
    pub async fn handle_line(&self, line: &str) -> Option<String> {
        if line.trim().is_empty() {
            return None;
        }
        match AdminCommand::parse(line) {
            Ok(cmd) => self.execute(cmd).await,
            Err(CommandError::Unknown(verb)) => Some(format!("Unknown command: #{verb}")),
            Err(e) => Some(e.to_string()),
        }
    }

    /// Run one operator command.
    pub async fn execute(&self, cmd: AdminCommand<'_>) -> Option<String> {
        let span = spans::admin(cmd.name());
        self.run_command(cmd).instrument(span).await
    }

    async fn run_command(&self, cmd: AdminCommand<'_>) -> Option<String> {
        match cmd {
            AdminCommand::Quit => {
                self.quit().await;
                None
            }
            AdminCommand::Stop => self
                .stop()
                .await
                .then(|| "Server has stopped listening for connections.".to_string()),
            AdminCommand::Close => self
                .close()
                .await
                .then(|| "Server has stopped listening for connections.".to_string()),
            AdminCommand::SetPort(port) => Some(match self.set_port(port).await {
                Ok(port) => format!("Server port changed to {port}"),
                Err(e) => {
                    info!(code = e.error_code(), port, "Port change rejected");
                    e.to_string()
                }
            }),
            AdminCommand::Start => Some(match self.start().await {
                Ok(addr) => format!("Server listening for connections on port {}", addr.port()),
                Err(e) => {
                    warn!(code = e.error_code(), error = %e, "Start failed");
                    e.to_string()
                }
            }),
            AdminCommand::GetPort => Some(format!("Current port: {}", self.port().await)),
            AdminCommand::Broadcast(text) => {
                let delivered = self.broadcast(text);
                info!(delivered, "Operator message sent");
                Some(text.to_string())
            }
        }
    }
}
