//! Console chat client.
//!
//! Holds the local connection settings and at most one live connection.
//! Console lines are parsed into [`ConsoleCommand`]s; anything the client
//! does not handle itself is forwarded to the server unchanged. Lines from
//! the server are shown verbatim through the [`ClientUi`].

mod ui;

pub use ui::{ClientUi, StdoutUi};

use futures_util::{SinkExt, StreamExt};
use relay_proto::{ClientCommand, CommandError, ConsoleCommand, LineCodec};
use std::io;
use std::sync::Arc;
use tokio::net::TcpStream;
use tokio::net::tcp::OwnedWriteHalf;
use tokio::task::JoinHandle;
use tokio_util::codec::{FramedRead, FramedWrite};
use tracing::{debug, info, warn};

const SEND_FAILED: &str = "Could not send message to server.  Terminating client.";

/// What the console loop should do after a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConsoleOutcome {
    Continue,
    Quit,
}

struct Link {
    writer: FramedWrite<OwnedWriteHalf, LineCodec>,
    reader: JoinHandle<()>,
}

impl Link {
    fn is_alive(&self) -> bool {
        !self.reader.is_finished()
    }
}

/// A chat client and its local settings.
pub struct ChatClient {
    host: String,
    port: u16,
    login_id: String,
    ui: Arc<dyn ClientUi>,
    link: Option<Link>,
}

impl ChatClient {
    pub fn new(
        host: impl Into<String>,
        port: u16,
        login_id: impl Into<String>,
        ui: Arc<dyn ClientUi>,
    ) -> Self {
        Self {
            host: host.into(),
            port,
            login_id: login_id.into(),
            ui,
            link: None,
        }
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    pub fn login_id(&self) -> &str {
        &self.login_id
    }

    /// Whether a connection is open and the server has not dropped it.
    pub fn is_connected(&self) -> bool {
        self.link.as_ref().is_some_and(Link::is_alive)
    }

    /// Connect to the configured server and log in with the local id.
    pub async fn open(&mut self) -> io::Result<()> {
        self.disconnect();

        let stream = TcpStream::connect((self.host.as_str(), self.port)).await?;
        let (read_half, write_half) = stream.into_split();
        info!(host = %self.host, port = self.port, "Connected to server");

        let ui = Arc::clone(&self.ui);
        let lost = format!(
            "The connection to the Server ({}, {}) has been disconnected",
            self.host, self.port
        );
        let reader = tokio::spawn(async move {
            let mut lines = FramedRead::new(read_half, LineCodec::new());
            while let Some(result) = lines.next().await {
                match result {
                    Ok(line) => ui.display(&line),
                    Err(e) => {
                        warn!(error = %e, "Read error");
                        break;
                    }
                }
            }
            ui.display(&lost);
        });

        self.link = Some(Link {
            writer: FramedWrite::new(write_half, LineCodec::new()),
            reader,
        });

        let login = ClientCommand::Login(&self.login_id).to_string();
        self.send(login).await
    }

    /// Send one line to the server.
    pub async fn send(&mut self, line: String) -> io::Result<()> {
        let link = match self.link.as_mut() {
            Some(link) if link.is_alive() => link,
            _ => return Err(io::Error::from(io::ErrorKind::NotConnected)),
        };
        link.writer.send(line).await.map_err(io::Error::other)
    }

    /// Drop the connection without reporting it as lost.
    fn disconnect(&mut self) {
        if let Some(link) = self.link.take() {
            link.reader.abort();
            debug!("Connection closed locally");
        }
    }

    /// Handle one line typed at the console.
    pub async fn handle_line(&mut self, line: &str) -> ConsoleOutcome {
        if line.is_empty() {
            return ConsoleOutcome::Continue;
        }

        let cmd = match ConsoleCommand::parse(line) {
            Ok(cmd) => cmd,
            Err(CommandError::InvalidPort(_)) => {
                self.ui.display("Unexpected error while setting client port!");
                return ConsoleOutcome::Continue;
            }
            Err(e) => {
                self.ui.display(&e.to_string());
                return ConsoleOutcome::Continue;
            }
        };

        match cmd {
            ConsoleCommand::Quit => {
                self.disconnect();
                return ConsoleOutcome::Quit;
            }
            ConsoleCommand::Logoff => {
                self.disconnect();
                self.ui.display("You have logged off.");
            }
            ConsoleCommand::SetPort(port) => {
                self.port = port;
                self.ui.display(&format!("Port changed to {port}"));
            }
            ConsoleCommand::SetHost(host) => {
                self.host = host.to_string();
                self.ui.display(&format!("Host changed to {host}"));
            }
            ConsoleCommand::Login(id) => {
                if self.is_connected() {
                    self.ui.display("You must logout before you can login.");
                } else {
                    self.login_id = id.to_string();
                    if let Err(e) = self.open().await {
                        debug!(error = %e, "Connect failed");
                        self.disconnect();
                        self.ui.display("Connection could not be established.");
                    }
                }
            }
            ConsoleCommand::GetHost => self.ui.display(&format!("Current host: {}", self.host)),
            ConsoleCommand::GetPort => self.ui.display(&format!("Current port: {}", self.port)),
            ConsoleCommand::Send(text) => {
                if let Err(e) = self.send(text.to_string()).await {
                    debug!(error = %e, "Send failed");
                    self.ui.display(SEND_FAILED);
                    self.disconnect();
                    return ConsoleOutcome::Quit;
                }
            }
        }
        ConsoleOutcome::Continue
    }
}

impl Drop for ChatClient {
    fn drop(&mut self) {
        self.disconnect();
    }
}
