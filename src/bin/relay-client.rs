//! relay-client - console chat client.
//!
//! Usage: `relay-client [login] [host] [port]`. Without a login id the
//! client logs in as `ANONYMOUS`. Host and port fall back to the `[client]`
//! section of the file named by `RELAYD_CONFIG`, then to built-in defaults.

use relayd::client::{ChatClient, ConsoleOutcome, StdoutUi};
use relayd::config::{Config, DEFAULT_LOGIN_ID};
use relayd::console;
use std::sync::Arc;
use tracing::{error, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = Config::from_env()?;
    let mut args = std::env::args().skip(1);
    let login = args.next().unwrap_or_else(|| DEFAULT_LOGIN_ID.to_string());
    let host = args.next().unwrap_or(config.client.host);
    let port = match args.next() {
        Some(arg) => arg.parse().unwrap_or_else(|_| {
            warn!(%arg, "Ignoring unparsable port argument");
            config.client.port
        }),
        None => config.client.port,
    };

    let mut client = ChatClient::new(host, port, login, Arc::new(StdoutUi));
    if let Err(e) = client.open().await {
        error!(host = %client.host(), port = client.port(), error = %e, "Connect failed");
        println!("Error: Can't setup connection! Terminating client.");
        return Ok(());
    }

    let mut lines = console::stdin_lines();
    while let Some(line) = lines.recv().await {
        if client.handle_line(&line).await == ConsoleOutcome::Quit {
            break;
        }
    }

    Ok(())
}
