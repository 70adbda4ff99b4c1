//! relayd - chat relay server with an operator console.
//!
//! Usage: `relayd [port]`. Lines typed on standard input are operator
//! commands (`#start`, `#stop`, `#close`, `#setport <n>`, `#getport`,
//! `#quit`); anything else is broadcast to every client.

use relayd::Server;
use relayd::config::{self, Config};
use relayd::console;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();

    // Load configuration
    let mut config = Config::from_env().map_err(|e| {
        error!(error = %e, "Failed to load config");
        e
    })?;
    let port_arg = std::env::args().nth(1);
    if port_arg.is_some() && !config.apply_port_arg(port_arg.as_deref()) {
        warn!(arg = ?port_arg, port = config.server.port, "Ignoring unparsable port argument");
    }

    if let Err(errors) = config::validate(&config) {
        for e in &errors {
            error!(error = %e, "Invalid configuration");
        }
        anyhow::bail!("configuration has {} error(s)", errors.len());
    }

    info!(
        bind = %config.server.bind,
        port = config.server.port,
        "Starting relayd"
    );

    let server = Server::new(&config);
    let mut shutdown = server.subscribe_shutdown();

    if let Err(e) = server.start().await {
        error!(error = %e, "Initial listen failed");
        println!("ERROR - Could not listen for clients!");
    }

    let mut lines = console::stdin_lines();
    let mut console_open = true;

    loop {
        tokio::select! {
            line = lines.recv(), if console_open => match line {
                Some(line) => {
                    if let Some(reply) = server.handle_line(&line).await {
                        println!("{reply}");
                    }
                }
                None => {
                    info!("Console closed; running until interrupted");
                    console_open = false;
                }
            },
            _ = shutdown.recv() => break,
            result = tokio::signal::ctrl_c() => {
                if let Err(e) = result {
                    error!(error = %e, "Failed to listen for ctrl-c");
                }
                server.quit().await;
                break;
            }
        }
    }

    info!("relayd stopped");
    Ok(())
}
