//! In-process test server.

use relayd::Server;
use relayd::config::Config;
use std::net::SocketAddr;
use std::sync::Arc;

/// A running server bound to 127.0.0.1 on an ephemeral port.
pub struct TestServer {
    pub server: Arc<Server>,
    addr: SocketAddr,
}

impl TestServer {
    /// Build and start a server.
    pub async fn spawn() -> anyhow::Result<Self> {
        let mut config = Config::default();
        config.server.bind = "127.0.0.1".parse()?;
        config.server.port = 0;
        config.limits.shutdown_grace_ms = 2000;

        let server = Arc::new(Server::new(&config));
        let addr = server.start().await?;
        Ok(Self { server, addr })
    }

    /// Address to connect to.
    pub fn address(&self) -> String {
        self.addr.to_string()
    }

    pub fn addr(&self) -> SocketAddr {
        self.addr
    }

    /// Run one operator console line.
    #[allow(dead_code)]
    pub async fn console(&self, line: &str) -> Option<String> {
        self.server.handle_line(line).await
    }

    /// Wait until the server has `n` live sessions.
    #[allow(dead_code)]
    pub async fn wait_for_sessions(&self, n: usize) {
        for _ in 0..200 {
            if self.server.hub().connections.len() == n {
                return;
            }
            tokio::time::sleep(std::time::Duration::from_millis(10)).await;
        }
        panic!(
            "expected {n} sessions, have {}",
            self.server.hub().connections.len()
        );
    }
}
