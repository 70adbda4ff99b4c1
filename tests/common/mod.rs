//! Integration test common infrastructure.
//!
//! Provides an in-process test server on an ephemeral port and a raw TCP
//! test client that reads and writes chat lines.

pub mod client;
pub mod server;

#[allow(unused_imports)]
pub use client::TestClient;
#[allow(unused_imports)]
pub use server::TestServer;
