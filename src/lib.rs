//! relayd - multi-client text chat relay.
//!
//! The library holds everything the `relayd` server and the `relay-client`
//! console client are built from, so integration tests can run both
//! in-process.

pub mod client;
pub mod config;
pub mod console;
pub mod error;
pub mod handlers;
pub mod network;
pub mod server;
pub mod state;
pub mod telemetry;

pub use server::Server;
