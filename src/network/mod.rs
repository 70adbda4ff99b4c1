//! Network module.
//!
//! Contains the Gateway (TCP listener), the per-connection task, and the
//! hook trait the two use to reach the rest of the server.

mod connection;
mod gateway;
mod handle;
mod hooks;

pub use connection::Connection;
pub use gateway::Gateway;
pub use handle::ConnHandle;
pub use hooks::ConnectionHooks;
