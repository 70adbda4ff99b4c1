//! State management module.
//!
//! Contains the Hub (shared server state) and the entities it is made of.

mod connections;
mod directory;
mod hub;
mod lifecycle;
mod session;
mod uid;

pub use connections::Connections;
pub use directory::{UserDirectory, UserRecord};
pub use hub::Hub;
pub use lifecycle::{Lifecycle, ListenState};
pub use session::SessionState;
pub use uid::{ConnId, ConnIdGenerator};
