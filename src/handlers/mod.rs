//! Client command handlers.
//!
//! Each inbound line is parsed once into a [`ClientCommand`] and routed by
//! variant. Handlers return `Err(HandlerError)` for every rejection; the
//! dispatcher turns that into a reply to the originating session and,
//! for chat before login, a close.
//!
//! The [`ConnectionHooks`](crate::network::ConnectionHooks) implementation
//! for [`Hub`] lives in [`connection`].

mod account;
mod connection;
mod helpers;
mod messaging;

pub use helpers::{
    CONNECT_NOTICE, REGISTRATION_ACCEPTED, chat_line, disconnect_notice, reg_info_sent, server_line,
};

use crate::error::{HandlerError, HandlerResult};
use crate::network::ConnHandle;
use crate::state::{Hub, SessionState};
use crate::telemetry::spans;
use relay_proto::ClientCommand;
use tracing::debug;

/// Everything a handler may touch for one inbound line.
pub struct Context<'a> {
    pub hub: &'a Hub,
    pub conn: &'a ConnHandle,
    pub session: &'a mut SessionState,
}

/// What the connection task should do after a line was handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DispatchResult {
    Continue,
    /// Flush queued replies, then close the connection.
    Close,
}

/// Handle one line from a client.
pub fn dispatch(ctx: &mut Context<'_>, line: &str) -> DispatchResult {
    let result = match ClientCommand::parse(line) {
        Ok(cmd) => {
            let _span = spans::command(cmd.name(), ctx.conn.id()).entered();
            route(ctx, cmd)
        }
        Err(e) => Err(HandlerError::from(e)),
    };

    match result {
        Ok(()) => DispatchResult::Continue,
        Err(e) => {
            debug!(
                conn = %ctx.conn.id(),
                code = e.error_code(),
                "Command rejected"
            );
            ctx.conn.send(e.to_string());
            if e.closes_connection() {
                DispatchResult::Close
            } else {
                DispatchResult::Continue
            }
        }
    }
}

fn route(ctx: &mut Context<'_>, cmd: ClientCommand<'_>) -> HandlerResult {
    match cmd {
        ClientCommand::Login(id) => connection::handle_login(ctx, id),
        ClientCommand::Register {
            uid,
            password,
            email,
        } => account::handle_register(ctx, uid, password, email),
        ClientCommand::RegInfo { email } => account::handle_reg_info(ctx, email),
        ClientCommand::Chat(text) => messaging::handle_chat(ctx, text),
    }
}
