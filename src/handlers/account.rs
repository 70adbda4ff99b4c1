//! Registration commands: `#reg` and `#regInfo`.
//!
//! Neither requires a login.

use super::Context;
use super::helpers::{REGISTRATION_ACCEPTED, reg_info_sent};
use crate::error::{HandlerError, HandlerResult};
use tracing::info;

/// `#reg <uid> <pw> <email>`
pub(super) fn handle_register(
    ctx: &mut Context<'_>,
    uid: &str,
    password: &str,
    email: &str,
) -> HandlerResult {
    ctx.hub.directory.register(uid, password, email)?;

    info!(conn = %ctx.conn.id(), uid = %uid, "User registered");
    ctx.conn.send(REGISTRATION_ACCEPTED);
    Ok(())
}

/// `#regInfo <email>`
///
/// Confirms when the email is registered and rejects when it is not.
/// Mail delivery itself is not performed.
pub(super) fn handle_reg_info(ctx: &mut Context<'_>, email: &str) -> HandlerResult {
    let Some(uid) = ctx.hub.directory.uid_for_email(email) else {
        return Err(HandlerError::EmailUnknown(email.to_string()));
    };

    info!(conn = %ctx.conn.id(), uid = %uid, "Registration reminder requested");
    ctx.conn.send(reg_info_sent(email));
    Ok(())
}
