//! Text of the lines the server sends.

/// Sent to every session when a connection is accepted.
pub const CONNECT_NOTICE: &str = "A Client has connected";

/// Sent when a session that never logged in goes away.
pub const ANONYMOUS_DISCONNECT_NOTICE: &str = "A Client has disconnected";

pub const REGISTRATION_ACCEPTED: &str = "Registration accepted. Please keep your uid and pw in a safe and secure location for future reference.";

/// A chat line as relayed to every session.
pub fn chat_line(identity: &str, text: &str) -> String {
    format!("{identity}> {text}")
}

/// An operator console line as relayed to every session.
pub fn server_line(text: &str) -> String {
    format!("SERVER MSG> {text}")
}

/// Departure notice; never names an identity the session did not have.
pub fn disconnect_notice(identity: Option<&str>) -> String {
    match identity {
        Some(id) => format!("{id} has disconnected"),
        None => ANONYMOUS_DISCONNECT_NOTICE.to_string(),
    }
}

pub fn reg_info_sent(email: &str) -> String {
    format!(
        "An email will be sent to the email address {email} giving the uid and pw associated with that account."
    )
}
