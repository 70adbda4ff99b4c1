//! Line input from standard input.

use std::io::BufRead;
use tokio::sync::mpsc;
use tracing::debug;

/// Read stdin lines on a dedicated thread.
///
/// The channel closes at end of input. Trailing `\r` is stripped.
pub fn stdin_lines() -> mpsc::Receiver<String> {
    let (tx, rx) = mpsc::channel(16);
    std::thread::spawn(move || {
        let stdin = std::io::stdin();
        for line in stdin.lock().lines() {
            let line = match line {
                Ok(line) => line,
                Err(e) => {
                    debug!(error = %e, "Console read failed");
                    break;
                }
            };
            let line = line.strip_suffix('\r').unwrap_or(&line).to_string();
            if tx.blocking_send(line).is_err() {
                break;
            }
        }
        debug!("Console input closed");
    });
    rx
}
