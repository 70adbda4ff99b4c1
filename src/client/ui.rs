//! Where the console client shows its output.

/// Display surface for the chat client.
pub trait ClientUi: Send + Sync + 'static {
    /// Show one line to the user.
    fn display(&self, message: &str);
}

/// Prints every line to standard output.
#[derive(Debug, Default, Clone, Copy)]
pub struct StdoutUi;

impl ClientUi for StdoutUi {
    fn display(&self, message: &str) {
        println!("{message}");
    }
}
