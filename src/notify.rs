use chrono::Local;

/// Fire-and-forget channel for user-facing error messages.
pub trait Notifier {
    fn error(&self, message: &str);
}

/// Prints notifications to stderr with a wall-clock timestamp.
#[derive(Debug, Default, Clone, Copy)]
pub struct TerminalNotifier;

impl Notifier for TerminalNotifier {
    fn error(&self, message: &str) {
        eprintln!("[{}] Error: {}", Local::now().format("%H:%M:%S"), message);
    }
}
