//! Console diagnostic logger

use super::traits::Logger;

/// A logger that writes diagnostics to stderr
///
/// Everything goes to stderr so diagnostics never mix with log content
/// echoed on stdout.
#[derive(Debug, Clone)]
pub struct ConsoleLogger {
    prefix: String,
}

impl Default for ConsoleLogger {
    fn default() -> Self {
        Self::new()
    }
}

impl ConsoleLogger {
    /// Create a console logger with the default `[logline]` prefix
    pub fn new() -> Self {
        Self {
            prefix: "[logline]".to_string(),
        }
    }

    /// Create a console logger with a custom prefix
    pub fn with_prefix(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
        }
    }

    fn line(&self, tag: &str, message: &str) -> String {
        format!("{} {}: {}", self.prefix, tag, message)
    }

    fn emit(&self, tag: &str, message: &str) {
        eprintln!("{}", self.line(tag, message));
    }
}

impl Logger for ConsoleLogger {
    fn debug(&self, message: &str) {
        self.emit("DEBUG", message);
    }

    fn info(&self, message: &str) {
        self.emit("INFO", message);
    }

    fn warn(&self, message: &str) {
        self.emit("WARN", message);
    }

    fn error(&self, message: &str) {
        self.emit("ERROR", message);
    }
}
