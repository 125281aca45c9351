//! Diagnostic logger trait

use std::sync::Arc;

/// Channel for diagnostics about logging itself
///
/// The loggers report failed file appends and unrecognized levels here,
/// never on the host streams that carry the log content.
///
/// Implementations:
/// - `NoOpLogger`: drops everything
/// - `ConsoleLogger`: tagged lines on stderr
/// - `MemoryLogger`: captures diagnostics for testing
pub trait Logger: Send + Sync {
    /// Log a debug message
    fn debug(&self, message: &str);

    /// Log an info message
    fn info(&self, message: &str);

    /// Log a warning message
    fn warn(&self, message: &str);

    /// Log an error message
    fn error(&self, message: &str);
}

/// Type alias for an Arc-wrapped logger
pub type SharedLogger = Arc<dyn Logger>;

/// Format a diagnostic and send it at debug level
#[macro_export]
macro_rules! log_debug {
    ($logger:expr, $($arg:tt)*) => {
        $logger.debug(&format!($($arg)*))
    };
}

/// Format a diagnostic and send it at warn level
#[macro_export]
macro_rules! log_warn {
    ($logger:expr, $($arg:tt)*) => {
        $logger.warn(&format!($($arg)*))
    };
}
