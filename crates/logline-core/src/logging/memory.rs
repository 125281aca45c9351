//! In-memory diagnostic logger

use parking_lot::Mutex;

use super::traits::Logger;

/// Severity of a captured diagnostic
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum DiagnosticLevel {
    Debug,
    Info,
    Warn,
    Error,
}

/// Logger that keeps diagnostics in memory
///
/// Useful in tests to assert that a failure was reported, and at which
/// severity.
#[derive(Debug, Default)]
pub struct MemoryLogger {
    entries: Mutex<Vec<(DiagnosticLevel, String)>>,
}

impl MemoryLogger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> Vec<(DiagnosticLevel, String)> {
        self.entries.lock().clone()
    }

    /// Messages captured at exactly `level`
    pub fn messages(&self, level: DiagnosticLevel) -> Vec<String> {
        self.entries
            .lock()
            .iter()
            .filter(|(l, _)| *l == level)
            .map(|(_, m)| m.clone())
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.lock().is_empty()
    }

    pub fn clear(&self) {
        self.entries.lock().clear();
    }

    fn push(&self, level: DiagnosticLevel, message: &str) {
        self.entries.lock().push((level, message.to_string()));
    }
}

impl Logger for MemoryLogger {
    fn debug(&self, message: &str) {
        self.push(DiagnosticLevel::Debug, message);
    }

    fn info(&self, message: &str) {
        self.push(DiagnosticLevel::Info, message);
    }

    fn warn(&self, message: &str) {
        self.push(DiagnosticLevel::Warn, message);
    }

    fn error(&self, message: &str) {
        self.push(DiagnosticLevel::Error, message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_logger_captures() {
        let logger = MemoryLogger::new();
        logger.debug("low");
        crate::log_warn!(logger, "disk {}% full", 93);
        logger.error("append failed: EIO");

        assert_eq!(logger.messages(DiagnosticLevel::Debug), vec!["low"]);
        assert_eq!(logger.messages(DiagnosticLevel::Warn), vec!["disk 93% full"]);
        assert_eq!(logger.messages(DiagnosticLevel::Error), vec!["append failed: EIO"]);

        logger.clear();
        assert!(logger.is_empty());
    }
}
