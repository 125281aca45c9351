//! Per-call log entries
//!
//! Entries are built for a single call and dropped once written. Both
//! kinds require a message or an error record; the constructors make the
//! empty case unrepresentable.

use std::path::{Path, PathBuf};

use super::error_record::ErrorRecord;
use super::level::{LogLevel, TraceSeverity};

/// Input of the leveled logger
#[derive(Debug, Clone)]
pub struct LogEntry {
    message: Option<String>,
    error: Option<ErrorRecord>,
    /// Severity (default `Info`)
    pub level: LogLevel,
    /// Explicit destination; takes priority over configured paths
    pub path: Option<PathBuf>,
    /// Write the bare body without the `<timestamp> : [LEVEL]` prefix
    pub suppress_prefix: bool,
}

impl LogEntry {
    /// Create an entry from a message
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: Some(message.into()),
            error: None,
            level: LogLevel::default(),
            path: None,
            suppress_prefix: false,
        }
    }

    /// Create an entry from an error record alone
    pub fn from_error(error: ErrorRecord) -> Self {
        Self {
            message: None,
            error: Some(error),
            level: LogLevel::default(),
            path: None,
            suppress_prefix: false,
        }
    }

    /// Attach an error record to a message entry
    pub fn with_error(mut self, error: ErrorRecord) -> Self {
        self.error = Some(error);
        self
    }

    pub fn with_level(mut self, level: LogLevel) -> Self {
        self.level = level;
        self
    }

    pub fn with_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.path = Some(path.into());
        self
    }

    pub fn without_prefix(mut self) -> Self {
        self.suppress_prefix = true;
        self
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    pub fn error(&self) -> Option<&ErrorRecord> {
        self.error.as_ref()
    }

    /// Message with the error details appended
    pub fn body(&self) -> String {
        let message = self.message.as_deref().unwrap_or_default();
        match &self.error {
            Some(error) => error.append_to(message),
            None => message.to_string(),
        }
    }
}

/// Input of the CMTrace logger
#[derive(Debug, Clone)]
pub struct TraceEntry {
    message: Option<String>,
    error: Option<ErrorRecord>,
    path: PathBuf,
    /// Severity code (default 1)
    pub severity: TraceSeverity,
    /// Component label; falls back to the configured default
    pub component: Option<String>,
    /// Thread id; falls back to the current thread
    pub thread: Option<u64>,
}

impl TraceEntry {
    /// Create an entry from a message
    pub fn new(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self {
            message: Some(message.into()),
            error: None,
            path: path.into(),
            severity: TraceSeverity::default(),
            component: None,
            thread: None,
        }
    }

    /// Create an entry from an error record alone
    pub fn from_error(path: impl Into<PathBuf>, error: ErrorRecord) -> Self {
        Self {
            message: None,
            error: Some(error),
            path: path.into(),
            severity: TraceSeverity::default(),
            component: None,
            thread: None,
        }
    }

    pub fn with_error(mut self, error: ErrorRecord) -> Self {
        self.error = Some(error);
        self
    }

    pub fn with_severity(mut self, severity: TraceSeverity) -> Self {
        self.severity = severity;
        self
    }

    /// Component label; `"` and `&` are written as `&quot;` and `&amp;`
    pub fn with_component(mut self, component: impl Into<String>) -> Self {
        self.component = Some(component.into());
        self
    }

    pub fn with_thread(mut self, thread: u64) -> Self {
        self.thread = Some(thread);
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Text placed inside the `<![LOG[...]LOG]!>` wrapper
    ///
    /// With an error record the message is replaced by the record's
    /// compact JSON, which carries the message under `Message`. A plain
    /// message has each line break replaced by a space; records are one
    /// line each.
    pub fn body(&self) -> String {
        match &self.error {
            Some(error) => error.to_compact_json(self.message.as_deref()),
            None => self
                .message
                .as_deref()
                .unwrap_or_default()
                .replace("\r\n", " ")
                .replace(['\r', '\n'], " "),
        }
    }

    /// Base name of the destination, split on either separator style
    pub fn file_name(&self) -> String {
        let raw = self.path.to_string_lossy();
        raw.rsplit(['/', '\\']).next().unwrap_or_default().to_string()
    }
}
