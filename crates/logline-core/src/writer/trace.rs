//! CMTrace-format logger
//!
//! Each record is one line:
//!
//! ```text
//! <![LOG[message]LOG]!><time="HH:mm:ss.fff+offset" date="MM-dd-yyyy" component="..." context="" type="1" thread="42" file="app.log">
//! ```
//!
//! `offset` is the signed UTC offset in minutes.

use std::sync::Arc;

use chrono::{DateTime, FixedOffset, Local};

use super::append::append_or_report;
use super::thread::current_thread_id;
use crate::config::LoggerConfig;
use crate::logging::{ConsoleLogger, SharedLogger};
use crate::types::TraceEntry;

/// Appends CMTrace records to the file named by each entry
///
/// No console echo. The append is forced: missing directories are created
/// and failures are reported on the diagnostic channel only.
#[derive(Clone)]
pub struct TraceLogger {
    default_component: String,
    diagnostics: SharedLogger,
}

impl Default for TraceLogger {
    fn default() -> Self {
        Self::new()
    }
}

impl TraceLogger {
    pub fn new() -> Self {
        Self {
            default_component: String::new(),
            diagnostics: Arc::new(ConsoleLogger::new()),
        }
    }

    /// Trace logger using the configured default component
    pub fn from_config(config: &LoggerConfig) -> Self {
        Self::new().with_default_component(config.default_component.clone())
    }

    /// Component used for entries that carry none
    pub fn with_default_component(mut self, component: impl Into<String>) -> Self {
        self.default_component = component.into();
        self
    }

    pub fn with_diagnostics(mut self, diagnostics: SharedLogger) -> Self {
        self.diagnostics = diagnostics;
        self
    }

    /// Append one record; returns whether it reached the file
    pub fn write(&self, entry: &TraceEntry) -> bool {
        let now = DateTime::<FixedOffset>::from(Local::now());
        let line = self.render(entry, &now);
        append_or_report(self.diagnostics.as_ref(), entry.path(), &line, true)
    }

    /// Record line for `entry` as of `at`
    pub fn render(&self, entry: &TraceEntry, at: &DateTime<FixedOffset>) -> String {
        let offset_minutes = at.offset().local_minus_utc() / 60;
        let component = entry.component.as_deref().unwrap_or(self.default_component.as_str());
        let thread = entry.thread.unwrap_or_else(current_thread_id);

        format!(
            "<![LOG[{}]LOG]!><time=\"{}{:+}\" date=\"{}\" component=\"{}\" context=\"\" type=\"{}\" thread=\"{}\" file=\"{}\">",
            entry.body(),
            at.format("%H:%M:%S%.3f"),
            offset_minutes,
            at.format("%m-%d-%Y"),
            attribute(component),
            entry.severity,
            thread,
            attribute(&entry.file_name()),
        )
    }
}

/// Escape a value placed inside a double-quoted attribute
fn attribute(value: &str) -> String {
    value
        .replace('&', "&amp;")
        .replace('"', "&quot;")
        .replace(['\r', '\n'], " ")
}

impl std::fmt::Debug for TraceLogger {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TraceLogger")
            .field("default_component", &self.default_component)
            .finish_non_exhaustive()
    }
}
