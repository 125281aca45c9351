//! Leveled text logger: file append plus host echo

use std::fmt::Write as _;
use std::sync::Arc;

use chrono::{DateTime, FixedOffset, Local};

use super::append::append_or_report;
use crate::config::{LoggerConfig, DEFAULT_TIMESTAMP_FORMAT};
use crate::env::{ProcessEnvironment, SharedEnvironment};
use crate::error::{LogError, LogResult};
use crate::host::{ConsoleHost, SharedHost, Stream};
use crate::logging::{ConsoleLogger, Logger, SharedLogger};
use crate::preferences::{ActionPreference, PreferenceScope};
use crate::types::{LogEntry, LogLevel};

/// Writes `<timestamp> : [LEVEL] <message>` lines to a file and echoes them
/// to the host stream matching the level
///
/// The file write is best-effort: failures go to the diagnostic logger and
/// never reach the caller. Only `Fatal` entries, and streams whose
/// preference is `Stop`, return an error.
///
/// # Example
///
/// ```no_run
/// use logline_core::{LeveledLogger, LogEntry, LogLevel, LoggerConfig, PreferenceScope};
///
/// let logger = LeveledLogger::new(LoggerConfig::new().with_log_path("/tmp/deploy.log"));
/// let prefs = PreferenceScope::new();
///
/// logger.write(&prefs, &LogEntry::new("Copying files").with_level(LogLevel::Info))?;
/// # Ok::<(), logline_core::LogError>(())
/// ```
#[derive(Clone)]
pub struct LeveledLogger {
    config: LoggerConfig,
    host: SharedHost,
    diagnostics: SharedLogger,
    environment: SharedEnvironment,
}

impl LeveledLogger {
    /// Logger echoing to the console, reading the process environment
    pub fn new(config: LoggerConfig) -> Self {
        Self {
            config,
            host: Arc::new(ConsoleHost::new()),
            diagnostics: Arc::new(ConsoleLogger::new()),
            environment: Arc::new(ProcessEnvironment::new()),
        }
    }

    pub fn with_host(mut self, host: SharedHost) -> Self {
        self.host = host;
        self
    }

    pub fn with_diagnostics(mut self, diagnostics: SharedLogger) -> Self {
        self.diagnostics = diagnostics;
        self
    }

    pub fn with_environment(mut self, environment: SharedEnvironment) -> Self {
        self.environment = environment;
        self
    }

    pub fn config(&self) -> &LoggerConfig {
        &self.config
    }

    /// Write one entry
    ///
    /// `prefs` gates the non-output streams: `SilentlyContinue`/`Ignore`
    /// suppress the echo, `Stop` echoes and then returns
    /// `LogError::Stopped`. The file is written regardless.
    pub fn write(&self, prefs: &PreferenceScope, entry: &LogEntry) -> LogResult<()> {
        let now = DateTime::<FixedOffset>::from(Local::now());
        let content = self.render(entry.level.label(), entry, &now);
        self.append(entry, &content);

        match entry.level.stream() {
            Some(stream) => self.emit(prefs, stream, content),
            None => Err(LogError::Fatal(content)),
        }
    }

    /// Write one entry with a level given by name
    ///
    /// An unrecognized name is reported on the diagnostic channel; the
    /// content is still written to the file and echoed to the output
    /// stream, tagged with the upper-cased name.
    pub fn write_named(&self, prefs: &PreferenceScope, level: &str, entry: LogEntry) -> LogResult<()> {
        match level.parse::<LogLevel>() {
            Ok(level) => self.write(prefs, &entry.with_level(level)),
            Err(err) => {
                crate::log_warn!(self.diagnostics, "{}, echoing to output", err);
                let now = DateTime::<FixedOffset>::from(Local::now());
                let content = self.render(&level.trim().to_uppercase(), &entry, &now);
                self.append(&entry, &content);
                self.host.write(Stream::Output, &content);
                Ok(())
            }
        }
    }

    pub fn info(&self, prefs: &PreferenceScope, message: impl Into<String>) -> LogResult<()> {
        self.write(prefs, &LogEntry::new(message))
    }

    pub fn warning(&self, prefs: &PreferenceScope, message: impl Into<String>) -> LogResult<()> {
        self.write(prefs, &LogEntry::new(message).with_level(LogLevel::Warning))
    }

    pub fn error(&self, prefs: &PreferenceScope, message: impl Into<String>) -> LogResult<()> {
        self.write(prefs, &LogEntry::new(message).with_level(LogLevel::Error))
    }

    pub fn debug(&self, prefs: &PreferenceScope, message: impl Into<String>) -> LogResult<()> {
        self.write(prefs, &LogEntry::new(message).with_level(LogLevel::Debug))
    }

    pub fn verbose(&self, prefs: &PreferenceScope, message: impl Into<String>) -> LogResult<()> {
        self.write(prefs, &LogEntry::new(message).with_level(LogLevel::Verbose))
    }

    /// Content for `entry` as of `at`, tagged with `label`
    pub fn render(&self, label: &str, entry: &LogEntry, at: &DateTime<FixedOffset>) -> String {
        let body = entry.body();
        if entry.suppress_prefix {
            return body;
        }
        format!("{} : [{}] {}", self.timestamp(at), label, body)
    }

    fn timestamp(&self, at: &DateTime<FixedOffset>) -> String {
        // chrono reports a bad format string as a fmt error at write time.
        let mut out = String::new();
        if write!(out, "{}", at.format(&self.config.timestamp_format)).is_err() {
            out.clear();
            let _ = write!(out, "{}", at.format(DEFAULT_TIMESTAMP_FORMAT));
        }
        out
    }

    fn append(&self, entry: &LogEntry, content: &str) {
        let path = self
            .config
            .resolve_log_path(entry.path.as_deref(), self.environment.as_ref());
        if let Some(path) = path {
            append_or_report(self.diagnostics.as_ref(), &path, content, false);
        }
    }

    fn emit(&self, prefs: &PreferenceScope, stream: Stream, content: String) -> LogResult<()> {
        let preference = stream.preference_name().and_then(|name| prefs.action(name));
        match preference {
            Some(ActionPreference::Stop) => {
                self.host.write(stream, &content);
                Err(LogError::Stopped { stream, message: content })
            }
            Some(pref) if !pref.is_visible() => Ok(()),
            _ => {
                self.host.write(stream, &content);
                Ok(())
            }
        }
    }
}

impl std::fmt::Debug for LeveledLogger {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LeveledLogger")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}
