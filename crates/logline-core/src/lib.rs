//! logline Core
//!
//! Small logging utilities for scripts and tools:
//!
//! - `LeveledLogger` writes `<timestamp> : [LEVEL] message` lines to a file
//!   and echoes them to the console stream matching the level.
//! - `TraceLogger` appends records in the CMTrace log-viewer format.
//! - `propagate_caller_preferences` copies a caller's preference variables
//!   into the scope of a nested call.
//!
//! Configuration is explicit: a `LoggerConfig` (optionally loaded from
//! YAML) and a `PreferenceScope` built once at startup are passed into
//! each call.
//!
//! ```rust,no_run
//! use logline_core::{
//!     LeveledLogger, LogEntry, LogLevel, TraceEntry, TraceLogger, TraceSeverity,
//!     config::FileConfigProvider,
//! };
//!
//! let config = FileConfigProvider::user().load().unwrap_or_default();
//! let prefs = config.preference_scope();
//!
//! let logger = LeveledLogger::new(config.clone());
//! logger.write(&prefs, &LogEntry::new("Starting deploy").with_level(LogLevel::Info))?;
//!
//! let trace = TraceLogger::new().with_default_component(config.default_component.clone());
//! trace.write(&TraceEntry::new("/var/log/deploy.log", "Copied 12 files")
//!     .with_severity(TraceSeverity::Info));
//! # Ok::<(), logline_core::LogError>(())
//! ```

pub mod types;
pub mod error;
pub mod host;
pub mod logging;
pub mod env;
pub mod config;
pub mod preferences;
pub mod writer;

// Re-export commonly used types
pub use types::{
    LogLevel, TraceSeverity,
    ErrorRecord, InvocationInfo,
    LogEntry, TraceEntry,
};

pub use error::{LogError, LogResult};

pub use host::{Host, SharedHost, Stream, ConsoleHost, MemoryHost};

pub use logging::{Logger, SharedLogger, NoOpLogger, ConsoleLogger, MemoryLogger};

pub use env::{Environment, ProcessEnvironment, MemoryEnvironment};

pub use config::{LoggerConfig, FileConfigProvider, ConfigError, ConfigResult};

pub use preferences::{
    ActionPreference, PreferenceScope, Invocation,
    propagate_caller_preferences,
};

pub use writer::{LeveledLogger, TraceLogger};
