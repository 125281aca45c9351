//! Host stream abstraction

use std::fmt;
use std::sync::Arc;

/// Output streams a host exposes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stream {
    /// Primary output (stdout)
    Output,
    Warning,
    Error,
    Debug,
    Verbose,
}

impl Stream {
    /// Preference variable that gates this stream, `None` for `Output`
    pub fn preference_name(&self) -> Option<&'static str> {
        match self {
            Stream::Output => None,
            Stream::Warning => Some("WarningPreference"),
            Stream::Error => Some("ErrorActionPreference"),
            Stream::Debug => Some("DebugPreference"),
            Stream::Verbose => Some("VerbosePreference"),
        }
    }
}

impl fmt::Display for Stream {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Stream::Output => "Output",
            Stream::Warning => "Warning",
            Stream::Error => "Error",
            Stream::Debug => "Debug",
            Stream::Verbose => "Verbose",
        };
        f.write_str(name)
    }
}

/// Destination for echoed log content
///
/// Implementations:
/// - `ConsoleHost`: the process console
/// - `MemoryHost`: captures writes for testing
pub trait Host: Send + Sync {
    /// Write one piece of content to a stream
    fn write(&self, stream: Stream, text: &str);
}

/// Type alias for an Arc-wrapped host
pub type SharedHost = Arc<dyn Host>;
