//! Error types returned by the loggers

use thiserror::Error;

use crate::host::Stream;

/// Errors that can occur while logging
///
/// File I/O failures never show up here; they are reported on the
/// diagnostic channel instead.
#[derive(Error, Debug)]
pub enum LogError {
    /// A `Fatal` entry was written; carries the full content
    #[error("{0}")]
    Fatal(String),

    /// The stream's preference is `Stop`
    #[error("{stream} stream stopped: {message}")]
    Stopped { stream: Stream, message: String },

    #[error("Unknown log level: {0}")]
    UnknownLevel(String),

    #[error("Invalid trace severity {0}, expected 1, 2 or 3")]
    InvalidSeverity(u8),

    #[error("Unknown action preference: {0}")]
    UnknownPreference(String),
}

impl LogError {
    /// Whether this error should abort the calling workflow
    pub fn is_terminating(&self) -> bool {
        matches!(self, LogError::Fatal(_) | LogError::Stopped { .. })
    }
}

pub type LogResult<T> = Result<T, LogError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(LogError::Fatal("boom".into()).to_string(), "boom");
        let stopped = LogError::Stopped {
            stream: Stream::Warning,
            message: "careful".into(),
        };
        assert_eq!(stopped.to_string(), "Warning stream stopped: careful");
        assert!(stopped.is_terminating());
        assert!(!LogError::InvalidSeverity(7).is_terminating());
    }
}
