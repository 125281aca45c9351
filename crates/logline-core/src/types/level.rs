//! Severity levels for the leveled and trace loggers

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::LogError;
use crate::host::Stream;

/// Severity of a leveled log entry
///
/// The level picks both the tag written into the prefix and the host
/// stream the content is echoed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum LogLevel {
    #[default]
    Info,
    Warning,
    Error,
    Debug,
    Verbose,
    Fatal,
    VerboseError,
}

impl LogLevel {
    /// All levels, in declaration order
    pub const ALL: [LogLevel; 7] = [
        LogLevel::Info,
        LogLevel::Warning,
        LogLevel::Error,
        LogLevel::Debug,
        LogLevel::Verbose,
        LogLevel::Fatal,
        LogLevel::VerboseError,
    ];

    /// Canonical upper-case name of the level
    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Info => "INFO",
            LogLevel::Warning => "WARNING",
            LogLevel::Error => "ERROR",
            LogLevel::Debug => "DEBUG",
            LogLevel::Verbose => "VERBOSE",
            LogLevel::Fatal => "FATAL",
            LogLevel::VerboseError => "VERBOSEERROR",
        }
    }

    /// Tag written between the brackets of the line prefix
    ///
    /// `VerboseError` is tagged as a plain error but still goes to the
    /// verbose stream.
    pub fn label(&self) -> &'static str {
        match self {
            LogLevel::VerboseError => "ERROR",
            other => other.as_str(),
        }
    }

    /// Host stream the content is echoed to, `None` for `Fatal`
    pub fn stream(&self) -> Option<Stream> {
        match self {
            LogLevel::Info => Some(Stream::Output),
            LogLevel::Warning => Some(Stream::Warning),
            LogLevel::Error => Some(Stream::Error),
            LogLevel::Debug => Some(Stream::Debug),
            LogLevel::Verbose | LogLevel::VerboseError => Some(Stream::Verbose),
            LogLevel::Fatal => None,
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LogLevel {
    type Err = LogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        LogLevel::ALL
            .iter()
            .copied()
            .find(|level| level.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| LogError::UnknownLevel(s.to_string()))
    }
}

/// Severity code of a CMTrace record (`type="1|2|3"`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum TraceSeverity {
    #[default]
    Info = 1,
    Warning = 2,
    Error = 3,
}

impl TraceSeverity {
    pub fn code(&self) -> u8 {
        *self as u8
    }
}

impl TryFrom<u8> for TraceSeverity {
    type Error = LogError;

    fn try_from(code: u8) -> Result<Self, LogError> {
        match code {
            1 => Ok(TraceSeverity::Info),
            2 => Ok(TraceSeverity::Warning),
            3 => Ok(TraceSeverity::Error),
            other => Err(LogError::InvalidSeverity(other)),
        }
    }
}

impl From<TraceSeverity> for u8 {
    fn from(severity: TraceSeverity) -> u8 {
        severity.code()
    }
}

impl fmt::Display for TraceSeverity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_parse_is_case_insensitive() {
        assert_eq!("warning".parse::<LogLevel>().unwrap(), LogLevel::Warning);
        assert_eq!("VerboseError".parse::<LogLevel>().unwrap(), LogLevel::VerboseError);
        assert_eq!(" Fatal ".parse::<LogLevel>().unwrap(), LogLevel::Fatal);
    }

    #[test]
    fn test_level_parse_rejects_unknown() {
        assert!(matches!(
            "chatty".parse::<LogLevel>(),
            Err(LogError::UnknownLevel(name)) if name == "chatty"
        ));
    }

    #[test]
    fn test_level_labels_and_streams() {
        assert_eq!(LogLevel::default(), LogLevel::Info);
        assert_eq!(LogLevel::VerboseError.label(), "ERROR");
        assert_eq!(LogLevel::VerboseError.stream(), Some(Stream::Verbose));
        assert_eq!(LogLevel::Verbose.stream(), Some(Stream::Verbose));
        assert_eq!(LogLevel::Info.stream(), Some(Stream::Output));
        assert_eq!(LogLevel::Fatal.stream(), None);
    }

    #[test]
    fn test_trace_severity_codes() {
        assert_eq!(TraceSeverity::default().code(), 1);
        assert_eq!(TraceSeverity::try_from(2).unwrap(), TraceSeverity::Warning);
        assert_eq!(TraceSeverity::Error.to_string(), "3");
        assert!(matches!(TraceSeverity::try_from(4), Err(LogError::InvalidSeverity(4))));
        assert!(matches!(TraceSeverity::try_from(0), Err(LogError::InvalidSeverity(0))));
    }
}
