//! Core types shared by the loggers

mod level;
mod error_record;
mod entry;

pub use level::{LogLevel, TraceSeverity};
pub use error_record::{ErrorRecord, InvocationInfo};
pub use entry::{LogEntry, TraceEntry};
