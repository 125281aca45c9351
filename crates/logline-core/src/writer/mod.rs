//! The two log writers
//!
//! - `LeveledLogger`: timestamped text to a file plus a host stream
//! - `TraceLogger`: CMTrace records appended to a file

mod append;
mod thread;
mod leveled;
mod trace;

pub use leveled::LeveledLogger;
pub use trace::TraceLogger;
pub use thread::current_thread_id;
