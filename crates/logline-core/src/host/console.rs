//! Console host implementation

use std::io::{self, Write};

use super::traits::{Host, Stream};

/// A host that writes to the process console
///
/// `Output` goes to stdout; the other streams go to stderr, tagged the way
/// interactive shells tag them.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleHost;

impl ConsoleHost {
    pub fn new() -> Self {
        Self
    }

    fn tag(stream: Stream) -> &'static str {
        match stream {
            Stream::Output | Stream::Error => "",
            Stream::Warning => "WARNING: ",
            Stream::Debug => "DEBUG: ",
            Stream::Verbose => "VERBOSE: ",
        }
    }

    fn line(stream: Stream, text: &str) -> String {
        format!("{}{}", Self::tag(stream), text)
    }
}

impl Host for ConsoleHost {
    fn write(&self, stream: Stream, text: &str) {
        // A closed console must not take the caller down with it.
        match stream {
            Stream::Output => {
                let mut out = io::stdout().lock();
                let _ = writeln!(out, "{}", Self::line(stream, text));
            }
            _ => {
                let mut err = io::stderr().lock();
                let _ = writeln!(err, "{}", Self::line(stream, text));
            }
        }
    }
}
