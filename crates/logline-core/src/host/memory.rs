//! In-memory host

use parking_lot::Mutex;

use super::traits::{Host, Stream};

/// Host that records every write, for testing and embedding
///
/// # Example
///
/// ```
/// use logline_core::host::{Host, MemoryHost, Stream};
///
/// let host = MemoryHost::new();
/// host.write(Stream::Warning, "disk almost full");
/// assert_eq!(host.lines(Stream::Warning), vec!["disk almost full".to_string()]);
/// ```
#[derive(Debug, Default)]
pub struct MemoryHost {
    writes: Mutex<Vec<(Stream, String)>>,
}

impl MemoryHost {
    pub fn new() -> Self {
        Self::default()
    }

    /// All writes in order
    pub fn writes(&self) -> Vec<(Stream, String)> {
        self.writes.lock().clone()
    }

    /// Writes to one stream, in order
    pub fn lines(&self, stream: Stream) -> Vec<String> {
        self.writes
            .lock()
            .iter()
            .filter(|(s, _)| *s == stream)
            .map(|(_, text)| text.clone())
            .collect()
    }

    /// Remove and return everything written so far
    pub fn take(&self) -> Vec<(Stream, String)> {
        std::mem::take(&mut *self.writes.lock())
    }

    pub fn is_empty(&self) -> bool {
        self.writes.lock().is_empty()
    }
}

impl Host for MemoryHost {
    fn write(&self, stream: Stream, text: &str) {
        self.writes.lock().push((stream, text.to_string()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_host_records_by_stream() {
        let host = MemoryHost::new();
        assert!(host.is_empty());

        host.write(Stream::Output, "one");
        host.write(Stream::Error, "two");
        host.write(Stream::Output, "three");

        assert_eq!(host.lines(Stream::Output), vec!["one", "three"]);
        assert_eq!(host.lines(Stream::Error), vec!["two"]);
        assert_eq!(host.writes().len(), 3);

        assert_eq!(host.take().len(), 3);
        assert!(host.is_empty());
    }
}
