//! Best-effort line appends shared by both writers

use std::fs::{self, OpenOptions};
use std::io::{self, ErrorKind, Write};
use std::path::Path;

use crate::logging::Logger;

#[cfg(windows)]
const LINE_ENDING: &str = "\r\n";
#[cfg(not(windows))]
const LINE_ENDING: &str = "\n";

/// Open `path` in append mode, write one line, close
///
/// With `create_parents` missing directories are created first.
pub(crate) fn append_line(path: &Path, line: &str, create_parents: bool) -> io::Result<()> {
    if create_parents {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
    }
    let mut file = OpenOptions::new().create(true).append(true).open(path)?;
    file.write_all(format!("{}{}", line, LINE_ENDING).as_bytes())?;
    file.flush()
}

/// Append and report any failure on the diagnostic channel
///
/// Returns whether the line was written.
pub(crate) fn append_or_report(
    diagnostics: &dyn Logger,
    path: &Path,
    line: &str,
    create_parents: bool,
) -> bool {
    match append_line(path, line, create_parents) {
        Ok(()) => true,
        Err(err) => {
            report_append_error(diagnostics, path, &err);
            false
        }
    }
}

/// Permission problems are reported at debug level, anything else as a
/// warning carrying the error text
pub(crate) fn report_append_error(diagnostics: &dyn Logger, path: &Path, err: &io::Error) {
    if err.kind() == ErrorKind::PermissionDenied {
        crate::log_debug!(diagnostics, "Access denied writing log file '{}'", path.display());
    } else {
        crate::log_warn!(diagnostics, "Failed to write log file '{}': {}", path.display(), err);
    }
}
