//! Destination for `console.log` output
//!
//! - `Stdout`: writes each line to standard output (default)
//! - `Buffer`: records each line for later inspection (tests, embedding)

use std::io::Write;

use parking_lot::Mutex;

/// Where console output goes.
#[derive(Debug, Default)]
pub enum Output {
    /// Writes to stdout.
    #[default]
    Stdout,
    /// Captures lines in memory.
    Buffer(Mutex<Vec<String>>),
}

impl Output {
    /// Create a capturing output.
    pub fn buffer() -> Self {
        Output::Buffer(Mutex::new(Vec::new()))
    }

    /// Emit one line.
    pub fn write_line(&self, line: &str) {
        match self {
            Output::Stdout => emit(&mut std::io::stdout().lock(), line),
            Output::Buffer(lines) => lines.lock().push(line.to_string()),
        }
    }

    /// All captured lines. Always empty for stdout.
    pub fn lines(&self) -> Vec<String> {
        match self {
            Output::Stdout => Vec::new(),
            Output::Buffer(lines) => lines.lock().clone(),
        }
    }

    /// Drain captured lines.
    pub fn take(&self) -> Vec<String> {
        match self {
            Output::Stdout => Vec::new(),
            Output::Buffer(lines) => std::mem::take(&mut *lines.lock()),
        }
    }
}

/// Write one line. A failed write (e.g. a closed pipe) is logged, not fatal.
fn emit(writer: &mut impl Write, line: &str) {
    if let Err(err) = writeln!(writer, "{line}") {
        tracing::warn!(%err, "failed to write console output");
    }
}
