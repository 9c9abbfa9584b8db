//! Error channel for the CLI host: diagnostics go to stderr.

use std::io::Write;

use tmuxwords_source::DiagnosticSink;

/// Writes `[<source>] <message>` lines to any writer, stderr by default.
pub struct StderrSink<W: Write = std::io::Stderr> {
    out: std::cell::RefCell<W>,
}

impl StderrSink {
    pub fn new() -> Self {
        Self::with_writer(std::io::stderr())
    }
}

impl Default for StderrSink {
    fn default() -> Self {
        Self::new()
    }
}

impl<W: Write> StderrSink<W> {
    pub fn with_writer(out: W) -> Self {
        Self {
            out: std::cell::RefCell::new(out),
        }
    }

    #[cfg(test)]
    pub(crate) fn into_inner(self) -> W {
        self.out.into_inner()
    }
}

impl<W: Write> DiagnosticSink for StderrSink<W> {
    fn print_error(&self, message: &str, source: &str) {
        // stderr closed: nothing else to report to
        let _ = writeln!(self.out.borrow_mut(), "[{source}] {message}");
    }
}
