use std::io::{self, Write};

/// Anything that can receive the validator's line-oriented diagnostic
/// output: one line per progress marker, one line per detected violation.
/// Write-only and append-only by contract -- nothing here ever reads back
/// what was emitted.
pub trait DiagnosticSink {
    fn emit_line(&mut self, line: &str);
}

/// In-memory collector, used by tests to assert on exactly which lines were
/// emitted.
#[derive(Debug, Default)]
pub struct VecSink {
    lines: Vec<String>,
}

impl VecSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn error_lines(&self) -> impl Iterator<Item = &str> {
        self.lines
            .iter()
            .map(String::as_str)
            .filter(|line| line.starts_with("[error]"))
    }
}

impl DiagnosticSink for VecSink {
    fn emit_line(&mut self, line: &str) {
        self.lines.push(line.to_string());
    }
}

/// Production sink: adapts any `std::io::Write` (a file, stderr, an
/// in-memory buffer) into a `DiagnosticSink`. Write failures are swallowed
/// rather than propagated -- a diagnostic stream that can't keep up with
/// the walk is not itself a validation failure, and the sink trait has no
/// fallible variant to report through.
pub struct WriteSink<W: Write> {
    writer: W,
}

impl<W: Write> WriteSink<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> DiagnosticSink for WriteSink<W> {
    fn emit_line(&mut self, line: &str) {
        let _ = writeln!(self.writer, "{line}");
    }
}

impl DiagnosticSink for io::Stderr {
    fn emit_line(&mut self, line: &str) {
        let _ = writeln!(self, "{line}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vec_sink_collects_in_order() {
        let mut sink = VecSink::new();
        sink.emit_line("first");
        sink.emit_line("[error] second");
        assert_eq!(sink.lines(), &["first", "[error] second"]);
        assert_eq!(sink.error_lines().collect::<Vec<_>>(), vec!["[error] second"]);
    }

    #[test]
    fn write_sink_forwards_to_the_underlying_writer() {
        let mut buf = Vec::new();
        {
            let mut sink = WriteSink::new(&mut buf);
            sink.emit_line("hello");
        }
        assert_eq!(String::from_utf8(buf).unwrap(), "hello\n");
    }
}
