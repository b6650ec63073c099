//! Output sinks for trace lines.

use std::io::Write;

/// Destination for human-readable trace lines.
///
/// A printer accepts one line per call and reports nothing back; write
/// failures are the printer's own concern. Any `FnMut(&str)` closure is a
/// printer.
///
/// # Example
///
/// ```rust
/// use penplot::effects::Printer;
///
/// let mut seen = Vec::new();
/// {
///     let mut printer = |line: &str| seen.push(line.to_string());
///     printer.print("Raising the pen");
/// }
/// assert_eq!(seen, vec!["Raising the pen"]);
/// ```
pub trait Printer {
    fn print(&mut self, line: &str);
}

impl<F> Printer for F
where
    F: FnMut(&str),
{
    fn print(&mut self, line: &str) {
        self(line)
    }
}

/// Printer that keeps every line in memory.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct BufferPrinter {
    lines: Vec<String>,
}

impl BufferPrinter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Lines received so far, oldest first.
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn into_lines(self) -> Vec<String> {
        self.lines
    }
}

impl Printer for BufferPrinter {
    fn print(&mut self, line: &str) {
        self.lines.push(line.to_string());
    }
}

/// Printer that emits each line as a `tracing` event at info level.
#[derive(Clone, Copy, Debug, Default)]
pub struct TracingPrinter;

impl Printer for TracingPrinter {
    fn print(&mut self, line: &str) {
        tracing::info!(target: "penplot::trace", "{line}");
    }
}

/// Printer that writes each line to standard output.
#[derive(Clone, Copy, Debug, Default)]
pub struct StdoutPrinter;

impl Printer for StdoutPrinter {
    fn print(&mut self, line: &str) {
        let mut stdout = std::io::stdout().lock();
        if let Err(err) = writeln!(stdout, "{line}") {
            tracing::warn!(error = %err, "failed to write trace line to stdout");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn buffer_printer_keeps_order() {
        let mut printer = BufferPrinter::new();
        printer.print("first");
        printer.print("second");

        assert_eq!(printer.lines(), &["first", "second"]);
        assert_eq!(printer.into_lines(), vec!["first", "second"]);
    }

    #[test]
    fn closures_are_printers() {
        let mut count = 0;
        {
            let mut printer = |_: &str| count += 1;
            printer.print("a");
            printer.print("b");
        }
        assert_eq!(count, 2);
    }

    #[test]
    fn trait_objects_are_printers() {
        let mut buffer = BufferPrinter::new();
        {
            let printer: &mut dyn Printer = &mut buffer;
            printer.print("through dyn");
        }
        assert_eq!(buffer.lines(), &["through dyn"]);
    }

    #[test]
    fn tracing_printer_accepts_lines_without_subscriber() {
        let mut printer = TracingPrinter;
        printer.print("Lowering the pen");
    }
}
