//! Output management module
//!
//! Writes surviving candidates, one per line, through a buffered writer.

use std::io::{self, BufWriter, Write};

/// What to print for the surviving candidates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Every candidate, one per line
    #[default]
    Words,
    /// Only the number of candidates
    Count,
}

/// Buffered line writer over any output
pub struct OutputWriter<W: Write> {
    writer: BufWriter<W>,
    lines_written: u64,
}

impl<W: Write> OutputWriter<W> {
    pub fn new(inner: W) -> Self {
        Self {
            writer: BufWriter::new(inner),
            lines_written: 0,
        }
    }

    /// Write a line to the output
    pub fn write_line(&mut self, line: &str) -> io::Result<()> {
        writeln!(self.writer, "{}", line)?;
        self.lines_written += 1;
        Ok(())
    }

    pub fn flush(&mut self) -> io::Result<()> {
        self.writer.flush()
    }

    pub fn lines_written(&self) -> u64 {
        self.lines_written
    }

    /// Flush and hand back the underlying writer
    pub fn into_inner(self) -> io::Result<W> {
        self.writer.into_inner().map_err(|e| e.into_error())
    }
}

/// Write candidates according to `mode`. An empty list prints nothing in
/// `Words` mode.
pub fn write_candidates<W: Write>(out: W, candidates: &[String], mode: OutputMode) -> io::Result<W> {
    let mut writer = OutputWriter::new(out);

    match mode {
        OutputMode::Words => {
            for word in candidates {
                writer.write_line(word)?;
            }
        }
        OutputMode::Count => writer.write_line(&candidates.len().to_string())?,
    }

    log::debug!("Wrote {} lines", writer.lines_written());
    writer.into_inner()
}

/// Write to stdout, treating a closed pipe (`| head`) as success
pub fn print_candidates(candidates: &[String], mode: OutputMode) -> io::Result<()> {
    let stdout = io::stdout();
    match write_candidates(stdout.lock(), candidates, mode) {
        Ok(_) => Ok(()),
        Err(e) if e.kind() == io::ErrorKind::BrokenPipe => Ok(()),
        Err(e) => Err(e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_output_writer() {
        let mut writer = OutputWriter::new(Vec::new());
        writer.write_line("hello").unwrap();
        writer.write_line("world").unwrap();
        writer.flush().unwrap();

        assert_eq!(writer.lines_written(), 2);

        let content = String::from_utf8(writer.into_inner().unwrap()).unwrap();
        assert_eq!(content, "hello\nworld\n");
    }

    #[test]
    fn test_write_words() {
        let out = write_candidates(Vec::new(), &words(&["stone", "stare"]), OutputMode::Words).unwrap();
        assert_eq!(out, b"stone\nstare\n");
    }

    #[test]
    fn test_empty_result_prints_nothing() {
        let out = write_candidates(Vec::new(), &[], OutputMode::Words).unwrap();
        assert!(out.is_empty());
    }

    #[test]
    fn test_write_count() {
        let out = write_candidates(Vec::new(), &words(&["stone", "stare"]), OutputMode::Count).unwrap();
        assert_eq!(out, b"2\n");

        let out = write_candidates(Vec::new(), &[], OutputMode::Count).unwrap();
        assert_eq!(out, b"0\n");
    }
}
