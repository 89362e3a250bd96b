//! Console sink

use std::io::{self, Write};

/// Writes to the process's standard error (default) or standard output.
///
/// Each write takes the stream's lock for its duration, and the logger
/// hands over a whole output unit per write, so records from concurrent
/// loggers sharing a stream do not interleave.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ConsoleSink {
    #[default]
    Stderr,
    Stdout,
}

impl Write for ConsoleSink {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match self {
            ConsoleSink::Stderr => {
                io::stderr().lock().write_all(buf)?;
            }
            ConsoleSink::Stdout => {
                io::stdout().lock().write_all(buf)?;
            }
        }
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        match self {
            ConsoleSink::Stderr => io::stderr().flush(),
            ConsoleSink::Stdout => io::stdout().flush(),
        }
    }
}
