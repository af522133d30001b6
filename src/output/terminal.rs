//! Hosted builds and simulators print straight to the terminal.

use super::Sink;
use std::io::{self, Write};

/// Which standard stream a [`TerminalSink`] writes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Stream {
    #[default]
    Stdout,
    Stderr,
}

/// Writes each line to stdout or stderr. Lines already end in `\r\n`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TerminalSink {
    stream: Stream,
}

impl TerminalSink {
    #[must_use]
    pub const fn new(stream: Stream) -> Self {
        Self { stream }
    }

    #[must_use]
    pub const fn stdout() -> Self {
        Self::new(Stream::Stdout)
    }

    #[must_use]
    pub const fn stderr() -> Self {
        Self::new(Stream::Stderr)
    }
}

impl Sink for TerminalSink {
    fn write(&mut self, bytes: &[u8]) -> Result<(), crate::Error> {
        match self.stream {
            Stream::Stdout => io::stdout().lock().write_all(bytes)?,
            Stream::Stderr => io::stderr().lock().write_all(bytes)?,
        }
        Ok(())
    }

    fn flush(&mut self) -> Result<(), crate::Error> {
        match self.stream {
            Stream::Stdout => io::stdout().flush()?,
            Stream::Stderr => io::stderr().flush()?,
        }
        Ok(())
    }
}
