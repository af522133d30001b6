//! Where rendered lines go. On a board that is a UART or USB CDC driver; on a host
//! it is a terminal or a file. The `Sink` trait is the seam between the two.

mod file;
mod terminal;

pub use file::FileSink;
pub use terminal::{Stream, TerminalSink};

/// Byte-output capability.
///
/// `write` receives one complete rendered line (including `\r\n`, without the
/// NUL) and must not keep the slice past the call. The logger ignores the
/// returned error; a sink that cannot write has nowhere to report it anyway.
pub trait Sink: Send {
    /// # Errors
    /// I/O errors from the underlying device.
    fn write(&mut self, bytes: &[u8]) -> Result<(), crate::Error>;

    /// Buffered sinks may lose tail data on abrupt exit without an explicit flush.
    ///
    /// # Errors
    /// I/O errors from the underlying device.
    fn flush(&mut self) -> Result<(), crate::Error> {
        Ok(())
    }
}

impl<S: Sink + ?Sized> Sink for Box<S> {
    fn write(&mut self, bytes: &[u8]) -> Result<(), crate::Error> {
        (**self).write(bytes)
    }

    fn flush(&mut self) -> Result<(), crate::Error> {
        (**self).flush()
    }
}
