//! Every stage of the pipeline writes into a caller-owned fixed buffer. `Cursor`
//! is the one place that knows how to do that without ever stepping past the end.

use std::cmp::min;
use std::fmt;

/// Truncating writer over a byte slice.
///
/// Writes stop at `limit` (the slice length minus one, leaving room for a NUL
/// terminator). Truncation always lands on a UTF-8 character boundary, so the
/// written prefix is valid `str` whenever every input was.
pub struct Cursor<'a> {
    buf: &'a mut [u8],
    pos: usize,
    limit: usize,
}

impl<'a> Cursor<'a> {
    /// Wraps `buf`, reserving its last byte for the terminator.
    pub fn new(buf: &'a mut [u8]) -> Self {
        let limit = buf.len().saturating_sub(1);
        Self { buf, pos: 0, limit }
    }

    /// Last writable index plus one.
    #[must_use]
    pub const fn limit(&self) -> usize {
        self.limit
    }

    #[must_use]
    pub const fn remaining(&self) -> usize {
        self.limit - self.pos
    }

    #[must_use]
    pub const fn is_full(&self) -> bool {
        self.pos >= self.limit
    }

    /// Copies as much of `s` as fits, cutting at a character boundary. Returns the bytes written.
    pub fn push_str(&mut self, s: &str) -> usize {
        let mut len = min(self.remaining(), s.len());
        while !s.is_char_boundary(len) {
            len -= 1;
        }
        self.buf[self.pos..self.pos + len].copy_from_slice(&s.as_bytes()[..len]);
        self.pos += len;
        len
    }

    /// Writes `s` only if all of it fits. Escape sequences must never be cut in half.
    pub fn push_whole(&mut self, s: &str) -> bool {
        if s.len() > self.remaining() {
            return false;
        }
        self.push_str(s);
        true
    }

    /// Moves the write position back to `pos`, or further if `pos` splits a character.
    pub fn rewind_to(&mut self, pos: usize) {
        let mut pos = min(pos, self.pos);
        while pos > 0 && pos < self.pos && is_continuation(self.buf[pos]) {
            pos -= 1;
        }
        self.pos = pos;
    }

    /// Writes a NUL at the current position (the reserved byte when full) and returns the length.
    pub fn terminate(self) -> usize {
        if let Some(slot) = self.buf.get_mut(self.pos) {
            *slot = 0;
        }
        self.pos
    }
}

const fn is_continuation(byte: u8) -> bool {
    byte & 0b1100_0000 == 0b1000_0000
}

impl fmt::Write for Cursor<'_> {
    /// Truncation is silent; returning `Err` would abort the surrounding `write!`
    /// and lose whatever still fits.
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.push_str(s);
        Ok(())
    }
}
