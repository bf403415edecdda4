//! Byte cursor over a buffered stream.
//!
//! Header tokens and text samples are both whitespace-delimited, so the
//! header parser and the text decoder share these primitives.

use std::io::{self, BufRead, ErrorKind};

/// A decimal token read from the payload.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Number {
    /// All digits. Values past `u32::MAX` saturate.
    Value(u32),
    /// A token containing something other than ASCII digits.
    NotANumber,
    /// Only whitespace remained.
    End,
}

pub(crate) struct ByteReader<R> {
    inner: R,
}

impl<R: BufRead> ByteReader<R> {
    pub(crate) fn new(inner: R) -> Self {
        Self { inner }
    }

    fn buffer(&mut self) -> io::Result<&[u8]> {
        loop {
            match self.inner.fill_buf() {
                Ok(_) => break,
                Err(e) if e.kind() == ErrorKind::Interrupted => continue,
                Err(e) => return Err(e),
            }
        }
        self.inner.fill_buf()
    }

    pub(crate) fn peek(&mut self) -> io::Result<Option<u8>> {
        Ok(self.buffer()?.first().copied())
    }

    pub(crate) fn next_byte(&mut self) -> io::Result<Option<u8>> {
        let byte = self.peek()?;
        if byte.is_some() {
            self.inner.consume(1);
        }
        Ok(byte)
    }

    /// Advance past ASCII whitespace.
    pub(crate) fn skip_whitespace(&mut self) -> io::Result<()> {
        loop {
            let buf = self.buffer()?;
            if buf.is_empty() {
                return Ok(());
            }
            let n = buf.iter().take_while(|b| b.is_ascii_whitespace()).count();
            let done = n < buf.len();
            self.inner.consume(n);
            if done {
                return Ok(());
            }
        }
    }

    /// Discard bytes up to and including the next `\n` or `\r`.
    pub(crate) fn skip_line(&mut self) -> io::Result<()> {
        loop {
            let buf = self.buffer()?;
            if buf.is_empty() {
                return Ok(());
            }
            let (n, done) = match buf.iter().position(|&b| b == b'\n' || b == b'\r') {
                Some(end) => (end + 1, true),
                None => (buf.len(), false),
            };
            self.inner.consume(n);
            if done {
                return Ok(());
            }
        }
    }

    /// Read bytes up to the next whitespace byte, consuming that single
    /// delimiter but nothing after it.
    ///
    /// At most `max_len + 1` bytes are stored in `out`, so callers can tell
    /// an over-long token apart from one that fits. An empty `out` means the
    /// stream was already exhausted.
    pub(crate) fn read_token(&mut self, out: &mut Vec<u8>, max_len: usize) -> io::Result<()> {
        out.clear();
        while let Some(byte) = self.next_byte()? {
            if byte.is_ascii_whitespace() {
                break;
            }
            if out.len() <= max_len {
                out.push(byte);
            }
        }
        Ok(())
    }

    /// Skip whitespace, then read one token as an unsigned decimal.
    pub(crate) fn read_number(&mut self) -> io::Result<Number> {
        self.skip_whitespace()?;
        let mut value = 0u32;
        let mut digits = 0usize;
        let mut numeric = true;
        while let Some(byte) = self.next_byte()? {
            if byte.is_ascii_whitespace() {
                break;
            }
            if byte.is_ascii_digit() {
                value = value
                    .saturating_mul(10)
                    .saturating_add(u32::from(byte - b'0'));
            } else {
                numeric = false;
            }
            digits += 1;
        }
        Ok(match (digits, numeric) {
            (0, _) => Number::End,
            (_, true) => Number::Value(value),
            (_, false) => Number::NotANumber,
        })
    }

    /// Copy raw bytes into `out` until it is full or the stream ends.
    /// Returns the number of bytes copied.
    pub(crate) fn read_raw(&mut self, out: &mut [u8]) -> io::Result<usize> {
        let mut filled = 0;
        while filled < out.len() {
            let buf = self.buffer()?;
            if buf.is_empty() {
                break;
            }
            let n = buf.len().min(out.len() - filled);
            out[filled..filled + n].copy_from_slice(&buf[..n]);
            self.inner.consume(n);
            filled += n;
        }
        Ok(filled)
    }
}
