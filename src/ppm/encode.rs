//! PPM encoder: P3 text and P6 binary payloads behind a regenerated header.

use std::io::{ErrorKind, Write};

use enough::Stop;

use super::header::MAX_TOKEN_LEN;
use crate::error::PpmError;
use crate::image::Image;
use crate::pixel::PpmEncoding;

/// Bytes staged before handing them to the sink.
const FLUSH_THRESHOLD: usize = 64 * 1024;

/// Write `image` with the given payload encoding, headed by `tag`.
/// Returns the number of bytes written.
pub(crate) fn encode_ppm<W: Write>(
    image: &Image,
    encoding: PpmEncoding,
    tag: &str,
    writer: W,
    stop: &dyn Stop,
) -> Result<usize, PpmError> {
    check_tag(tag)?;
    stop.check()?;

    let mut sink = Sink::new(writer);
    let header = format!(
        "{tag}\n{} {}\n{}\n",
        image.width(),
        image.height(),
        image.max_value()
    );
    sink.put(header.as_bytes())?;

    match encoding {
        PpmEncoding::Text => encode_text(image, &mut sink, stop)?,
        PpmEncoding::Binary => encode_binary(image, &mut sink, stop)?,
    }
    sink.flush()?;
    Ok(sink.written)
}

/// One `R G B` line per pixel.
fn encode_text<W: Write>(
    image: &Image,
    sink: &mut Sink<W>,
    stop: &dyn Stop,
) -> Result<(), PpmError> {
    let w = image.width() as usize;
    let mut staged = Vec::with_capacity(FLUSH_THRESHOLD + 16);
    for (i, px) in image.pixels().iter().enumerate() {
        if i % w.saturating_mul(16).max(1) == 0 {
            stop.check()?;
        }
        writeln!(staged, "{} {} {}", px.r, px.g, px.b)?;
        if staged.len() >= FLUSH_THRESHOLD {
            sink.put(&staged)?;
            staged.clear();
        }
    }
    sink.put(&staged)
}

/// Packed `R, G, B` bytes, no separators.
fn encode_binary<W: Write>(
    image: &Image,
    sink: &mut Sink<W>,
    stop: &dyn Stop,
) -> Result<(), PpmError> {
    for chunk in image.as_bytes().chunks(FLUSH_THRESHOLD) {
        stop.check()?;
        sink.put(chunk)?;
    }
    Ok(())
}

/// A tag must read back as a single header token.
fn check_tag(tag: &str) -> Result<(), PpmError> {
    let valid = !tag.is_empty()
        && tag.len() <= MAX_TOKEN_LEN
        && !tag.starts_with('#')
        && !tag.bytes().any(|b| b.is_ascii_whitespace());
    if valid {
        Ok(())
    } else {
        Err(PpmError::HeaderMalformed(format!(
            "cannot write format tag {tag:?}"
        )))
    }
}

/// Counts accepted bytes so a stalled sink can be reported precisely.
struct Sink<W> {
    inner: W,
    written: usize,
}

impl<W: Write> Sink<W> {
    fn new(inner: W) -> Self {
        Self { inner, written: 0 }
    }

    fn put(&mut self, mut buf: &[u8]) -> Result<(), PpmError> {
        let requested = self.written + buf.len();
        while !buf.is_empty() {
            match self.inner.write(buf) {
                Ok(0) => return Err(self.incomplete(requested)),
                Ok(n) => {
                    self.written += n;
                    buf = &buf[n..];
                }
                Err(e) if e.kind() == ErrorKind::Interrupted => {}
                Err(e) if e.kind() == ErrorKind::WriteZero => return Err(self.incomplete(requested)),
                Err(e) => return Err(e.into()),
            }
        }
        Ok(())
    }

    fn flush(&mut self) -> Result<(), PpmError> {
        match self.inner.flush() {
            Err(e) if e.kind() == ErrorKind::WriteZero => Err(self.incomplete(self.written)),
            other => Ok(other?),
        }
    }

    fn incomplete(&self, requested: usize) -> PpmError {
        PpmError::WriteIncomplete {
            written: self.written,
            requested,
        }
    }
}
