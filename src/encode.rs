use std::io::Write;

use enough::Stop;

use crate::error::PpmError;
use crate::image::Image;
use crate::pixel::PpmEncoding;
use crate::ppm;

/// Encode request builder.
///
/// The payload encoding and the header tag are chosen independently of the
/// encoding the image was decoded from.
#[derive(Clone, Debug)]
pub struct EncodeRequest {
    encoding: PpmEncoding,
    tag: Option<String>,
}

impl EncodeRequest {
    pub fn new(encoding: PpmEncoding) -> Self {
        Self {
            encoding,
            tag: None,
        }
    }

    /// P3: one decimal `R G B` line per pixel.
    pub fn text() -> Self {
        Self::new(PpmEncoding::Text)
    }

    /// P6: packed bytes.
    pub fn binary() -> Self {
        Self::new(PpmEncoding::Binary)
    }

    /// Write `tag` as the first header token instead of the encoding's own
    /// (`P3`/`P6`). It must be a single token: non-empty, at most 64 bytes,
    /// no whitespace and no leading `#`.
    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = Some(tag.into());
        self
    }

    pub fn encoding(&self) -> PpmEncoding {
        self.encoding
    }

    /// Tag that will start the header.
    pub fn tag(&self) -> &str {
        self.tag.as_deref().unwrap_or(self.encoding.tag())
    }

    /// Write `image` to `writer`, returning the number of bytes written.
    ///
    /// The writer is flushed but not closed.
    pub fn encode<W: Write>(
        &self,
        image: &Image,
        writer: W,
        stop: impl Stop,
    ) -> Result<usize, PpmError> {
        ppm::encode_ppm(image, self.encoding, self.tag(), writer, &stop)
    }

    /// Encode into a new buffer.
    pub fn encode_to_vec(&self, image: &Image, stop: impl Stop) -> Result<Vec<u8>, PpmError> {
        let mut out = Vec::new();
        self.encode(image, &mut out, stop)?;
        Ok(out)
    }
}
