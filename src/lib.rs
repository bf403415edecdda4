//! # ppmrw
//!
//! PPM (portable pixmap) decoder and encoder for both payload variants:
//!
//! - **P3**: samples as whitespace-separated decimal text
//! - **P6**: samples as packed raw bytes
//!
//! Either variant decodes into one canonical [`Image`], and an [`Image`] can
//! be written out as either variant, so any input converts to any output.
//!
//! ## Header
//!
//! Four tokens: format tag, width, height and max channel value. A `#`
//! starts a comment that runs to the end of the line; comments may sit
//! between any two header tokens. Exactly one whitespace byte separates the
//! header from the payload. Header comments are not carried through a
//! decode/encode cycle.
//!
//! ## Validation
//!
//! The max value must be in `1..=255` and both dimensions positive, checked
//! before any pixel storage is allocated. Samples above the declared max
//! value, short payloads and (for P3) extra trailing samples are errors. P6
//! payloads are not probed for trailing bytes unless
//! [`DecodeRequest::strict_trailing`] is enabled.
//!
//! ## Non-Goals
//!
//! - 16-bit samples (max value above 255)
//! - PBM/PGM/PAM siblings (P1, P2, P4, P5, P7)
//! - Incremental decoding, resizing, color conversion
//!
//! ## Usage
//!
//! ```
//! use ppmrw::{DecodeRequest, EncodeRequest, Unstoppable};
//!
//! let text: &[u8] = b"P3\n# two pixels\n2 1\n255\n255 0 0 0 255 0\n";
//! let image = DecodeRequest::new(text).decode(Unstoppable)?;
//! assert_eq!((image.width(), image.height()), (2, 1));
//!
//! let binary = EncodeRequest::binary().encode_to_vec(&image, Unstoppable)?;
//! assert_eq!(&binary[..11], b"P6\n2 1\n255\n");
//! assert_eq!(&binary[11..], &[255, 0, 0, 0, 255, 0]);
//! # Ok::<(), ppmrw::PpmError>(())
//! ```

#![forbid(unsafe_code)]

mod error;
mod image;
mod info;
mod limits;
mod pixel;
mod ppm;

mod decode;
mod encode;

use std::io::{BufRead, Write};

// Re-exports
pub use decode::DecodeRequest;
pub use encode::EncodeRequest;
pub use enough::{Stop, StopReason, Unstoppable};
pub use error::PpmError;
pub use image::Image;
pub use info::ImageInfo;
pub use limits::Limits;
pub use pixel::{Pixel, PpmEncoding};

/// Decode a P3 or P6 image from `reader`.
pub fn decode<R: BufRead>(reader: R, stop: impl Stop) -> Result<Image, PpmError> {
    DecodeRequest::new(reader).decode(stop)
}

/// Encode `image` to `writer` with its encoding's standard tag.
pub fn encode<W: Write>(
    image: &Image,
    encoding: PpmEncoding,
    writer: W,
    stop: impl Stop,
) -> Result<usize, PpmError> {
    EncodeRequest::new(encoding).encode(image, writer, stop)
}

/// Decode from `reader` and re-encode to `writer` as `target`.
///
/// Nothing is written unless the whole input decodes. Returns the metadata
/// of the decoded input.
pub fn convert<R: BufRead, W: Write>(
    reader: R,
    writer: W,
    target: PpmEncoding,
    stop: impl Stop,
) -> Result<ImageInfo, PpmError> {
    let image = ppm::decode(&mut ppm::ByteReader::new(reader), None, false, &stop)?;
    ppm::encode_ppm(&image, target, target.tag(), writer, &stop)?;
    Ok(ImageInfo::from(&image))
}
