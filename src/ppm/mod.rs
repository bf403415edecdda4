//! PPM container: P3 (text) and P6 (binary) RGB payloads, 8 bits per channel.
//!
//! Header tokenizing follows [zune-ppm](https://github.com/etemesi254/zune-image)
//! by Caleb Etemesi (MIT/Apache-2.0/Zlib licensed).

mod decode;
mod encode;
mod header;
mod reader;

pub(crate) use encode::encode_ppm;
pub(crate) use reader::ByteReader;

use std::io::BufRead;

use enough::Stop;
use log::debug;

use crate::error::PpmError;
use crate::image::Image;
use crate::limits::Limits;
use crate::pixel::PpmEncoding;
use header::RawHeader;

/// Largest max value this codec stores (one byte per sample).
pub(crate) const MAX_CHANNEL_VALUE: u32 = u8::MAX as u32;

/// Header that passed validation; pixel storage may now be sized from it.
#[derive(Clone, Debug)]
pub(crate) struct PpmHeader {
    pub encoding: PpmEncoding,
    pub width: u32,
    pub height: u32,
    pub max_value: u8,
    pub pixel_count: usize,
}

impl PpmHeader {
    /// Channel samples in the payload. Overflow was ruled out in [`validate`].
    pub fn sample_count(&self) -> usize {
        self.pixel_count * 3
    }
}

/// Parse and validate a header, leaving `reader` at the first payload byte.
pub(crate) fn read_header<R: BufRead>(
    reader: &mut ByteReader<R>,
    limits: Option<&Limits>,
) -> Result<PpmHeader, PpmError> {
    let raw = header::parse_header(reader)?;
    validate(raw, limits)
}

fn validate(raw: RawHeader, limits: Option<&Limits>) -> Result<PpmHeader, PpmError> {
    let RawHeader {
        tag,
        width,
        height,
        max_value,
    } = raw;

    if !(1..=MAX_CHANNEL_VALUE).contains(&max_value) {
        return Err(PpmError::ChannelRangeExceeded {
            value: max_value,
            max: MAX_CHANNEL_VALUE,
        });
    }
    if width == 0 || height == 0 {
        return Err(PpmError::HeaderMalformed(format!(
            "image dimensions must be positive, got {width}x{height}"
        )));
    }
    let pixel_count = (width as usize)
        .checked_mul(height as usize)
        .filter(|px| px.checked_mul(3).is_some())
        .ok_or(PpmError::DimensionsTooLarge { width, height })?;

    if let Some(limits) = limits {
        limits.check(width, height, pixel_count * 3)?;
    }

    let encoding = PpmEncoding::from_tag(&tag).ok_or(PpmError::UnrecognizedFormatTag(tag))?;

    Ok(PpmHeader {
        encoding,
        width,
        height,
        max_value: max_value as u8,
        pixel_count,
    })
}

/// Decode a whole image: header, validation, then the payload variant the
/// tag selects.
pub(crate) fn decode<R: BufRead>(
    reader: &mut ByteReader<R>,
    limits: Option<&Limits>,
    strict_trailing: bool,
    stop: &dyn Stop,
) -> Result<Image, PpmError> {
    let header = read_header(reader, limits)?;
    debug!(
        "decoding {} payload: {} pixels",
        header.encoding, header.pixel_count
    );

    stop.check()?;

    let pixels = match header.encoding {
        PpmEncoding::Text => decode::decode_text(reader, &header, stop)?,
        PpmEncoding::Binary => decode::decode_binary(reader, &header, strict_trailing, stop)?,
    };

    Ok(Image::from_parts(
        header.encoding,
        header.width,
        header.height,
        header.max_value,
        pixels,
    ))
}
