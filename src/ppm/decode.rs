//! Payload decoders for P3 (text) and P6 (binary).

use std::io::BufRead;

use enough::Stop;

use super::PpmHeader;
use super::reader::{ByteReader, Number};
use crate::error::PpmError;
use crate::pixel::Pixel;

/// Cap on up-front pixel allocation. Larger images grow as data arrives, so
/// a lying header cannot reserve memory the payload never fills.
const INITIAL_PIXEL_CAPACITY: usize = 1 << 20;

/// Raw bytes pulled from the stream per binary read (a multiple of 3).
const BINARY_CHUNK: usize = 3 * 16 * 1024;

/// Decode `pixel_count` whitespace-separated decimal triples, then require
/// that nothing but whitespace follows.
pub(crate) fn decode_text<R: BufRead>(
    reader: &mut ByteReader<R>,
    header: &PpmHeader,
    stop: &dyn Stop,
) -> Result<Vec<Pixel>, PpmError> {
    let expected = header.sample_count();
    let max = u32::from(header.max_value);
    let w = header.width as usize;
    let mut pixels = Vec::with_capacity(header.pixel_count.min(INITIAL_PIXEL_CAPACITY));

    for i in 0..header.pixel_count {
        if i % w.saturating_mul(16).max(1) == 0 {
            stop.check()?;
        }
        let mut rgb = [0u32; 3];
        for (c, sample) in rgb.iter_mut().enumerate() {
            *sample = match reader.read_number()? {
                Number::Value(v) => v,
                Number::End => {
                    return Err(PpmError::DataTruncated {
                        expected,
                        actual: i * 3 + c,
                    });
                }
                Number::NotANumber => {
                    return Err(PpmError::InvalidData(format!(
                        "sample {c} of pixel {i} is not a decimal integer"
                    )));
                }
            };
        }
        if let Some(&value) = rgb.iter().find(|&&v| v > max) {
            return Err(PpmError::ChannelRangeExceeded { value, max });
        }
        pixels.push(Pixel::new(rgb[0] as u8, rgb[1] as u8, rgb[2] as u8));
    }

    match reader.read_number()? {
        Number::End => Ok(pixels),
        Number::Value(_) => Err(PpmError::DataOverflow),
        Number::NotANumber => Err(PpmError::InvalidData(
            "unexpected trailing data after the last pixel".into(),
        )),
    }
}

/// Decode `pixel_count * 3` packed bytes.
///
/// Bytes after the payload are left unread unless `strict_trailing` is set,
/// in which case any remaining byte is a `DataOverflow`.
pub(crate) fn decode_binary<R: BufRead>(
    reader: &mut ByteReader<R>,
    header: &PpmHeader,
    strict_trailing: bool,
    stop: &dyn Stop,
) -> Result<Vec<Pixel>, PpmError> {
    let expected = header.sample_count();
    let max = header.max_value;
    let mut pixels = Vec::with_capacity(header.pixel_count.min(INITIAL_PIXEL_CAPACITY));
    let mut chunk = vec![0u8; expected.min(BINARY_CHUNK)];
    let mut read = 0usize;

    while read < expected {
        stop.check()?;
        let want = (expected - read).min(chunk.len());
        let got = reader.read_raw(&mut chunk[..want])?;
        read += got;
        if got < want {
            return Err(PpmError::DataTruncated {
                expected,
                actual: read,
            });
        }
        if let Some(&value) = chunk[..want].iter().find(|&&s| s > max) {
            return Err(PpmError::ChannelRangeExceeded {
                value: u32::from(value),
                max: u32::from(max),
            });
        }
        pixels.extend(
            chunk[..want]
                .chunks_exact(3)
                .map(|s| Pixel::new(s[0], s[1], s[2])),
        );
    }

    if strict_trailing && reader.peek()?.is_some() {
        return Err(PpmError::DataOverflow);
    }
    Ok(pixels)
}
