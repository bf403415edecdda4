//! Header tokenizer: `tag width height maxval`, with `#` comments allowed
//! between any two tokens.

use std::io::BufRead;

use log::{debug, trace};

use super::reader::ByteReader;
use crate::error::PpmError;

/// Longest header token accepted.
pub(crate) const MAX_TOKEN_LEN: usize = 64;

/// Header fields exactly as read, before validation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct RawHeader {
    pub tag: String,
    pub width: u32,
    pub height: u32,
    /// Saturates at `u32::MAX` for oversized values; the validator rejects those.
    pub max_value: u32,
}

/// Read the four header tokens and the single separator byte after them.
///
/// On success the reader is positioned at the first payload byte.
pub(crate) fn parse_header<R: BufRead>(reader: &mut ByteReader<R>) -> Result<RawHeader, PpmError> {
    let mut token = Vec::with_capacity(MAX_TOKEN_LEN + 1);

    next_token(reader, &mut token, "format tag")?;
    let tag = String::from_utf8_lossy(&token).into_owned();

    next_token(reader, &mut token, "width")?;
    let width = dimension(&token, "width")?;

    next_token(reader, &mut token, "height")?;
    let height = dimension(&token, "height")?;

    // The delimiter consumed with this token is the payload separator.
    next_token(reader, &mut token, "max value")?;
    let max_value = parse_decimal(&token)
        .map(|v| u32::try_from(v).unwrap_or(u32::MAX))
        .ok_or_else(|| malformed("max value", &token))?;

    debug!("PPM header: tag {tag:?}, {width}x{height}, max value {max_value}");

    Ok(RawHeader {
        tag,
        width,
        height,
        max_value,
    })
}

/// Fill `token` with the next non-comment header token.
fn next_token<R: BufRead>(
    reader: &mut ByteReader<R>,
    token: &mut Vec<u8>,
    what: &str,
) -> Result<(), PpmError> {
    loop {
        reader.skip_whitespace()?;
        match reader.peek()? {
            None => return Err(PpmError::HeaderTruncated),
            Some(b'#') => {
                trace!("skipping comment before {what}");
                reader.skip_line()?;
            }
            Some(_) => {
                reader.read_token(token, MAX_TOKEN_LEN)?;
                if token.len() > MAX_TOKEN_LEN {
                    return Err(PpmError::HeaderMalformed(format!(
                        "{what} token is longer than {MAX_TOKEN_LEN} bytes"
                    )));
                }
                return Ok(());
            }
        }
    }
}

fn dimension(token: &[u8], what: &str) -> Result<u32, PpmError> {
    parse_decimal(token)
        .and_then(|v| u32::try_from(v).ok())
        .ok_or_else(|| malformed(what, token))
}

/// Unsigned decimal with no sign or radix prefix. Saturates at `u64::MAX`.
fn parse_decimal(token: &[u8]) -> Option<u64> {
    if token.is_empty() || !token.iter().all(u8::is_ascii_digit) {
        return None;
    }
    Some(token.iter().fold(0u64, |acc, &d| {
        acc.saturating_mul(10).saturating_add(u64::from(d - b'0'))
    }))
}

fn malformed(what: &str, token: &[u8]) -> PpmError {
    PpmError::HeaderMalformed(format!(
        "{what} {:?} is not a non-negative integer",
        String::from_utf8_lossy(token)
    ))
}
