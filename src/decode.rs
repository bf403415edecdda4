use std::io::BufRead;

use enough::Stop;

use crate::error::PpmError;
use crate::image::Image;
use crate::limits::Limits;
use crate::ppm::{self, ByteReader};

/// Decode request builder.
///
/// The reader is consumed up to the end of the payload. For text images that
/// means the end of the stream, since trailing data is rejected; binary
/// images stop right after the last pixel byte unless
/// [`strict_trailing`](Self::strict_trailing) is enabled.
pub struct DecodeRequest<'a, R> {
    reader: R,
    limits: Option<&'a Limits>,
    strict_trailing: bool,
}

impl<'a, R: BufRead> DecodeRequest<'a, R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            limits: None,
            strict_trailing: false,
        }
    }

    /// Reject headers that exceed `limits` before any pixel storage is allocated.
    pub fn with_limits(mut self, limits: &'a Limits) -> Self {
        self.limits = Some(limits);
        self
    }

    /// Extension: also fail binary (P6) decodes with
    /// [`PpmError::DataOverflow`] when bytes follow the payload.
    ///
    /// Off by default; text (P3) payloads are always checked.
    pub fn strict_trailing(mut self, strict: bool) -> Self {
        self.strict_trailing = strict;
        self
    }

    pub fn decode(self, stop: impl Stop) -> Result<Image, PpmError> {
        let mut reader = ByteReader::new(self.reader);
        ppm::decode(&mut reader, self.limits, self.strict_trailing, &stop)
    }
}
