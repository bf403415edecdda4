use std::io::BufRead;

use crate::error::PpmError;
use crate::image::Image;
use crate::limits::Limits;
use crate::pixel::PpmEncoding;
use crate::ppm::{self, ByteReader};

/// Image metadata from a validated header.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ImageInfo {
    pub encoding: PpmEncoding,
    pub width: u32,
    pub height: u32,
    pub max_value: u8,
}

impl ImageInfo {
    /// Read and validate a header without decoding pixels.
    pub fn from_reader<R: BufRead>(reader: R) -> Result<Self, PpmError> {
        Self::from_reader_with_limits(reader, None)
    }

    pub fn from_reader_with_limits<R: BufRead>(
        reader: R,
        limits: Option<&Limits>,
    ) -> Result<Self, PpmError> {
        let header = ppm::read_header(&mut ByteReader::new(reader), limits)?;
        Ok(Self {
            encoding: header.encoding,
            width: header.width,
            height: header.height,
            max_value: header.max_value,
        })
    }

    pub fn from_bytes(data: &[u8]) -> Result<Self, PpmError> {
        Self::from_reader(data)
    }

    /// `width * height`.
    pub fn pixel_count(&self) -> u64 {
        u64::from(self.width) * u64::from(self.height)
    }
}

impl From<&Image> for ImageInfo {
    fn from(image: &Image) -> Self {
        Self {
            encoding: image.encoding(),
            width: image.width(),
            height: image.height(),
            max_value: image.max_value(),
        }
    }
}
