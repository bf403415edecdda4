use rgb::ComponentBytes as _;

use crate::error::PpmError;
use crate::pixel::{Pixel, PpmEncoding};

/// A fully decoded RGB image.
///
/// Every constructed `Image` satisfies:
/// - `width > 0` and `height > 0`
/// - `max_value` is in `1..=255`
/// - `pixels().len() == width * height`, in row-major order
/// - every channel sample is `<= max_value`
///
/// Equality compares the raster (dimensions, `max_value` and pixels). The
/// encoding an image was decoded from is provenance and does not take part.
#[derive(Clone, Debug)]
pub struct Image {
    encoding: PpmEncoding,
    width: u32,
    height: u32,
    max_value: u8,
    pixels: Vec<Pixel>,
}

impl Image {
    /// Build an image from owned pixels, checking every invariant.
    pub fn new(
        encoding: PpmEncoding,
        width: u32,
        height: u32,
        max_value: u8,
        pixels: Vec<Pixel>,
    ) -> Result<Self, PpmError> {
        if max_value == 0 {
            return Err(PpmError::ChannelRangeExceeded {
                value: 0,
                max: u32::from(u8::MAX),
            });
        }
        if width == 0 || height == 0 {
            return Err(PpmError::HeaderMalformed(format!(
                "image dimensions must be positive, got {width}x{height}"
            )));
        }
        let expected = (width as usize)
            .checked_mul(height as usize)
            .filter(|px| px.checked_mul(3).is_some())
            .ok_or(PpmError::DimensionsTooLarge { width, height })?;
        if pixels.len() != expected {
            return Err(PpmError::InvalidData(format!(
                "{width}x{height} image needs {expected} pixels, got {}",
                pixels.len()
            )));
        }
        if let Some(value) = pixels
            .as_bytes()
            .iter()
            .copied()
            .find(|&s| s > max_value)
        {
            return Err(PpmError::ChannelRangeExceeded {
                value: u32::from(value),
                max: u32::from(max_value),
            });
        }
        Ok(Self::from_parts(encoding, width, height, max_value, pixels))
    }

    /// Assemble a decoded image. Callers have already enforced the invariants.
    pub(crate) fn from_parts(
        encoding: PpmEncoding,
        width: u32,
        height: u32,
        max_value: u8,
        pixels: Vec<Pixel>,
    ) -> Self {
        debug_assert_eq!(pixels.len(), width as usize * height as usize);
        Self {
            encoding,
            width,
            height,
            max_value,
            pixels,
        }
    }

    /// Encoding of the payload this image was decoded from.
    pub fn encoding(&self) -> PpmEncoding {
        self.encoding
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn max_value(&self) -> u8 {
        self.max_value
    }

    /// Pixels in raster scan order.
    pub fn pixels(&self) -> &[Pixel] {
        &self.pixels
    }

    /// The same pixels as packed `R, G, B, R, G, B, ...` bytes.
    pub fn as_bytes(&self) -> &[u8] {
        self.pixels.as_bytes()
    }

    /// Pixel at column `x`, row `y`.
    pub fn pixel(&self, x: u32, y: u32) -> Option<Pixel> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.pixels
            .get(y as usize * self.width as usize + x as usize)
            .copied()
    }

    /// Iterate over rows, top to bottom.
    pub fn rows(&self) -> impl ExactSizeIterator<Item = &[Pixel]> + '_ {
        self.pixels.chunks_exact(self.width as usize)
    }

    /// Take ownership of the pixel buffer.
    pub fn into_pixels(self) -> Vec<Pixel> {
        self.pixels
    }

    /// Borrow the pixels as an [`imgref::ImgRef`].
    #[cfg(feature = "imgref")]
    pub fn as_imgref(&self) -> imgref::ImgRef<'_, Pixel> {
        imgref::ImgRef::new(&self.pixels, self.width as usize, self.height as usize)
    }

    /// Convert into an [`imgref::ImgVec`] without copying.
    #[cfg(feature = "imgref")]
    pub fn into_imgvec(self) -> imgref::ImgVec<Pixel> {
        imgref::ImgVec::new(self.pixels, self.width as usize, self.height as usize)
    }
}

impl PartialEq for Image {
    fn eq(&self, other: &Self) -> bool {
        self.width == other.width
            && self.height == other.height
            && self.max_value == other.max_value
            && self.pixels == other.pixels
    }
}

impl Eq for Image {}
