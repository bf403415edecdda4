use crate::error::PpmError;

/// Resource ceilings applied to a header before any pixel storage exists.
///
/// All fields default to `None` (no limit).
#[derive(Clone, Debug, Default)]
pub struct Limits {
    pub max_width: Option<u64>,
    pub max_height: Option<u64>,
    /// Maximum pixel count (width * height).
    pub max_pixels: Option<u64>,
    /// Maximum size in bytes of the decoded pixel buffer.
    pub max_memory_bytes: Option<u64>,
}

impl Limits {
    pub fn with_max_width(mut self, width: u64) -> Self {
        self.max_width = Some(width);
        self
    }

    pub fn with_max_height(mut self, height: u64) -> Self {
        self.max_height = Some(height);
        self
    }

    pub fn with_max_pixels(mut self, pixels: u64) -> Self {
        self.max_pixels = Some(pixels);
        self
    }

    pub fn with_max_memory_bytes(mut self, bytes: u64) -> Self {
        self.max_memory_bytes = Some(bytes);
        self
    }

    /// Check a validated header's dimensions and buffer size.
    pub(crate) fn check(&self, width: u32, height: u32, buffer_bytes: usize) -> Result<(), PpmError> {
        let pixels = u64::from(width) * u64::from(height);
        let checks = [
            ("width", u64::from(width), self.max_width),
            ("height", u64::from(height), self.max_height),
            ("pixel count", pixels, self.max_pixels),
            ("pixel buffer bytes", buffer_bytes as u64, self.max_memory_bytes),
        ];
        for (what, value, limit) in checks {
            if let Some(limit) = limit {
                if value > limit {
                    return Err(PpmError::LimitExceeded(format!(
                        "{what} {value} exceeds limit {limit}"
                    )));
                }
            }
        }
        Ok(())
    }
}
