/// One RGB sample triple, 8 bits per channel.
pub type Pixel = rgb::RGB8;

/// PPM payload encoding.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PpmEncoding {
    /// P3: whitespace-separated decimal samples.
    Text,
    /// P6: packed raw bytes, one per sample.
    Binary,
}

impl PpmEncoding {
    /// The format tag written at the top of the header.
    pub fn tag(self) -> &'static str {
        match self {
            Self::Text => "P3",
            Self::Binary => "P6",
        }
    }

    /// Map a header tag to an encoding. Only `P3` and `P6` are recognized.
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "P3" => Some(Self::Text),
            "P6" => Some(Self::Binary),
            _ => None,
        }
    }
}

impl core::fmt::Display for PpmEncoding {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.tag())
    }
}
