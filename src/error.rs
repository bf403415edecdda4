use enough::StopReason;

/// Errors from PPM decoding and encoding.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum PpmError {
    #[error("unexpected end of input while reading header")]
    HeaderTruncated,

    #[error("malformed header: {0}")]
    HeaderMalformed(String),

    #[error("channel value {value} out of range (maximum {max})")]
    ChannelRangeExceeded { value: u32, max: u32 },

    #[error("unrecognized format tag {0:?}")]
    UnrecognizedFormatTag(String),

    /// Counts are channel samples (bytes, for the binary variant).
    #[error("image data truncated: expected {expected} samples, found {actual}")]
    DataTruncated { expected: usize, actual: usize },

    #[error("image data continues past the declared pixel count")]
    DataOverflow,

    #[error("invalid pixel data: {0}")]
    InvalidData(String),

    #[error("dimensions too large: {width}x{height}")]
    DimensionsTooLarge { width: u32, height: u32 },

    #[error("limit exceeded: {0}")]
    LimitExceeded(String),

    #[error("output accepted {written} of {requested} bytes")]
    WriteIncomplete { written: usize, requested: usize },

    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    #[error("operation cancelled")]
    Cancelled(StopReason),
}

impl From<StopReason> for PpmError {
    fn from(r: StopReason) -> Self {
        PpmError::Cancelled(r)
    }
}
