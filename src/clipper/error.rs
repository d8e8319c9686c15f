use thiserror::Error;

/// Errors raised while decoding operation options or packing and unpacking
/// path buffers.
///
/// Sweep failures are not represented here; `execute` reports them through its
/// boolean result.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClipperError {
    #[error("invalid clip type: {0}")]
    InvalidClipType(u8),

    #[error("invalid fill rule: {0}")]
    InvalidFillRule(u8),

    #[error("invalid poly type: {0}")]
    InvalidPolyType(u8),

    #[error("malformed path buffer: {reason} (length {len})")]
    MalformedBuffer { reason: &'static str, len: usize },

    #[error("value {0} does not fit in a packed i32 buffer")]
    CoordinateOutOfRange(i64),
}

pub type ClipperResult<T> = Result<T, ClipperError>;
