use thiserror::Error;

/// Why a stream was rejected before any page was parsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormatViolation {
    /// The leading bytes do not match the lines-file signature
    BadSignature,
    /// The header declares zero pages
    ZeroPages,
}

impl std::fmt::Display for FormatViolation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FormatViolation::BadSignature => write!(f, "signature mismatch"),
            FormatViolation::ZeroPages => write!(f, "page count is zero"),
        }
    }
}

/// Universal error type for lines-file operations.
///
/// Decode failures are fatal and carry the byte offset at which they
/// occurred. Non-fatal deviations are reported as
/// [`Anomaly`](super::anomaly::Anomaly) values instead.
#[derive(Debug, Error)]
pub enum LinesError {
    /// The stream ended before a fixed-size field could be read.
    ///
    /// `offset` is where the field starts; the buffer ended at
    /// `offset + available`.
    #[error("truncated data at offset {offset}: needed {needed} bytes, {available} available")]
    Truncated {
        offset: usize,
        needed: usize,
        available: usize,
    },

    /// The header is not a valid lines-file header
    #[error("invalid lines file at offset {offset}: {reason}")]
    Format {
        offset: usize,
        reason: FormatViolation,
    },

    /// Writing serialized output failed
    #[error("write failed: {0}")]
    Io(#[from] std::io::Error),
}

impl LinesError {
    /// Returns the byte offset of a decode failure.
    pub fn offset(&self) -> Option<usize> {
        match self {
            LinesError::Truncated { offset, .. } | LinesError::Format { offset, .. } => {
                Some(*offset)
            }
            LinesError::Io(_) => None,
        }
    }

    /// True for [`LinesError::Truncated`].
    pub fn is_truncated(&self) -> bool {
        matches!(self, LinesError::Truncated { .. })
    }

    /// True for [`LinesError::Format`].
    pub fn is_format(&self) -> bool {
        matches!(self, LinesError::Format { .. })
    }
}

/// Result type alias for lines-file operations
pub type LinesResult<T> = Result<T, LinesError>;
