//! Codec error types

use thiserror::Error;

/// Wire codec errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Buffer ended before a value could be read
    #[error("buffer too small: need {needed} bytes, got {got}")]
    BufferTooSmall {
        /// Needed size
        needed: usize,
        /// Actual size
        got: usize,
    },

    /// Declared frame length is shorter than the frame header
    #[error("invalid frame length {length}: shorter than the {min}-byte header")]
    InvalidFrameLength {
        /// Declared length
        length: u16,
        /// Minimum valid length
        min: usize,
    },

    /// Encoded frame does not fit the 16-bit length field
    #[error("frame too large: {size} bytes (max {max})")]
    FrameTooLarge {
        /// Frame size including header
        size: usize,
        /// Maximum allowed
        max: usize,
    },

    /// Message body consumed a different number of bytes than declared
    #[error("length mismatch for message type {type_id}: declared {declared} body bytes, consumed {consumed}")]
    LengthMismatch {
        /// Outer message type id
        type_id: u8,
        /// Body length from the frame header
        declared: usize,
        /// Bytes the message codec read
        consumed: usize,
    },

    /// Module body consumed a different number of bytes than the enclosing frame left
    #[error("length mismatch for module type {module_id}: declared {declared} body bytes, consumed {consumed}")]
    ModuleLengthMismatch {
        /// Module type id
        module_id: u16,
        /// Module body length implied by the enclosing frame
        declared: usize,
        /// Bytes the module codec read
        consumed: usize,
    },

    /// Bytes left over after a single-frame decode
    #[error("{extra} trailing bytes after frame")]
    TrailingBytes {
        /// Number of unread bytes
        extra: usize,
    },

    /// Network text nested deeper than the codec allows
    #[error("network text nested deeper than {max} levels")]
    TextTooDeep {
        /// Maximum nesting depth
        max: usize,
    },

    /// Unknown network text mode byte
    #[error("invalid network text mode: {mode:#x}")]
    InvalidTextMode {
        /// Mode byte found on the wire
        mode: u8,
    },

    /// Network text has more substitutions than the count byte can carry
    #[error("too many substitutions: {count} (max 255)")]
    TooManySubstitutions {
        /// Number of substitutions
        count: usize,
    },

    /// Variable-length prefix does not fit in 32 bits
    #[error("variable-length integer overflows u32")]
    VarintOverflow,

    /// String is too long for its length prefix
    #[error("string too long: {len} bytes")]
    StringTooLong {
        /// String length in bytes
        len: usize,
    },

    /// Invalid UTF-8
    #[error("invalid UTF-8: {0}")]
    InvalidUtf8(#[from] std::str::Utf8Error),
}

impl Error {
    /// Whether the error means the input ran out before a value was complete.
    ///
    /// Malformed recursive text is reported through the same category.
    #[must_use]
    pub const fn is_underflow(&self) -> bool {
        matches!(self, Self::BufferTooSmall { .. } | Self::TextTooDeep { .. })
    }

    /// Whether the stream this error came from can no longer be trusted.
    ///
    /// Only encode-side errors leave the peer's stream intact.
    #[must_use]
    pub const fn is_desync(&self) -> bool {
        !matches!(
            self,
            Self::FrameTooLarge { .. } | Self::TooManySubstitutions { .. } | Self::StringTooLong { .. }
        )
    }
}

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;
