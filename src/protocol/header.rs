//! Outer frame header
//!
//! The header is 3 bytes: a little-endian total length (header included)
//! followed by the message type id.

use super::{Error, HEADER_SIZE, MAX_FRAME_SIZE, Result};

/// Frame header
///
/// # Wire Format
///
/// ```text
/// 0                   1                   2
/// 0 1 2 3 4 5 6 7 8 9 0 1 2 3 4 5 6 7 8 9 0 1 2 3
/// +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
/// |       Frame Length (2, LE)    |   Type ID     |
/// +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
/// |            Body (length - 3 bytes) ...
/// +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameHeader {
    length: u16,
    type_id: u8,
}

impl FrameHeader {
    /// Header for a body of `body_len` bytes
    pub fn for_body(type_id: u8, body_len: usize) -> Result<Self> {
        let size = HEADER_SIZE + body_len;
        let length = u16::try_from(size).map_err(|_| Error::FrameTooLarge {
            size,
            max: MAX_FRAME_SIZE,
        })?;
        Ok(Self { length, type_id })
    }

    /// Declared total length
    #[must_use]
    pub const fn length(&self) -> u16 {
        self.length
    }

    /// Message type id
    #[must_use]
    pub const fn type_id(&self) -> u8 {
        self.type_id
    }

    /// Body length implied by the declared length
    #[must_use]
    pub const fn body_len(&self) -> usize {
        (self.length as usize).saturating_sub(HEADER_SIZE)
    }

    /// Validate header
    pub fn validate(&self) -> Result<()> {
        if (self.length as usize) < HEADER_SIZE {
            return Err(Error::InvalidFrameLength {
                length: self.length,
                min: HEADER_SIZE,
            });
        }
        Ok(())
    }

    /// Convert to bytes (little-endian)
    #[must_use]
    pub fn to_bytes(&self) -> [u8; HEADER_SIZE] {
        let [lo, hi] = self.length.to_le_bytes();
        [lo, hi, self.type_id]
    }

    /// Parse from bytes (little-endian)
    ///
    /// Fewer than 3 bytes is [`Error::BufferTooSmall`]: the transport has not
    /// buffered a whole header yet.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        if bytes.len() < HEADER_SIZE {
            return Err(Error::BufferTooSmall {
                needed: HEADER_SIZE,
                got: bytes.len(),
            });
        }

        let header = Self {
            length: u16::from_le_bytes([bytes[0], bytes[1]]),
            type_id: bytes[2],
        };

        header.validate()?;
        Ok(header)
    }

    /// Declared length of the frame at the start of `bytes`, if the length
    /// field has arrived
    #[must_use]
    pub fn peek_length(bytes: &[u8]) -> Option<usize> {
        match bytes {
            [lo, hi, ..] => Some(usize::from(u16::from_le_bytes([*lo, *hi]))),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_roundtrip() {
        let header = FrameHeader::for_body(70, 3).unwrap();
        let bytes = header.to_bytes();
        assert_eq!(bytes, [6, 0, 70]);

        let decoded = FrameHeader::from_bytes(&bytes).unwrap();
        assert_eq!(decoded, header);
        assert_eq!(decoded.body_len(), 3);
    }

    #[test]
    fn test_max_frame() {
        let header = FrameHeader::for_body(1, MAX_FRAME_SIZE - HEADER_SIZE).unwrap();
        assert_eq!(header.length(), u16::MAX);

        let result = FrameHeader::for_body(1, MAX_FRAME_SIZE - HEADER_SIZE + 1);
        assert!(matches!(
            result,
            Err(Error::FrameTooLarge { size: 65_536, max: 65_535 })
        ));
    }

    #[test]
    fn test_length_shorter_than_header() {
        let result = FrameHeader::from_bytes(&[2, 0, 9]);
        assert!(matches!(result, Err(Error::InvalidFrameLength { length: 2, .. })));
    }

    #[test]
    fn test_incomplete_header() {
        let result = FrameHeader::from_bytes(&[6, 0]);
        assert!(matches!(result, Err(Error::BufferTooSmall { needed: 3, got: 2 })));
        assert_eq!(FrameHeader::peek_length(&[6, 0]), Some(6));
        assert_eq!(FrameHeader::peek_length(&[6]), None);
    }
}
