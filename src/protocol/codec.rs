//! Frame codec (encode/decode)
//!
//! # Format
//!
//! ```text
//! [length u16 LE][type_id u8][body (length - 3 bytes)]
//! ```
//!
//! `length` counts the whole frame including the header. The body is decoded
//! by the message registered for `type_id` and must be consumed exactly.

use std::iter::FusedIterator;

use bytes::{BufMut, Bytes, BytesMut};
use tracing::{error, instrument, trace};

use super::{Direction, Error, FrameHeader, HEADER_SIZE, Result};
use crate::messages::Packet;

/// Encode `packet` as one complete frame
pub fn encode(packet: &Packet, direction: Direction) -> Result<Bytes> {
    let mut buf = BytesMut::with_capacity(64);
    encode_into(packet, direction, &mut buf)?;
    Ok(buf.freeze())
}

/// Append one complete frame to `buf`, returning the frame length.
///
/// The length field is reserved up front and patched once the body size is
/// known. On error `buf` is restored to its previous length.
pub fn encode_into(packet: &Packet, direction: Direction, buf: &mut BytesMut) -> Result<usize> {
    let start = buf.len();
    let type_id = packet.type_id();
    buf.put_u16_le(0);
    buf.put_u8(type_id);

    let header = packet
        .write_body(buf, direction)
        .and_then(|body_len| FrameHeader::for_body(type_id, body_len));
    let header = match header {
        Ok(header) => header,
        Err(err) => {
            buf.truncate(start);
            return Err(err);
        }
    };

    buf[start..start + 2].copy_from_slice(&header.length().to_le_bytes());
    trace!(type_id, length = header.length(), %direction, "encoded frame");
    Ok(usize::from(header.length()))
}

/// Decode the frame at the start of `bytes`, returning the packet and the
/// number of bytes it occupied. Bytes after the frame are ignored.
#[instrument(level = "trace", skip(bytes), fields(available = bytes.len()))]
pub fn decode_frame(bytes: &[u8], direction: Direction) -> Result<(Packet, usize)> {
    let header = FrameHeader::from_bytes(bytes)?;
    let length = usize::from(header.length());
    if bytes.len() < length {
        return Err(Error::BufferTooSmall {
            needed: length,
            got: bytes.len(),
        });
    }

    let type_id = header.type_id();
    let body = &bytes[HEADER_SIZE..length];
    let (packet, consumed) = Packet::read_body(type_id, body, direction)?;
    if consumed != body.len() {
        error!(
            type_id,
            declared = body.len(),
            consumed,
            "message body length mismatch"
        );
        return Err(Error::LengthMismatch {
            type_id,
            declared: body.len(),
            consumed,
        });
    }

    trace!(type_id, length, "decoded frame");
    Ok((packet, length))
}

/// Decode exactly one frame; leftover bytes are [`Error::TrailingBytes`]
pub fn decode(bytes: &[u8], direction: Direction) -> Result<Packet> {
    let (packet, used) = decode_frame(bytes, direction)?;
    if used != bytes.len() {
        return Err(Error::TrailingBytes {
            extra: bytes.len() - used,
        });
    }
    Ok(packet)
}

/// Declared length of the frame at the start of `bytes`, once the length
/// field has arrived.
#[must_use]
pub fn frame_len(bytes: &[u8]) -> Option<usize> {
    FrameHeader::peek_length(bytes)
}

/// Iterator over the complete frames at the front of a byte stream.
///
/// Stops without error at an incomplete trailing frame, which stays available
/// through [`Frames::remainder`]. After the first error the iterator is
/// exhausted, since the stream position is no longer trustworthy.
#[derive(Debug, Clone)]
pub struct Frames<'a> {
    bytes: &'a [u8],
    direction: Direction,
    done: bool,
}

impl<'a> Frames<'a> {
    /// Iterate over frames in `bytes`, decoded for `direction`
    #[must_use]
    pub const fn new(bytes: &'a [u8], direction: Direction) -> Self {
        Self {
            bytes,
            direction,
            done: false,
        }
    }

    /// Bytes not yet consumed by a successfully decoded frame
    #[must_use]
    pub const fn remainder(&self) -> &'a [u8] {
        self.bytes
    }
}

impl Iterator for Frames<'_> {
    type Item = Result<Packet>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        let len = frame_len(self.bytes)?;
        if self.bytes.len() < len.max(HEADER_SIZE) {
            return None;
        }

        match decode_frame(self.bytes, self.direction) {
            Ok((packet, used)) => {
                self.bytes = &self.bytes[used..];
                Some(Ok(packet))
            }
            Err(err) => {
                self.done = true;
                Some(Err(err))
            }
        }
    }
}

impl FusedIterator for Frames<'_> {}
