//! Pass-through values for ids this crate does not understand

use bytes::{BufMut, Bytes, BytesMut};

use crate::protocol::{Direction, Reader, Result, WireBody};

/// Outer message with an unregistered type id.
///
/// The body is kept verbatim so that the frame can be forwarded or re-encoded
/// byte-for-byte.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct UnknownMessage {
    /// Type id from the frame header
    pub type_id: u8,
    /// Uninterpreted body
    pub payload: Bytes,
}

impl UnknownMessage {
    /// Create from a type id and raw body
    pub fn new(type_id: u8, payload: impl Into<Bytes>) -> Self {
        Self {
            type_id,
            payload: payload.into(),
        }
    }
}

impl WireBody for UnknownMessage {
    fn decode_body(&mut self, reader: &mut Reader<'_>, _direction: Direction) -> Result<()> {
        self.payload = Bytes::copy_from_slice(reader.read_rest());
        Ok(())
    }

    fn encode_body(&self, buf: &mut BytesMut, _direction: Direction) -> Result<()> {
        buf.put_slice(&self.payload);
        Ok(())
    }
}

/// Module with an unregistered module id
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct UnknownModule {
    /// Module id from the module header
    pub module_id: u16,
    /// Uninterpreted module body
    pub payload: Bytes,
}

impl UnknownModule {
    /// Create from a module id and raw body
    pub fn new(module_id: u16, payload: impl Into<Bytes>) -> Self {
        Self {
            module_id,
            payload: payload.into(),
        }
    }
}

impl WireBody for UnknownModule {
    fn decode_body(&mut self, reader: &mut Reader<'_>, _direction: Direction) -> Result<()> {
        self.payload = Bytes::copy_from_slice(reader.read_rest());
        Ok(())
    }

    fn encode_body(&self, buf: &mut BytesMut, _direction: Direction) -> Result<()> {
        buf.put_slice(&self.payload);
        Ok(())
    }
}
