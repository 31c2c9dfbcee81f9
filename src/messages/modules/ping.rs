//! Map ping module

use bytes::BytesMut;

use crate::protocol::{Direction, Module, ModuleType, Reader, Result, Vector2, WireBody, WireWrite};

/// Ping marker placed on the world map, in tile coordinates
#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PingModule {
    /// Marker position
    pub position: Vector2,
}

impl WireBody for PingModule {
    fn decode_body(&mut self, reader: &mut Reader<'_>, _direction: Direction) -> Result<()> {
        self.position = reader.read_vector2()?;
        Ok(())
    }

    fn encode_body(&self, buf: &mut BytesMut, _direction: Direction) -> Result<()> {
        buf.put_vector2(self.position);
        Ok(())
    }
}

impl Module for PingModule {
    const TYPE_ID: u16 = ModuleType::Ping.as_u16();
}
