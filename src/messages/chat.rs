//! Server-side text output

use bytes::{BufMut, BytesMut};

use crate::protocol::{
    Color, Direction, Message, MessageType, NetworkText, Reader, Result, WireBody, WireWrite,
};

/// Colored status text wrapped at `max_width` pixels.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SmartTextMessage {
    /// Text color
    pub color: Color,
    /// Message
    pub text: NetworkText,
    /// Wrap width in pixels, `-1` for the client default
    pub max_width: i16,
}

impl SmartTextMessage {
    /// Message with the default wrap width
    pub fn new(color: Color, text: impl Into<NetworkText>) -> Self {
        Self {
            color,
            text: text.into(),
            max_width: -1,
        }
    }
}

impl Default for SmartTextMessage {
    fn default() -> Self {
        Self::new(Color::WHITE, NetworkText::EMPTY)
    }
}

impl WireBody for SmartTextMessage {
    fn decode_body(&mut self, reader: &mut Reader<'_>, _direction: Direction) -> Result<()> {
        self.color = reader.read_color()?;
        self.text = NetworkText::decode(reader)?;
        self.max_width = reader.read_i16()?;
        Ok(())
    }

    fn encode_body(&self, buf: &mut BytesMut, _direction: Direction) -> Result<()> {
        buf.put_color(self.color);
        self.text.encode(buf)?;
        buf.put_i16_le(self.max_width);
        Ok(())
    }
}

impl Message for SmartTextMessage {
    const TYPE_ID: u8 = MessageType::SmartTextMessage.as_u8();
}
