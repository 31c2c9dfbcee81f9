//! Chat module

use bytes::{BufMut, BytesMut};

use crate::protocol::{
    Color, Direction, Module, ModuleType, NetworkText, Reader, Result, WireBody, WireWrite,
};

/// Chat traffic.
///
/// The two directions carry different fields:
///
/// ```text
/// ServerBound: [command: string][text: string]
/// ClientBound: [author u8][message: NetworkText][color: Color]
/// ```
///
/// Fields of the other direction are left at their defaults on read and are
/// not written.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TextModule {
    /// Chat command id, e.g. `"Say"` (server-bound)
    pub command: String,
    /// Text typed by the player (server-bound)
    pub text: String,
    /// Author slot, [`TextModule::SERVER_AUTHOR`] for server messages (client-bound)
    pub author: u8,
    /// Rendered message (client-bound)
    pub message: NetworkText,
    /// Message color (client-bound)
    pub color: Color,
}

impl TextModule {
    /// Author slot used for messages that did not come from a player
    pub const SERVER_AUTHOR: u8 = 255;

    /// Player chat line as sent by a client
    pub fn chat(command: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            command: command.into(),
            text: text.into(),
            ..Self::default()
        }
    }

    /// Broadcast line as sent by the server
    pub fn broadcast(author: u8, message: impl Into<NetworkText>, color: Color) -> Self {
        Self {
            author,
            message: message.into(),
            color,
            ..Self::default()
        }
    }
}

impl Default for TextModule {
    fn default() -> Self {
        Self {
            command: String::new(),
            text: String::new(),
            author: Self::SERVER_AUTHOR,
            message: NetworkText::EMPTY,
            color: Color::WHITE,
        }
    }
}

impl WireBody for TextModule {
    fn decode_body(&mut self, reader: &mut Reader<'_>, direction: Direction) -> Result<()> {
        match direction {
            Direction::ServerBound => {
                self.command = reader.read_string()?;
                self.text = reader.read_string()?;
            }
            Direction::ClientBound => {
                self.author = reader.read_u8()?;
                self.message = NetworkText::decode(reader)?;
                self.color = reader.read_color()?;
            }
        }
        Ok(())
    }

    fn encode_body(&self, buf: &mut BytesMut, direction: Direction) -> Result<()> {
        match direction {
            Direction::ServerBound => {
                buf.put_string(&self.command)?;
                buf.put_string(&self.text)?;
            }
            Direction::ClientBound => {
                buf.put_u8(self.author);
                self.message.encode(buf)?;
                buf.put_color(self.color);
            }
        }
        Ok(())
    }
}

impl Module for TextModule {
    const TYPE_ID: u16 = ModuleType::Text.as_u16();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_server_bound_layout() {
        let mut buf = BytesMut::new();
        TextModule::chat("c", "hi")
            .write(&mut buf, Direction::ServerBound)
            .unwrap();
        assert_eq!(&buf[..], &[1, b'c', 2, b'h', b'i']);
    }

    #[test]
    fn test_client_bound_roundtrip() {
        let original = TextModule::broadcast(
            3,
            NetworkText::formatted("<{0}> {1}", vec!["Ann".into(), "hello".into()]),
            Color::new(200, 200, 255),
        );
        let mut buf = BytesMut::new();
        let written = original.write(&mut buf, Direction::ClientBound).unwrap();

        let (decoded, consumed) = TextModule::read_new(&buf, Direction::ClientBound).unwrap();
        assert_eq!(consumed, written);
        assert_eq!(decoded, original);
        assert_eq!(decoded.message.to_string(), "<Ann> hello");
    }

    #[test]
    fn test_other_direction_fields_not_written() {
        let mut both = TextModule::chat("Say", "hey");
        both.author = 9;
        both.message = NetworkText::literal("ignored");

        let mut buf = BytesMut::new();
        both.write(&mut buf, Direction::ServerBound).unwrap();
        let (decoded, _) = TextModule::read_new(&buf, Direction::ServerBound).unwrap();
        assert_eq!(decoded, TextModule::chat("Say", "hey"));
    }
}
