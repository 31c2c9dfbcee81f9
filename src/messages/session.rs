//! Connection lifecycle messages

use bytes::BytesMut;
use uuid::Uuid;

use crate::protocol::{Direction, Message, MessageType, NetworkText, Reader, Result, WireBody, WireWrite};

/// First frame a client sends, announcing its game version
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ConnectRequest {
    /// Version string, e.g. [`crate::PROTOCOL_VERSION`]
    pub version: String,
}

impl ConnectRequest {
    /// Request for `version`
    pub fn new(version: impl Into<String>) -> Self {
        Self {
            version: version.into(),
        }
    }
}

impl WireBody for ConnectRequest {
    fn decode_body(&mut self, reader: &mut Reader<'_>, _direction: Direction) -> Result<()> {
        self.version = reader.read_string()?;
        Ok(())
    }

    fn encode_body(&self, buf: &mut BytesMut, _direction: Direction) -> Result<()> {
        buf.put_string(&self.version)
    }
}

impl Message for ConnectRequest {
    const TYPE_ID: u8 = MessageType::ConnectRequest.as_u8();
}

/// Server closing the connection
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Disconnect {
    /// Reason shown to the player
    pub reason: NetworkText,
}

impl Disconnect {
    /// Disconnect with `reason`
    pub fn new(reason: impl Into<NetworkText>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}

impl WireBody for Disconnect {
    fn decode_body(&mut self, reader: &mut Reader<'_>, _direction: Direction) -> Result<()> {
        self.reason = NetworkText::decode(reader)?;
        Ok(())
    }

    fn encode_body(&self, buf: &mut BytesMut, _direction: Direction) -> Result<()> {
        self.reason.encode(buf)
    }
}

impl Message for Disconnect {
    const TYPE_ID: u8 = MessageType::Disconnect.as_u8();
}

/// Client-chosen identifier.
///
/// Clients send free-form text here; it is kept as-is so the frame
/// re-encodes identically, and [`parsed`](Self::parsed) interprets it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ClientUuid {
    /// Identifier as sent
    pub uuid: String,
}

impl ClientUuid {
    /// Identifier in hyphenated form
    #[must_use]
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self {
            uuid: uuid.hyphenated().to_string(),
        }
    }

    /// The identifier, if it is a well-formed UUID
    #[must_use]
    pub fn parsed(&self) -> Option<Uuid> {
        Uuid::parse_str(&self.uuid).ok()
    }
}

impl WireBody for ClientUuid {
    fn decode_body(&mut self, reader: &mut Reader<'_>, _direction: Direction) -> Result<()> {
        self.uuid = reader.read_string()?;
        Ok(())
    }

    fn encode_body(&self, buf: &mut BytesMut, _direction: Direction) -> Result<()> {
        buf.put_string(&self.uuid)
    }
}

impl Message for ClientUuid {
    const TYPE_ID: u8 = MessageType::ClientUuid.as_u8();
}
