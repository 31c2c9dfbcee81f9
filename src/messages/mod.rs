//! Message registry
//!
//! [`Packet`] is the closed set of outer messages the codec understands, plus
//! [`Packet::Unknown`] for everything else. Dispatch is a `match` on the type
//! id; there is no runtime registration.

mod chat;
mod item;
mod net_module;
mod player;
mod session;
mod unknown;

pub mod modules;

pub use chat::SmartTextMessage;
pub use item::TweakItem;
pub use modules::{NetModule, PingModule, TextModule};
pub use net_module::LoadNetModule;
pub use player::{CatchNpc, SpawnPlayer};
pub use session::{ClientUuid, ConnectRequest, Disconnect};
pub use unknown::{UnknownMessage, UnknownModule};

use bytes::{Bytes, BytesMut};
use tracing::debug;

use crate::protocol::{self, Direction, Message, MessageType, Result, WireBody};

/// Generates the registry enum together with its id lookup, dispatch and
/// `From` conversions, so adding a message is a single line.
macro_rules! packets {
    ($($variant:ident($ty:ty)),+ $(,)?) => {
        /// Every outer message known to the codec
        #[derive(Debug, Clone, PartialEq)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        pub enum Packet {
            $(
                #[allow(missing_docs)]
                $variant($ty),
            )+
            /// Unregistered type id, body kept verbatim
            Unknown(UnknownMessage),
        }

        impl Packet {
            /// Type id written in the frame header
            #[must_use]
            pub fn type_id(&self) -> u8 {
                match self {
                    $(Self::$variant(_) => <$ty as Message>::TYPE_ID,)+
                    Self::Unknown(msg) => msg.type_id,
                }
            }

            /// Decode a frame body for `type_id`, returning the bytes consumed.
            ///
            /// The caller compares the count against the frame's declared body
            /// length.
            pub fn read_body(type_id: u8, body: &[u8], direction: Direction) -> Result<(Self, usize)> {
                $(
                    if type_id == <$ty as Message>::TYPE_ID {
                        return <$ty>::read_new(body, direction).map(|(m, n)| (Self::$variant(m), n));
                    }
                )+
                debug!(type_id, len = body.len(), "passing through unknown message");
                let (msg, consumed) = UnknownMessage::read_new(body, direction)?;
                Ok((Self::Unknown(UnknownMessage { type_id, ..msg }), consumed))
            }

            /// Append the frame body (no header) to `buf`, returning its length
            pub fn write_body(&self, buf: &mut BytesMut, direction: Direction) -> Result<usize> {
                match self {
                    $(Self::$variant(msg) => msg.write(buf, direction),)+
                    Self::Unknown(msg) => msg.write(buf, direction),
                }
            }
        }

        $(
            impl From<$ty> for Packet {
                fn from(msg: $ty) -> Self {
                    Self::$variant(msg)
                }
            }
        )+
    };
}

packets! {
    ConnectRequest(ConnectRequest),
    Disconnect(Disconnect),
    SpawnPlayer(SpawnPlayer),
    ClientUuid(ClientUuid),
    CatchNpc(CatchNpc),
    LoadNetModule(LoadNetModule),
    TweakItem(TweakItem),
    SmartTextMessage(SmartTextMessage),
}

impl Packet {
    /// Known message type, `None` for [`Packet::Unknown`]
    #[must_use]
    pub fn message_type(&self) -> Option<MessageType> {
        MessageType::from_u8(self.type_id())
    }

    /// Whether this packet was not recognized on decode
    #[must_use]
    pub const fn is_unknown(&self) -> bool {
        matches!(self, Self::Unknown(_))
    }

    /// Encode as a complete frame
    pub fn encode(&self, direction: Direction) -> Result<Bytes> {
        protocol::encode(self, direction)
    }

    /// Decode exactly one complete frame
    pub fn decode(bytes: &[u8], direction: Direction) -> Result<Self> {
        protocol::decode(bytes, direction)
    }
}

impl From<UnknownMessage> for Packet {
    fn from(msg: UnknownMessage) -> Self {
        Self::Unknown(msg)
    }
}
