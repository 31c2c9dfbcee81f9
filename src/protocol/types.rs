//! Message ids, module ids and flow direction

use std::fmt;

/// Flow direction of a frame.
///
/// Several message types carry fields that only exist in one direction, so
/// the same id can have two layouts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    /// Client to server
    ServerBound,
    /// Server to client
    ClientBound,
}

impl Direction {
    /// The opposite direction
    #[must_use]
    pub const fn reverse(self) -> Self {
        match self {
            Self::ServerBound => Self::ClientBound,
            Self::ClientBound => Self::ServerBound,
        }
    }

    /// Check if this is the client-to-server layout
    #[must_use]
    pub const fn is_server_bound(self) -> bool {
        matches!(self, Self::ServerBound)
    }

    /// Check if this is the server-to-client layout
    #[must_use]
    pub const fn is_client_bound(self) -> bool {
        matches!(self, Self::ClientBound)
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ServerBound => write!(f, "ServerBound"),
            Self::ClientBound => write!(f, "ClientBound"),
        }
    }
}

/// Local endpoint of a connection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Role {
    /// Game client
    Client,
    /// Game server
    Server,
}

impl Role {
    /// Direction of frames this endpoint writes
    #[must_use]
    pub const fn outbound(self) -> Direction {
        match self {
            Self::Client => Direction::ServerBound,
            Self::Server => Direction::ClientBound,
        }
    }

    /// Direction of frames this endpoint reads
    #[must_use]
    pub const fn inbound(self) -> Direction {
        self.outbound().reverse()
    }

    /// The other endpoint
    #[must_use]
    pub const fn peer(self) -> Self {
        match self {
            Self::Client => Self::Server,
            Self::Server => Self::Client,
        }
    }
}

/// Known outer message types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum MessageType {
    /// Client hello carrying the game version
    ConnectRequest = 1,
    /// Connection closed with a reason
    Disconnect = 2,
    /// Player (re)spawn
    SpawnPlayer = 12,
    /// Client identifier
    ClientUuid = 68,
    /// Bug net catch
    CatchNpc = 70,
    /// Nested module frame
    LoadNetModule = 82,
    /// Per-item stat overrides
    TweakItem = 88,
    /// Colored, width-limited status text
    SmartTextMessage = 107,
}

impl MessageType {
    /// Convert from byte
    #[must_use]
    pub fn from_u8(value: u8) -> Option<Self> {
        match value {
            1 => Some(Self::ConnectRequest),
            2 => Some(Self::Disconnect),
            12 => Some(Self::SpawnPlayer),
            68 => Some(Self::ClientUuid),
            70 => Some(Self::CatchNpc),
            82 => Some(Self::LoadNetModule),
            88 => Some(Self::TweakItem),
            107 => Some(Self::SmartTextMessage),
            _ => None,
        }
    }

    /// Convert to byte
    #[must_use]
    pub const fn as_u8(self) -> u8 {
        self as u8
    }
}

impl fmt::Display for MessageType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::ConnectRequest => "ConnectRequest",
            Self::Disconnect => "Disconnect",
            Self::SpawnPlayer => "SpawnPlayer",
            Self::ClientUuid => "ClientUuid",
            Self::CatchNpc => "CatchNpc",
            Self::LoadNetModule => "LoadNetModule",
            Self::TweakItem => "TweakItem",
            Self::SmartTextMessage => "SmartTextMessage",
        };
        write!(f, "{name}")
    }
}

/// Known module types carried by [`MessageType::LoadNetModule`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u16)]
pub enum ModuleType {
    /// Chat
    Text = 1,
    /// Map ping
    Ping = 2,
}

impl ModuleType {
    /// Convert from the 16-bit wire id
    #[must_use]
    pub fn from_u16(value: u16) -> Option<Self> {
        match value {
            1 => Some(Self::Text),
            2 => Some(Self::Ping),
            _ => None,
        }
    }

    /// Convert to the 16-bit wire id
    #[must_use]
    pub const fn as_u16(self) -> u16 {
        self as u16
    }
}

impl fmt::Display for ModuleType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text => write!(f, "Text"),
            Self::Ping => write!(f, "Ping"),
        }
    }
}
