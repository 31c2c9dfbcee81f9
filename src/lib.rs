//! GSX - binary wire codec for a tile-based game server protocol
//!
//! This library encodes and decodes the length-prefixed frames exchanged
//! between game clients and servers. It covers the outer framing, direction
//! dependent message layouts, bitmask-gated optional fields, nested network
//! text, and the 16-bit module sub-protocol.
//!
//! # Quick Start
//!
//! ```rust
//! use gsx::messages::{CatchNpc, Packet};
//! use gsx::Direction;
//!
//! let packet = Packet::from(CatchNpc { npc_index: 1, player_index: 0 });
//!
//! // A client sends toward the server
//! let bytes = packet.encode(Direction::ServerBound)?;
//! assert_eq!(&bytes[..], &[0x06, 0x00, 0x46, 0x01, 0x00, 0x00]);
//!
//! let decoded = Packet::decode(&bytes, Direction::ServerBound)?;
//! assert_eq!(decoded, packet);
//! # Ok::<(), gsx::Error>(())
//! ```
//!
//! # Streams
//!
//! ```rust
//! use gsx::{Direction, Frames};
//!
//! let stream = [0x06, 0x00, 0x46, 0x01, 0x00, 0x00, 0x06, 0x00];
//! let mut frames = Frames::new(&stream, Direction::ServerBound);
//! assert!(frames.next().unwrap().is_ok());
//! assert!(frames.next().is_none());
//! assert_eq!(frames.remainder(), &[0x06, 0x00]);
//! ```
//!
//! # Features
//!
//! - **Exact length accounting** - every frame and module body must be consumed exactly
//! - **Unknown-id pass-through** - unrecognized messages and modules re-encode byte-for-byte
//! - **No I/O** - pure functions over byte slices and `BytesMut`
//! - **`serde`** - optional `Serialize`/`Deserialize` on all message types

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]

pub mod messages;
pub mod protocol;

pub use messages::{NetModule, Packet};
pub use protocol::{
    Direction, Error, Frames, MAX_FRAME_SIZE, MessageType, ModuleType, NetworkText, Result, Role,
    decode, decode_frame, encode, encode_into, frame_len,
};

/// Protocol revision these message layouts follow
pub const PROTOCOL_VERSION: &str = "Terraria279";
