//! Wire codec core
//!
//! Primitive values, the codec contract, and the outer framing layer.

mod body;
mod codec;
mod error;
mod flags;
mod header;
mod primitives;
mod text;
mod types;

pub use body::{Message, Module, WireBody};
pub use codec::{Frames, decode, decode_frame, encode, encode_into, frame_len};
pub use error::{Error, Result};
pub use flags::{FlagSet8, PresenceGate};
pub use header::FrameHeader;
pub use primitives::{Color, Reader, Vector2, WireWrite, var_u32_len};
pub use text::{NetworkText, TextMode};
pub use types::{Direction, MessageType, ModuleType, Role};

/// Frame header size: 2-byte length + 1-byte type id
pub const HEADER_SIZE: usize = 3;

/// Maximum frame size, bounded by the 16-bit length field
pub const MAX_FRAME_SIZE: usize = u16::MAX as usize;

/// Maximum body size of a single frame
pub const MAX_BODY_SIZE: usize = MAX_FRAME_SIZE - HEADER_SIZE;

/// Module header size inside a `LoadNetModule` body
pub const MODULE_HEADER_SIZE: usize = 2;

/// Maximum nesting of [`NetworkText`] substitutions
pub const MAX_TEXT_DEPTH: usize = 32;

/// Maximum number of 7-bit groups in a string length prefix
pub const MAX_VARINT_LEN: usize = 5;
