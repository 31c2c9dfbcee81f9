//! Module sub-protocol carried by `LoadNetModule`
//!
//! Each module has a 16-bit id and its own body layout. Ids this crate does
//! not know decode to [`UnknownModule`] and re-encode unchanged.

mod ping;
mod text;

pub use ping::PingModule;
pub use text::TextModule;

use bytes::BytesMut;
use tracing::debug;

use super::UnknownModule;
use crate::protocol::{Direction, Module, ModuleType, Result, WireBody};

/// Every module known to the codec
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum NetModule {
    /// Chat
    Text(TextModule),
    /// Map ping
    Ping(PingModule),
    /// Unregistered module id
    Unknown(UnknownModule),
}

impl NetModule {
    /// Module id written after the outer frame header
    #[must_use]
    pub fn module_id(&self) -> u16 {
        match self {
            Self::Text(_) => TextModule::TYPE_ID,
            Self::Ping(_) => PingModule::TYPE_ID,
            Self::Unknown(module) => module.module_id,
        }
    }

    /// Known module type, `None` for [`NetModule::Unknown`]
    #[must_use]
    pub fn module_type(&self) -> Option<ModuleType> {
        ModuleType::from_u16(self.module_id())
    }

    /// Decode the module body for `module_id`, returning the bytes consumed
    pub fn read(module_id: u16, body: &[u8], direction: Direction) -> Result<(Self, usize)> {
        match ModuleType::from_u16(module_id) {
            Some(ModuleType::Text) => {
                TextModule::read_new(body, direction).map(|(m, n)| (Self::Text(m), n))
            }
            Some(ModuleType::Ping) => {
                PingModule::read_new(body, direction).map(|(m, n)| (Self::Ping(m), n))
            }
            None => {
                debug!(module_id, len = body.len(), "passing through unknown module");
                let (module, consumed) = UnknownModule::read_new(body, direction)?;
                Ok((Self::Unknown(UnknownModule { module_id, ..module }), consumed))
            }
        }
    }

    /// Append the module body (without its id) to `buf`
    pub fn write(&self, buf: &mut BytesMut, direction: Direction) -> Result<usize> {
        match self {
            Self::Text(module) => module.write(buf, direction),
            Self::Ping(module) => module.write(buf, direction),
            Self::Unknown(module) => module.write(buf, direction),
        }
    }
}

impl Default for NetModule {
    fn default() -> Self {
        Self::Unknown(UnknownModule::default())
    }
}

impl From<TextModule> for NetModule {
    fn from(module: TextModule) -> Self {
        Self::Text(module)
    }
}

impl From<PingModule> for NetModule {
    fn from(module: PingModule) -> Self {
        Self::Ping(module)
    }
}

impl From<UnknownModule> for NetModule {
    fn from(module: UnknownModule) -> Self {
        Self::Unknown(module)
    }
}
