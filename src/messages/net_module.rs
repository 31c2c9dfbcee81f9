//! `LoadNetModule` outer message

use bytes::{BufMut, BytesMut};
use tracing::error;

use super::modules::NetModule;
use crate::protocol::{Direction, Error, Message, MessageType, Reader, Result, WireBody};

/// Envelope for the module sub-protocol.
///
/// # Wire Format
///
/// ```text
/// [module_id u16][module body ...]
/// ```
///
/// The module body runs to the end of the frame and must be consumed exactly.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LoadNetModule {
    /// Carried module
    pub module: NetModule,
}

impl LoadNetModule {
    /// Wrap a module
    pub fn new(module: impl Into<NetModule>) -> Self {
        Self {
            module: module.into(),
        }
    }
}

impl WireBody for LoadNetModule {
    fn decode_body(&mut self, reader: &mut Reader<'_>, direction: Direction) -> Result<()> {
        let module_id = reader.read_u16()?;
        let body = reader.read_rest();
        let (module, consumed) = NetModule::read(module_id, body, direction)?;
        if consumed != body.len() {
            error!(
                module_id,
                declared = body.len(),
                consumed,
                "module body length mismatch"
            );
            return Err(Error::ModuleLengthMismatch {
                module_id,
                declared: body.len(),
                consumed,
            });
        }
        self.module = module;
        Ok(())
    }

    fn encode_body(&self, buf: &mut BytesMut, direction: Direction) -> Result<()> {
        buf.put_u16_le(self.module.module_id());
        self.module.write(buf, direction)?;
        Ok(())
    }
}

impl Message for LoadNetModule {
    const TYPE_ID: u8 = MessageType::LoadNetModule.as_u8();
}
