//! Player and NPC interaction messages

use bytes::{BufMut, BytesMut};

use crate::protocol::{Direction, Message, MessageType, Reader, Result, WireBody};

/// Player (re)spawn.
///
/// # Wire Format
///
/// ```text
/// [player u8][spawn_x i16][spawn_y i16][respawn_timer i32]
///     [deaths_pve i16][deaths_pvp i16]      ClientBound only
/// [context u8]
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SpawnPlayer {
    /// Player slot
    pub player: u8,
    /// Spawn tile column, `-1` for the world spawn
    pub spawn_x: i16,
    /// Spawn tile row, `-1` for the world spawn
    pub spawn_y: i16,
    /// Ticks until the player may respawn
    pub respawn_timer: i32,
    /// PvE death count; only the server sends it
    pub deaths_pve: i16,
    /// PvP death count; only the server sends it
    pub deaths_pvp: i16,
    /// Why the player is spawning, see the `CONTEXT_*` constants
    pub context: u8,
}

impl SpawnPlayer {
    /// Reviving after death
    pub const CONTEXT_REVIVE: u8 = 0;
    /// Entering the world
    pub const CONTEXT_SPAWNING_INTO_WORLD: u8 = 1;
    /// Teleported home by an item
    pub const CONTEXT_RECALL: u8 = 2;
}

impl WireBody for SpawnPlayer {
    fn decode_body(&mut self, reader: &mut Reader<'_>, direction: Direction) -> Result<()> {
        self.player = reader.read_u8()?;
        self.spawn_x = reader.read_i16()?;
        self.spawn_y = reader.read_i16()?;
        self.respawn_timer = reader.read_i32()?;
        if direction.is_client_bound() {
            self.deaths_pve = reader.read_i16()?;
            self.deaths_pvp = reader.read_i16()?;
        }
        self.context = reader.read_u8()?;
        Ok(())
    }

    fn encode_body(&self, buf: &mut BytesMut, direction: Direction) -> Result<()> {
        buf.put_u8(self.player);
        buf.put_i16_le(self.spawn_x);
        buf.put_i16_le(self.spawn_y);
        buf.put_i32_le(self.respawn_timer);
        if direction.is_client_bound() {
            buf.put_i16_le(self.deaths_pve);
            buf.put_i16_le(self.deaths_pvp);
        }
        buf.put_u8(self.context);
        Ok(())
    }
}

impl Message for SpawnPlayer {
    const TYPE_ID: u8 = MessageType::SpawnPlayer.as_u8();
}

/// Player caught a critter with a bug net
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CatchNpc {
    /// NPC slot
    pub npc_index: u16,
    /// Player slot
    pub player_index: u8,
}

impl WireBody for CatchNpc {
    fn decode_body(&mut self, reader: &mut Reader<'_>, _direction: Direction) -> Result<()> {
        self.npc_index = reader.read_u16()?;
        self.player_index = reader.read_u8()?;
        Ok(())
    }

    fn encode_body(&self, buf: &mut BytesMut, _direction: Direction) -> Result<()> {
        buf.put_u16_le(self.npc_index);
        buf.put_u8(self.player_index);
        Ok(())
    }
}

impl Message for CatchNpc {
    const TYPE_ID: u8 = MessageType::CatchNpc.as_u8();
}
