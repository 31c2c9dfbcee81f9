//! Presence bitmasks for optional fields

use std::fmt;

use bytes::{BufMut, BytesMut};

/// Eight positional presence bits in one byte.
///
/// Bit `N` set means the `N`-th optional field of the owning message is
/// present on the wire. Slots are addressed by position only; out-of-range
/// slot numbers wrap to the low three bits.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FlagSet8(u8);

impl FlagSet8 {
    /// Empty set
    #[must_use]
    pub const fn new() -> Self {
        Self(0)
    }

    /// Create from the raw byte
    #[must_use]
    pub const fn from_bits(bits: u8) -> Self {
        Self(bits)
    }

    /// Raw byte
    #[must_use]
    pub const fn bits(self) -> u8 {
        self.0
    }

    const fn mask(slot: u8) -> u8 {
        1 << (slot & 7)
    }

    /// Check whether a slot is set
    #[must_use]
    pub const fn get(self, slot: u8) -> bool {
        self.0 & Self::mask(slot) != 0
    }

    /// Set or clear a slot
    pub fn set(&mut self, slot: u8, value: bool) {
        if value {
            self.0 |= Self::mask(slot);
        } else {
            self.0 &= !Self::mask(slot);
        }
    }

    /// Builder-style [`set`](Self::set) to `true`
    #[must_use]
    pub const fn with(self, slot: u8) -> Self {
        Self(self.0 | Self::mask(slot))
    }

    /// Check whether no slot is set
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }
}

impl fmt::Display for FlagSet8 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#010b}", self.0)
    }
}

/// Reserved flag byte that is filled in after the gated fields are written.
///
/// ```text
/// reserve()      [..][00]
/// put(1, Some)   [..][00][field 1]
/// put(2, Some)   [..][00][field 1][field 2]
/// commit()       [..][06][field 1][field 2]
/// ```
#[derive(Debug)]
#[must_use = "a reserved flag byte stays zero until committed"]
pub struct PresenceGate {
    offset: usize,
    flags: FlagSet8,
}

impl PresenceGate {
    /// Append a placeholder flag byte to `buf`
    pub fn reserve(buf: &mut BytesMut) -> Self {
        let offset = buf.len();
        buf.put_u8(0);
        Self {
            offset,
            flags: FlagSet8::new(),
        }
    }

    /// Write `value` through `write` and mark `slot`, if present
    pub fn put<T>(
        &mut self,
        buf: &mut BytesMut,
        slot: u8,
        value: Option<T>,
        write: impl FnOnce(&mut BytesMut, T),
    ) {
        if let Some(value) = value {
            self.flags.set(slot, true);
            write(buf, value);
        }
    }

    /// Mark a slot that carries no value of its own (e.g. a chain bit)
    pub fn mark(&mut self, slot: u8) {
        self.flags.set(slot, true);
    }

    /// Flags collected so far
    #[must_use]
    pub const fn flags(&self) -> FlagSet8 {
        self.flags
    }

    /// Backpatch the reserved byte
    pub fn commit(self, buf: &mut BytesMut) -> FlagSet8 {
        buf[self.offset] = self.flags.bits();
        self.flags
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_set() {
        let mut flags = FlagSet8::new();
        assert!(flags.is_empty());

        flags.set(1, true);
        flags.set(2, true);
        assert_eq!(flags.bits(), 0b0000_0110);
        assert!(flags.get(1));
        assert!(!flags.get(0));

        flags.set(1, false);
        assert_eq!(flags.bits(), 0b0000_0100);
    }

    #[test]
    fn test_slots_are_independent() {
        for slot in 0..8 {
            let flags = FlagSet8::new().with(slot);
            for other in 0..8 {
                assert_eq!(flags.get(other), other == slot);
            }
        }
    }

    #[test]
    fn test_slot_wraps() {
        assert_eq!(FlagSet8::new().with(9).bits(), 0b0000_0010);
    }

    #[test]
    fn test_gate_backpatches_reserved_byte() {
        let mut buf = BytesMut::new();
        buf.put_u8(0xAA);

        let mut gate = PresenceGate::reserve(&mut buf);
        gate.put(&mut buf, 0, None::<u8>, |buf, v| buf.put_u8(v));
        gate.put(&mut buf, 1, Some(0x11u8), |buf, v| buf.put_u8(v));
        gate.put(&mut buf, 2, Some(0x22u8), |buf, v| buf.put_u8(v));
        gate.mark(7);
        let flags = gate.commit(&mut buf);

        assert_eq!(flags.bits(), 0b1000_0110);
        assert_eq!(&buf[..], &[0xAA, 0b1000_0110, 0x11, 0x22]);
    }

    #[test]
    fn test_display() {
        assert_eq!(FlagSet8::from_bits(6).to_string(), "0b00000110");
    }
}
