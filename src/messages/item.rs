//! Item stat overrides
//!
//! # Wire Format
//!
//! ```text
//! [item_index i16][flags u8][first-tier fields...]
//!                 [flags2 u8][second-tier fields...]     if flags bit 7
//!
//! flags  bit 0 color        Color     flags2 bit 0 width     i16
//!        bit 1 damage       u16              bit 1 height    i16
//!        bit 2 knockback    f32              bit 2 scale     f32
//!        bit 3 use_animation u16             bit 3 ammo      i16
//!        bit 4 use_time     u16              bit 4 use_ammo  i16
//!        bit 5 shoot        i16              bit 5 not_ammo  bool
//!        bit 6 shoot_speed  f32
//!        bit 7 flags2 follows
//! ```
//!
//! Fields are written and read in exactly this order; any other order shifts
//! every following byte.

use bytes::{BufMut, BytesMut};

use crate::protocol::{
    Color, Direction, FlagSet8, Message, MessageType, PresenceGate, Reader, Result, WireBody,
    WireWrite,
};

const COLOR: u8 = 0;
const DAMAGE: u8 = 1;
const KNOCKBACK: u8 = 2;
const USE_ANIMATION: u8 = 3;
const USE_TIME: u8 = 4;
const SHOOT: u8 = 5;
const SHOOT_SPEED: u8 = 6;
const SECOND_TIER: u8 = 7;

const WIDTH: u8 = 0;
const HEIGHT: u8 = 1;
const SCALE: u8 = 2;
const AMMO: u8 = 3;
const USE_AMMO: u8 = 4;
const NOT_AMMO: u8 = 5;

/// Overrides selected stats of one item; absent fields keep their defaults.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TweakItem {
    /// World item slot
    pub item_index: i16,
    /// Tint
    pub color: Option<Color>,
    /// Base damage
    pub damage: Option<u16>,
    /// Knockback
    pub knockback: Option<f32>,
    /// Animation length in ticks
    pub use_animation: Option<u16>,
    /// Use time in ticks
    pub use_time: Option<u16>,
    /// Projectile type
    pub shoot: Option<i16>,
    /// Projectile velocity
    pub shoot_speed: Option<f32>,
    /// Hitbox width
    pub width: Option<i16>,
    /// Hitbox height
    pub height: Option<i16>,
    /// Draw scale
    pub scale: Option<f32>,
    /// Ammo class this item provides
    pub ammo: Option<i16>,
    /// Ammo class this item consumes
    pub use_ammo: Option<i16>,
    /// Excluded from ammo slots
    pub not_ammo: Option<bool>,
}

impl TweakItem {
    /// Tweak of `item_index` with no overrides
    #[must_use]
    pub fn new(item_index: i16) -> Self {
        Self {
            item_index,
            ..Self::default()
        }
    }

    fn has_second_tier(&self) -> bool {
        self.width.is_some()
            || self.height.is_some()
            || self.scale.is_some()
            || self.ammo.is_some()
            || self.use_ammo.is_some()
            || self.not_ammo.is_some()
    }
}

impl WireBody for TweakItem {
    fn decode_body(&mut self, reader: &mut Reader<'_>, _direction: Direction) -> Result<()> {
        self.item_index = reader.read_i16()?;

        let flags = FlagSet8::from_bits(reader.read_u8()?);
        self.color = flags.get(COLOR).then(|| reader.read_color()).transpose()?;
        self.damage = flags.get(DAMAGE).then(|| reader.read_u16()).transpose()?;
        self.knockback = flags.get(KNOCKBACK).then(|| reader.read_f32()).transpose()?;
        self.use_animation = flags.get(USE_ANIMATION).then(|| reader.read_u16()).transpose()?;
        self.use_time = flags.get(USE_TIME).then(|| reader.read_u16()).transpose()?;
        self.shoot = flags.get(SHOOT).then(|| reader.read_i16()).transpose()?;
        self.shoot_speed = flags.get(SHOOT_SPEED).then(|| reader.read_f32()).transpose()?;

        let flags = if flags.get(SECOND_TIER) {
            FlagSet8::from_bits(reader.read_u8()?)
        } else {
            FlagSet8::new()
        };
        self.width = flags.get(WIDTH).then(|| reader.read_i16()).transpose()?;
        self.height = flags.get(HEIGHT).then(|| reader.read_i16()).transpose()?;
        self.scale = flags.get(SCALE).then(|| reader.read_f32()).transpose()?;
        self.ammo = flags.get(AMMO).then(|| reader.read_i16()).transpose()?;
        self.use_ammo = flags.get(USE_AMMO).then(|| reader.read_i16()).transpose()?;
        self.not_ammo = flags.get(NOT_AMMO).then(|| reader.read_bool()).transpose()?;
        Ok(())
    }

    fn encode_body(&self, buf: &mut BytesMut, _direction: Direction) -> Result<()> {
        buf.put_i16_le(self.item_index);

        let mut first = PresenceGate::reserve(buf);
        first.put(buf, COLOR, self.color, |buf, v| buf.put_color(v));
        first.put(buf, DAMAGE, self.damage, |buf, v| buf.put_u16_le(v));
        first.put(buf, KNOCKBACK, self.knockback, |buf, v| buf.put_f32_le(v));
        first.put(buf, USE_ANIMATION, self.use_animation, |buf, v| buf.put_u16_le(v));
        first.put(buf, USE_TIME, self.use_time, |buf, v| buf.put_u16_le(v));
        first.put(buf, SHOOT, self.shoot, |buf, v| buf.put_i16_le(v));
        first.put(buf, SHOOT_SPEED, self.shoot_speed, |buf, v| buf.put_f32_le(v));

        if self.has_second_tier() {
            first.mark(SECOND_TIER);
            let mut second = PresenceGate::reserve(buf);
            second.put(buf, WIDTH, self.width, |buf, v| buf.put_i16_le(v));
            second.put(buf, HEIGHT, self.height, |buf, v| buf.put_i16_le(v));
            second.put(buf, SCALE, self.scale, |buf, v| buf.put_f32_le(v));
            second.put(buf, AMMO, self.ammo, |buf, v| buf.put_i16_le(v));
            second.put(buf, USE_AMMO, self.use_ammo, |buf, v| buf.put_i16_le(v));
            second.put(buf, NOT_AMMO, self.not_ammo, |buf, v| buf.put_bool(v));
            second.commit(buf);
        }

        first.commit(buf);
        Ok(())
    }
}

impl Message for TweakItem {
    const TYPE_ID: u8 = MessageType::TweakItem.as_u8();
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Encoded size of each optional field, in declaration order
    const FIELD_SIZES: [usize; 13] = [3, 2, 4, 2, 2, 2, 4, 2, 2, 4, 2, 2, 1];

    fn set_field(item: &mut TweakItem, field: usize) {
        match field {
            0 => item.color = Some(Color::new(10, 20, 30)),
            1 => item.damage = Some(25),
            2 => item.knockback = Some(4.5),
            3 => item.use_animation = Some(20),
            4 => item.use_time = Some(18),
            5 => item.shoot = Some(14),
            6 => item.shoot_speed = Some(9.0),
            7 => item.width = Some(32),
            8 => item.height = Some(16),
            9 => item.scale = Some(1.25),
            10 => item.ammo = Some(97),
            11 => item.use_ammo = Some(-3),
            12 => item.not_ammo = Some(true),
            _ => unreachable!("no optional field {field}"),
        }
    }

    fn encode(item: &TweakItem) -> Vec<u8> {
        let mut buf = BytesMut::new();
        item.write(&mut buf, Direction::ClientBound).unwrap();
        buf.to_vec()
    }

    /// (first flag byte, second flag byte if present)
    fn flag_bytes(bytes: &[u8]) -> (u8, Option<u8>) {
        let first = bytes[2];
        if first & 0x80 == 0 {
            return (first, None);
        }
        let tier_one: usize = (0..7)
            .filter(|bit| first & (1 << bit) != 0)
            .map(|bit| FIELD_SIZES[bit])
            .sum();
        (first, Some(bytes[3 + tier_one]))
    }

    #[test]
    fn test_damage_and_knockback_only() {
        let mut item = TweakItem::new(5);
        item.damage = Some(25);
        item.knockback = Some(4.5);

        let bytes = encode(&item);
        let mut expected = vec![5, 0, 0b0000_0110, 25, 0];
        expected.extend_from_slice(&4.5f32.to_le_bytes());
        assert_eq!(bytes, expected);
    }

    #[test]
    fn test_no_overrides() {
        assert_eq!(encode(&TweakItem::new(-1)), [0xFF, 0xFF, 0]);
    }

    #[test]
    fn test_second_tier_chains_flag_byte() {
        let mut item = TweakItem::new(1);
        item.damage = Some(7);
        item.not_ammo = Some(true);

        assert_eq!(encode(&item), [1, 0, 0b1000_0010, 7, 0, 0b0010_0000, 1]);
    }

    #[test]
    fn test_each_field_sets_exactly_its_bit() {
        for field in 0..FIELD_SIZES.len() {
            let mut item = TweakItem::new(0);
            set_field(&mut item, field);
            let bytes = encode(&item);

            match flag_bytes(&bytes) {
                (first, None) => {
                    assert!(field < 7);
                    assert_eq!(first, 1u8 << field);
                    assert_eq!(bytes.len(), 3 + FIELD_SIZES[field]);
                }
                (first, Some(second)) => {
                    assert!(field >= 7);
                    assert_eq!(first, 0x80);
                    assert_eq!(second, 1u8 << (field - 7));
                    assert_eq!(bytes.len(), 4 + FIELD_SIZES[field]);
                }
            }
        }
    }

    #[test]
    fn test_all_fields_roundtrip() {
        let mut item = TweakItem::new(300);
        for field in 0..FIELD_SIZES.len() {
            set_field(&mut item, field);
        }
        let bytes = encode(&item);
        assert_eq!(bytes.len(), 2 + 2 + FIELD_SIZES.iter().sum::<usize>());
        assert_eq!(flag_bytes(&bytes), (0xFF, Some(0b0011_1111)));

        let (decoded, consumed) = TweakItem::read_new(&bytes, Direction::ClientBound).unwrap();
        assert_eq!(consumed, bytes.len());
        assert_eq!(decoded, item);
    }

    #[test]
    fn test_missing_gated_field_is_underflow() {
        // damage bit set, only one byte of it present
        let err = TweakItem::read_new(&[0, 0, 0b0000_0010, 7], Direction::ClientBound).unwrap_err();
        assert!(err.is_underflow());
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        fn f32_bits() -> impl Strategy<Value = f32> {
            any::<u32>().prop_map(f32::from_bits)
        }

        fn tweak_strategy() -> impl Strategy<Value = TweakItem> {
            let first = (
                any::<i16>(),
                proptest::option::of(any::<(u8, u8, u8)>().prop_map(|(r, g, b)| Color::new(r, g, b))),
                any::<Option<u16>>(),
                proptest::option::of(f32_bits()),
                any::<Option<u16>>(),
                any::<Option<u16>>(),
                any::<Option<i16>>(),
                proptest::option::of(f32_bits()),
            );
            let second = (
                any::<Option<i16>>(),
                any::<Option<i16>>(),
                proptest::option::of(f32_bits()),
                any::<Option<i16>>(),
                any::<Option<i16>>(),
                any::<Option<bool>>(),
            );
            (first, second).prop_map(
                |(
                    (item_index, color, damage, knockback, use_animation, use_time, shoot, shoot_speed),
                    (width, height, scale, ammo, use_ammo, not_ammo),
                )| TweakItem {
                    item_index,
                    color,
                    damage,
                    knockback,
                    use_animation,
                    use_time,
                    shoot,
                    shoot_speed,
                    width,
                    height,
                    scale,
                    ammo,
                    use_ammo,
                    not_ammo,
                },
            )
        }

        fn clear_field(item: &mut TweakItem, field: usize) {
            match field {
                0 => item.color = None,
                1 => item.damage = None,
                2 => item.knockback = None,
                3 => item.use_animation = None,
                4 => item.use_time = None,
                5 => item.shoot = None,
                6 => item.shoot_speed = None,
                7 => item.width = None,
                8 => item.height = None,
                9 => item.scale = None,
                10 => item.ammo = None,
                11 => item.use_ammo = None,
                12 => item.not_ammo = None,
                _ => unreachable!("no optional field {field}"),
            }
        }

        proptest! {
            /// Property: decode then re-encode reproduces the bytes
            #[test]
            fn prop_reencode_is_identical(item in tweak_strategy()) {
                let bytes = encode(&item);
                let (decoded, consumed) = TweakItem::read_new(&bytes, Direction::ServerBound).unwrap();
                prop_assert_eq!(consumed, bytes.len());
                prop_assert_eq!(encode(&decoded), bytes);
            }

            /// Property: toggling one field flips only its own presence bit
            #[test]
            fn prop_toggle_changes_one_bit(item in tweak_strategy(), field in 0usize..13) {
                let mut without = item.clone();
                clear_field(&mut without, field);
                let mut with = without.clone();
                set_field(&mut with, field);

                let encoded_without = encode(&without);
                let encoded_with = encode(&with);
                prop_assert_eq!(
                    encoded_with.len() - encoded_without.len(),
                    FIELD_SIZES[field] + usize::from(field >= 7 && !without.has_second_tier())
                );

                let (first_without, second_without) = flag_bytes(&encoded_without);
                let (first_with, second_with) = flag_bytes(&encoded_with);
                if field < 7 {
                    prop_assert_eq!(first_without ^ first_with, 1u8 << field);
                    prop_assert_eq!(second_without, second_with);
                } else {
                    prop_assert_eq!((first_without ^ first_with) & 0x7F, 0);
                    let toggled = second_without.unwrap_or(0) ^ second_with.unwrap_or(0);
                    prop_assert_eq!(toggled, 1u8 << (field - 7));
                }
            }
        }
    }
}
