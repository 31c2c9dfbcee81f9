//! Primitive wire values
//!
//! All multi-byte numbers are little-endian. Strings carry a variable-length
//! byte-count prefix:
//!
//! ```text
//! prefix: 7-bit groups, least significant group first, bit 7 = "more follows"
//!         at most 5 groups, value must fit in u32
//!
//!   0        -> 00
//!   127      -> 7F
//!   128      -> 80 01
//!   300      -> AC 02
//!   u32::MAX -> FF FF FF FF 0F
//! ```

use std::fmt;

use bytes::BufMut;

use super::{Error, MAX_VARINT_LEN, Result};

/// Bounds-checked cursor over a borrowed frame or body.
///
/// Every read either returns a value or fails with
/// [`Error::BufferTooSmall`]; the cursor never moves past the slice.
#[derive(Debug, Clone)]
pub struct Reader<'a> {
    buf: &'a [u8],
    pos: usize,
}

impl<'a> Reader<'a> {
    /// Create a reader positioned at the start of `buf`
    #[must_use]
    pub const fn new(buf: &'a [u8]) -> Self {
        Self { buf, pos: 0 }
    }

    /// Bytes consumed so far
    #[must_use]
    pub const fn position(&self) -> usize {
        self.pos
    }

    /// Bytes left to read
    #[must_use]
    pub const fn remaining(&self) -> usize {
        self.buf.len() - self.pos
    }

    /// Check whether every byte has been consumed
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.remaining() == 0
    }

    /// Borrow the next `len` bytes
    pub fn read_bytes(&mut self, len: usize) -> Result<&'a [u8]> {
        let got = self.remaining();
        if got < len {
            return Err(Error::BufferTooSmall { needed: len, got });
        }
        let out = &self.buf[self.pos..self.pos + len];
        self.pos += len;
        Ok(out)
    }

    /// Borrow everything that is left
    pub fn read_rest(&mut self) -> &'a [u8] {
        let out = &self.buf[self.pos..];
        self.pos = self.buf.len();
        out
    }

    fn read_array<const N: usize>(&mut self) -> Result<[u8; N]> {
        let mut out = [0u8; N];
        out.copy_from_slice(self.read_bytes(N)?);
        Ok(out)
    }

    /// Read one byte
    pub fn read_u8(&mut self) -> Result<u8> {
        let [byte] = self.read_array::<1>()?;
        Ok(byte)
    }

    /// Read a boolean; any non-zero byte is `true`
    pub fn read_bool(&mut self) -> Result<bool> {
        Ok(self.read_u8()? != 0)
    }

    /// Read a little-endian `i16`
    pub fn read_i16(&mut self) -> Result<i16> {
        Ok(i16::from_le_bytes(self.read_array()?))
    }

    /// Read a little-endian `u16`
    pub fn read_u16(&mut self) -> Result<u16> {
        Ok(u16::from_le_bytes(self.read_array()?))
    }

    /// Read a little-endian `i32`
    pub fn read_i32(&mut self) -> Result<i32> {
        Ok(i32::from_le_bytes(self.read_array()?))
    }

    /// Read a little-endian `u32`
    pub fn read_u32(&mut self) -> Result<u32> {
        Ok(u32::from_le_bytes(self.read_array()?))
    }

    /// Read a little-endian `f32`, preserving the bit pattern
    pub fn read_f32(&mut self) -> Result<f32> {
        Ok(f32::from_le_bytes(self.read_array()?))
    }

    /// Read a 7-bit-group variable-length `u32`
    pub fn read_var_u32(&mut self) -> Result<u32> {
        let mut value = 0u32;
        for group in 0..MAX_VARINT_LEN {
            let byte = self.read_u8()?;
            let bits = u32::from(byte & 0x7F);
            // the fifth group only has room for the top four bits
            if group == MAX_VARINT_LEN - 1 && bits > 0x0F {
                return Err(Error::VarintOverflow);
            }
            value |= bits << (7 * group);
            if byte & 0x80 == 0 {
                return Ok(value);
            }
        }
        Err(Error::VarintOverflow)
    }

    /// Borrow a length-prefixed UTF-8 string
    ///
    /// The prefix is checked against the remaining bytes before anything is
    /// sliced, so a forged length never allocates.
    pub fn read_str(&mut self) -> Result<&'a str> {
        let len = self.read_var_u32()? as usize;
        let bytes = self.read_bytes(len)?;
        Ok(std::str::from_utf8(bytes)?)
    }

    /// Read a length-prefixed UTF-8 string into an owned `String`
    pub fn read_string(&mut self) -> Result<String> {
        self.read_str().map(str::to_owned)
    }

    /// Read a 3-byte RGB color
    pub fn read_color(&mut self) -> Result<Color> {
        let [r, g, b] = self.read_array::<3>()?;
        Ok(Color { r, g, b })
    }

    /// Read an 8-byte 2D vector
    pub fn read_vector2(&mut self) -> Result<Vector2> {
        let x = self.read_f32()?;
        let y = self.read_f32()?;
        Ok(Vector2 { x, y })
    }
}

/// Writers for the non-numeric wire primitives.
///
/// Implemented for every [`BufMut`]; fixed-width numbers use the `put_*_le`
/// methods `BufMut` already provides.
pub trait WireWrite: BufMut {
    /// Write a boolean as `0` or `1`
    fn put_bool(&mut self, value: bool) {
        self.put_u8(u8::from(value));
    }

    /// Write a 7-bit-group variable-length `u32`
    fn put_var_u32(&mut self, mut value: u32) {
        while value >= 0x80 {
            self.put_u8((value & 0x7F) as u8 | 0x80);
            value >>= 7;
        }
        self.put_u8(value as u8);
    }

    /// Write a length-prefixed UTF-8 string
    fn put_string(&mut self, value: &str) -> Result<()> {
        let len = u32::try_from(value.len()).map_err(|_| Error::StringTooLong { len: value.len() })?;
        self.put_var_u32(len);
        self.put_slice(value.as_bytes());
        Ok(())
    }

    /// Write a 3-byte RGB color
    fn put_color(&mut self, color: Color) {
        self.put_slice(&[color.r, color.g, color.b]);
    }

    /// Write an 8-byte 2D vector
    fn put_vector2(&mut self, vector: Vector2) {
        self.put_f32_le(vector.x);
        self.put_f32_le(vector.y);
    }
}

impl<T: BufMut + ?Sized> WireWrite for T {}

/// Number of bytes [`WireWrite::put_var_u32`] emits for `value`
#[must_use]
pub const fn var_u32_len(value: u32) -> usize {
    match value {
        0..=0x7F => 1,
        0x80..=0x3FFF => 2,
        0x4000..=0x001F_FFFF => 3,
        0x0020_0000..=0x0FFF_FFFF => 4,
        _ => 5,
    }
}

/// RGB color (3 bytes on the wire)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Color {
    /// Red
    pub r: u8,
    /// Green
    pub g: u8,
    /// Blue
    pub b: u8,
}

impl Color {
    /// Opaque white
    pub const WHITE: Self = Self::new(255, 255, 255);
    /// Black
    pub const BLACK: Self = Self::new(0, 0, 0);

    /// Create a color from its channels
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// 2D float vector (8 bytes on the wire)
#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vector2 {
    /// Horizontal component
    pub x: f32,
    /// Vertical component
    pub y: f32,
}

impl Vector2 {
    /// Origin
    pub const ZERO: Self = Self::new(0.0, 0.0);

    /// Create a vector
    #[must_use]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}
