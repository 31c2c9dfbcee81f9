//! Localization-aware network text
//!
//! # Wire Format
//!
//! ```text
//! [mode u8][text: string]                                   mode = Literal
//! [mode u8][text: string][count u8][NetworkText; count]     otherwise
//! ```

use std::fmt;

use bytes::BufMut;

use super::primitives::{Reader, WireWrite, var_u32_len};
use super::{Error, MAX_TEXT_DEPTH, Result};

/// Smallest possible encoding of a nested value: mode byte + empty string.
const MIN_ENCODED_LEN: usize = 2;

/// How the text of a [`NetworkText`] is interpreted
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum TextMode {
    /// Shown verbatim
    #[default]
    Literal = 0,
    /// Format string with `{N}` placeholders
    Formatted = 1,
    /// Localization key, resolved by the receiving client
    Localized = 2,
}

impl TextMode {
    /// Convert from byte
    #[must_use]
    pub fn from_u8(value: u8) -> Option<Self> {
        match value {
            0 => Some(Self::Literal),
            1 => Some(Self::Formatted),
            2 => Some(Self::Localized),
            _ => None,
        }
    }

    /// Convert to byte
    #[must_use]
    pub const fn as_u8(self) -> u8 {
        self as u8
    }
}

/// Text tree sent to clients for display.
///
/// Literal values never carry substitutions; the constructors enforce it so
/// that every value survives a round trip unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NetworkText {
    mode: TextMode,
    text: String,
    substitutions: Vec<NetworkText>,
}

impl NetworkText {
    /// Empty literal
    pub const EMPTY: Self = Self {
        mode: TextMode::Literal,
        text: String::new(),
        substitutions: Vec::new(),
    };

    /// Verbatim text
    pub fn literal(text: impl Into<String>) -> Self {
        Self {
            mode: TextMode::Literal,
            text: text.into(),
            substitutions: Vec::new(),
        }
    }

    /// Format string with `{N}` placeholders
    pub fn formatted(format: impl Into<String>, substitutions: Vec<Self>) -> Self {
        Self {
            mode: TextMode::Formatted,
            text: format.into(),
            substitutions,
        }
    }

    /// Localization key with arguments
    pub fn localized(key: impl Into<String>, substitutions: Vec<Self>) -> Self {
        Self {
            mode: TextMode::Localized,
            text: key.into(),
            substitutions,
        }
    }

    /// Interpretation mode
    #[must_use]
    pub const fn mode(&self) -> TextMode {
        self.mode
    }

    /// Literal text, format string or localization key
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Ordered substitutions
    #[must_use]
    pub fn substitutions(&self) -> &[Self] {
        &self.substitutions
    }

    /// Check if this is an empty literal
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.mode == TextMode::Literal && self.text.is_empty()
    }

    /// Nesting depth, counting this value as 1
    #[must_use]
    pub fn depth(&self) -> usize {
        1 + self
            .substitutions
            .iter()
            .map(Self::depth)
            .max()
            .unwrap_or(0)
    }

    /// Encoded size in bytes
    #[must_use]
    pub fn encoded_len(&self) -> usize {
        let text = var_u32_len(u32::try_from(self.text.len()).unwrap_or(u32::MAX)) + self.text.len();
        if self.mode == TextMode::Literal {
            return 1 + text;
        }
        1 + text + 1 + self.substitutions.iter().map(Self::encoded_len).sum::<usize>()
    }

    /// Read one value from `reader`
    pub fn decode(reader: &mut Reader<'_>) -> Result<Self> {
        Self::decode_at(reader, 1)
    }

    fn decode_at(reader: &mut Reader<'_>, depth: usize) -> Result<Self> {
        if depth > MAX_TEXT_DEPTH {
            return Err(Error::TextTooDeep { max: MAX_TEXT_DEPTH });
        }

        let mode_byte = reader.read_u8()?;
        let mode = TextMode::from_u8(mode_byte).ok_or(Error::InvalidTextMode { mode: mode_byte })?;
        let text = reader.read_string()?;

        let mut substitutions = Vec::new();
        if mode != TextMode::Literal {
            let count = usize::from(reader.read_u8()?);
            let needed = count * MIN_ENCODED_LEN;
            if needed > reader.remaining() {
                return Err(Error::BufferTooSmall {
                    needed,
                    got: reader.remaining(),
                });
            }
            substitutions.reserve_exact(count);
            for _ in 0..count {
                substitutions.push(Self::decode_at(reader, depth + 1)?);
            }
        }

        Ok(Self {
            mode,
            text,
            substitutions,
        })
    }

    /// Append this value to `buf`
    pub fn encode<B: BufMut + ?Sized>(&self, buf: &mut B) -> Result<()> {
        self.encode_at(buf, 1)
    }

    fn encode_at<B: BufMut + ?Sized>(&self, buf: &mut B, depth: usize) -> Result<()> {
        if depth > MAX_TEXT_DEPTH {
            return Err(Error::TextTooDeep { max: MAX_TEXT_DEPTH });
        }

        buf.put_u8(self.mode.as_u8());
        buf.put_string(&self.text)?;
        if self.mode == TextMode::Literal {
            return Ok(());
        }

        let count = u8::try_from(self.substitutions.len()).map_err(|_| {
            Error::TooManySubstitutions {
                count: self.substitutions.len(),
            }
        })?;
        buf.put_u8(count);
        for substitution in &self.substitutions {
            substitution.encode_at(buf, depth + 1)?;
        }
        Ok(())
    }
}

impl From<&str> for NetworkText {
    fn from(text: &str) -> Self {
        Self::literal(text)
    }
}

impl From<String> for NetworkText {
    fn from(text: String) -> Self {
        Self::literal(text)
    }
}

impl fmt::Display for NetworkText {
    /// Literal text as-is; otherwise `{N}` is replaced by substitution `N`.
    /// Placeholders without a matching substitution are kept verbatim.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.mode == TextMode::Literal || self.substitutions.is_empty() {
            return f.write_str(&self.text);
        }

        let mut rest = self.text.as_str();
        while let Some(open) = rest.find('{') {
            f.write_str(&rest[..open])?;
            let after = &rest[open + 1..];
            let placeholder = after.find('}').and_then(|close| {
                let index = after[..close].parse::<usize>().ok()?;
                self.substitutions.get(index).map(|sub| (close, sub))
            });
            match placeholder {
                Some((close, sub)) => {
                    write!(f, "{sub}")?;
                    rest = &after[close + 1..];
                }
                None => {
                    f.write_str("{")?;
                    rest = after;
                }
            }
        }
        f.write_str(rest)
    }
}
