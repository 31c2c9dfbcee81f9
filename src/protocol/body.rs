//! Codec contract shared by messages and modules

use bytes::BytesMut;

use super::primitives::Reader;
use super::{Direction, Result};

/// A value that reads and writes its own body bytes.
///
/// Implementors provide the field-level [`decode_body`](Self::decode_body)
/// and [`encode_body`](Self::encode_body); the byte accounting in
/// [`read`](Self::read) and [`write`](Self::write) is shared so every type
/// reports consumption the same way.
pub trait WireBody: Default {
    /// Replace this value's fields with the ones read from `reader`
    fn decode_body(&mut self, reader: &mut Reader<'_>, direction: Direction) -> Result<()>;

    /// Append this value's fields to `buf`
    fn encode_body(&self, buf: &mut BytesMut, direction: Direction) -> Result<()>;

    /// Read from `body`, returning the number of bytes consumed.
    ///
    /// Never reads past `body`; running out of input is
    /// [`Error::BufferTooSmall`](super::Error::BufferTooSmall).
    fn read(&mut self, body: &[u8], direction: Direction) -> Result<usize> {
        let mut reader = Reader::new(body);
        self.decode_body(&mut reader, direction)?;
        Ok(reader.position())
    }

    /// Append to `buf`, returning the number of bytes written.
    ///
    /// On error `buf` is left at its previous length.
    fn write(&self, buf: &mut BytesMut, direction: Direction) -> Result<usize> {
        let start = buf.len();
        if let Err(err) = self.encode_body(buf, direction) {
            buf.truncate(start);
            return Err(err);
        }
        Ok(buf.len() - start)
    }

    /// Construct a fresh value from `body`
    fn read_new(body: &[u8], direction: Direction) -> Result<(Self, usize)> {
        let mut value = Self::default();
        let consumed = value.read(body, direction)?;
        Ok((value, consumed))
    }
}

/// Outer message with a stable 8-bit type id
pub trait Message: WireBody {
    /// Wire type id
    const TYPE_ID: u8;
}

/// Module carried inside a `LoadNetModule` frame, with a 16-bit type id
pub trait Module: WireBody {
    /// Module type id
    const TYPE_ID: u16;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::protocol::{Error, WireWrite};
    use bytes::BufMut;

    #[derive(Debug, Default)]
    struct Pair {
        a: u8,
        name: String,
    }

    impl WireBody for Pair {
        fn decode_body(&mut self, reader: &mut Reader<'_>, _direction: Direction) -> Result<()> {
            self.a = reader.read_u8()?;
            self.name = reader.read_string()?;
            Ok(())
        }

        fn encode_body(&self, buf: &mut BytesMut, _direction: Direction) -> Result<()> {
            buf.put_u8(self.a);
            buf.put_string(&self.name)
        }
    }

    #[test]
    fn test_read_reports_consumed_bytes() {
        let (pair, consumed) = Pair::read_new(&[7, 1, b'x', 0xEE], Direction::ServerBound).unwrap();
        assert_eq!(consumed, 3);
        assert_eq!(pair.a, 7);
        assert_eq!(pair.name, "x");
    }

    #[test]
    fn test_write_reports_written_bytes() {
        let mut buf = BytesMut::from(&[0xFFu8][..]);
        let pair = Pair {
            a: 1,
            name: "ab".into(),
        };
        assert_eq!(pair.write(&mut buf, Direction::ClientBound).unwrap(), 4);
        assert_eq!(&buf[..], &[0xFF, 1, 2, b'a', b'b']);
    }

    #[test]
    fn test_read_underflow() {
        let mut pair = Pair::default();
        let err = pair.read(&[7, 3, b'x'], Direction::ServerBound).unwrap_err();
        assert!(matches!(err, Error::BufferTooSmall { needed: 3, got: 1 }));
    }
}
