//! Offset-tracked reads over an immutable byte buffer.

use crate::{Error, Result};

/// Byte order of a fixed-width integer field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endian {
    Big,
    Little,
}

/// Sequential reader that fails closed with [`Error::TruncatedInput`].
#[derive(Debug, Clone)]
pub struct ByteCursor<'a> {
    buf: &'a [u8],
    pos: usize,
}

impl<'a> ByteCursor<'a> {
    pub fn new(buf: &'a [u8]) -> Self {
        Self { buf, pos: 0 }
    }

    /// Offset of the next unread byte.
    pub fn position(&self) -> usize {
        self.pos
    }

    pub fn remaining(&self) -> usize {
        self.buf.len() - self.pos
    }

    fn take(&mut self, n: usize) -> Result<&'a [u8]> {
        let remaining = self.remaining();
        if remaining < n {
            return Err(Error::TruncatedInput {
                offset: self.pos,
                needed: n,
                remaining,
            });
        }
        let out = &self.buf[self.pos..self.pos + n];
        self.pos += n;
        Ok(out)
    }

    /// Read exactly `N` bytes into an array.
    pub fn read_array<const N: usize>(&mut self) -> Result<[u8; N]> {
        let mut out = [0u8; N];
        out.copy_from_slice(self.take(N)?);
        Ok(out)
    }

    /// Read `n` bytes into an owned buffer.
    pub fn read_bytes(&mut self, n: usize) -> Result<Vec<u8>> {
        self.take(n).map(<[u8]>::to_vec)
    }

    pub fn read_u8(&mut self) -> Result<u8> {
        Ok(self.read_array::<1>()?[0])
    }

    pub fn read_u16(&mut self, endian: Endian) -> Result<u16> {
        let bytes = self.read_array()?;
        Ok(match endian {
            Endian::Big => u16::from_be_bytes(bytes),
            Endian::Little => u16::from_le_bytes(bytes),
        })
    }

    pub fn read_u32(&mut self, endian: Endian) -> Result<u32> {
        let bytes = self.read_array()?;
        Ok(match endian {
            Endian::Big => u32::from_be_bytes(bytes),
            Endian::Little => u32::from_le_bytes(bytes),
        })
    }

    pub fn read_u64(&mut self, endian: Endian) -> Result<u64> {
        let bytes = self.read_array()?;
        Ok(match endian {
            Endian::Big => u64::from_be_bytes(bytes),
            Endian::Little => u64::from_le_bytes(bytes),
        })
    }

    /// Consume everything left in the buffer. Never fails; may be empty.
    pub fn rest(&mut self) -> &'a [u8] {
        let out = &self.buf[self.pos..];
        self.pos = self.buf.len();
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reads_advance_in_order() {
        let buf = [0x01, 0x00, 0x02, 0x03, 0x00, 0xaa, 0xbb];
        let mut cursor = ByteCursor::new(&buf);

        assert_eq!(cursor.read_u8().unwrap(), 1);
        assert_eq!(cursor.read_u16(Endian::Big).unwrap(), 2);
        assert_eq!(cursor.read_u16(Endian::Little).unwrap(), 3);
        assert_eq!(cursor.position(), 5);
        assert_eq!(cursor.rest(), &[0xaa, 0xbb]);
        assert_eq!(cursor.remaining(), 0);
        assert!(cursor.rest().is_empty());
    }

    #[test]
    fn test_endianness() {
        let buf = 0x0102_0304_0506_0708u64.to_be_bytes();

        assert_eq!(
            ByteCursor::new(&buf).read_u64(Endian::Big).unwrap(),
            0x0102_0304_0506_0708
        );
        assert_eq!(
            ByteCursor::new(&buf).read_u64(Endian::Little).unwrap(),
            0x0807_0605_0403_0201
        );
        assert_eq!(
            ByteCursor::new(&buf).read_u32(Endian::Little).unwrap(),
            0x0403_0201
        );
    }

    #[test]
    fn test_truncated_read_reports_position() {
        let buf = [0u8; 5];
        let mut cursor = ByteCursor::new(&buf);
        cursor.read_u32(Endian::Big).unwrap();

        assert_eq!(
            cursor.read_u16(Endian::Big),
            Err(Error::TruncatedInput {
                offset: 4,
                needed: 2,
                remaining: 1
            })
        );
        // A failed read does not consume anything.
        assert_eq!(cursor.position(), 4);
        assert_eq!(cursor.read_bytes(1).unwrap(), vec![0]);
    }

    #[test]
    fn test_read_array_and_bytes() {
        let buf: Vec<u8> = (0..40).collect();
        let mut cursor = ByteCursor::new(&buf);

        let head: [u8; 32] = cursor.read_array().unwrap();
        assert_eq!(head[31], 31);
        assert_eq!(cursor.read_bytes(8).unwrap(), (32..40).collect::<Vec<u8>>());
        assert!(matches!(
            cursor.read_array::<1>(),
            Err(Error::TruncatedInput { needed: 1, .. })
        ));
    }
}
