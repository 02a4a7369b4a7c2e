use crate::constants::HASH_SIZE;
use crate::error::{CodecError, Result};
use crate::hash::Hash;

/// Sequential little-endian reader over a borrowed byte slice.
///
/// A failed read leaves the position untouched.
#[derive(Clone, Debug)]
pub struct ByteCursor<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> ByteCursor<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, pos: 0 }
    }

    pub fn position(&self) -> usize {
        self.pos
    }

    pub fn remaining(&self) -> usize {
        self.data.len() - self.pos
    }

    pub fn is_empty(&self) -> bool {
        self.remaining() == 0
    }

    /// Everything not yet consumed.
    pub fn rest(&self) -> &'a [u8] {
        &self.data[self.pos..]
    }

    pub fn read_bytes(&mut self, n: usize) -> Result<&'a [u8]> {
        let remaining = self.remaining();
        if n > remaining {
            return Err(CodecError::BufferUnderrun {
                requested: n,
                remaining,
            });
        }
        let out = &self.data[self.pos..self.pos + n];
        self.pos += n;
        Ok(out)
    }

    fn read_array<const N: usize>(&mut self) -> Result<[u8; N]> {
        let mut out = [0u8; N];
        out.copy_from_slice(self.read_bytes(N)?);
        Ok(out)
    }

    pub fn read_hash(&mut self) -> Result<Hash> {
        self.read_array::<HASH_SIZE>()
    }

    pub fn read_u8(&mut self) -> Result<u8> {
        Ok(self.read_array::<1>()?[0])
    }

    pub fn read_u16(&mut self) -> Result<u16> {
        self.read_array().map(u16::from_le_bytes)
    }

    pub fn read_u32(&mut self) -> Result<u32> {
        self.read_array().map(u32::from_le_bytes)
    }

    pub fn read_u64(&mut self) -> Result<u64> {
        self.read_array().map(u64::from_le_bytes)
    }

    pub fn read_i8(&mut self) -> Result<i8> {
        self.read_array().map(i8::from_le_bytes)
    }

    pub fn read_i16(&mut self) -> Result<i16> {
        self.read_array().map(i16::from_le_bytes)
    }

    pub fn read_i32(&mut self) -> Result<i32> {
        self.read_array().map(i32::from_le_bytes)
    }

    pub fn read_i64(&mut self) -> Result<i64> {
        self.read_array().map(i64::from_le_bytes)
    }

    /// Reads a compact-size integer: one byte below 0xfd, otherwise a marker byte
    /// (0xfd, 0xfe, 0xff) followed by a 2, 4 or 8 byte little-endian value.
    pub fn read_varint(&mut self) -> Result<u64> {
        let start = self.pos;
        let value = match self.read_u8()? {
            0xfd => self.read_u16().map(u64::from),
            0xfe => self.read_u32().map(u64::from),
            0xff => self.read_u64(),
            small => Ok(u64::from(small)),
        };
        if value.is_err() {
            self.pos = start;
        }
        value
    }

    /// Varint used as a length or count in the current buffer.
    pub fn read_len(&mut self) -> Result<usize> {
        let start = self.pos;
        let n = self.read_varint()?;
        match usize::try_from(n) {
            Ok(n) => Ok(n),
            Err(_) => {
                self.pos = start;
                Err(CodecError::BufferUnderrun {
                    requested: usize::MAX,
                    remaining: self.remaining(),
                })
            }
        }
    }
}
