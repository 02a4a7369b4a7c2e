/// Append-only little-endian writer. The mirror of [`crate::ByteCursor`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ByteSink {
    buf: Vec<u8>,
}

impl ByteSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            buf: Vec::with_capacity(capacity),
        }
    }

    pub fn len(&self) -> usize {
        self.buf.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.buf
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.buf
    }

    pub fn write_bytes(&mut self, bytes: &[u8]) -> &mut Self {
        self.buf.extend_from_slice(bytes);
        self
    }

    pub fn write_u8(&mut self, v: u8) -> &mut Self {
        self.buf.push(v);
        self
    }

    pub fn write_u16(&mut self, v: u16) -> &mut Self {
        self.write_bytes(&v.to_le_bytes())
    }

    pub fn write_u32(&mut self, v: u32) -> &mut Self {
        self.write_bytes(&v.to_le_bytes())
    }

    pub fn write_u64(&mut self, v: u64) -> &mut Self {
        self.write_bytes(&v.to_le_bytes())
    }

    pub fn write_i8(&mut self, v: i8) -> &mut Self {
        self.write_bytes(&v.to_le_bytes())
    }

    pub fn write_i16(&mut self, v: i16) -> &mut Self {
        self.write_bytes(&v.to_le_bytes())
    }

    pub fn write_i32(&mut self, v: i32) -> &mut Self {
        self.write_bytes(&v.to_le_bytes())
    }

    pub fn write_i64(&mut self, v: i64) -> &mut Self {
        self.write_bytes(&v.to_le_bytes())
    }

    /// Writes the shortest compact-size encoding of `v`.
    pub fn write_varint(&mut self, v: u64) -> &mut Self {
        if v < 0xfd {
            self.write_u8(v as u8)
        } else if v <= 0xffff {
            self.write_u8(0xfd).write_u16(v as u16)
        } else if v <= 0xffff_ffff {
            self.write_u8(0xfe).write_u32(v as u32)
        } else {
            self.write_u8(0xff).write_u64(v)
        }
    }

    /// Varint prefix followed by the bytes themselves.
    pub fn write_var_bytes(&mut self, bytes: &[u8]) -> &mut Self {
        self.write_varint(bytes.len() as u64).write_bytes(bytes)
    }
}
