use crate::constants::{HASH_SIZE, HEADER_SIZE};
use crate::cursor::ByteCursor;
use crate::error::{CodecError, Result};
use crate::hash::{from_display_hex, sha256d, to_display_hex, Hash};
use crate::object::HeaderObject;
use crate::sink::ByteSink;

/// The fixed 80-byte block header. Digests are held in wire order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BlockHeader {
    version: i32,
    prev_hash: Hash,
    merkle_root: Hash,
    time: u32,
    bits: u32,
    nonce: u32,
}

impl BlockHeader {
    pub fn new(
        version: i32,
        prev_hash: Hash,
        merkle_root: Hash,
        time: u32,
        bits: u32,
        nonce: u32,
    ) -> Self {
        Self {
            version,
            prev_hash,
            merkle_root,
            time,
            bits,
            nonce,
        }
    }

    pub fn parse(cursor: &mut ByteCursor<'_>) -> Result<Self> {
        if cursor.remaining() < HEADER_SIZE {
            return Err(CodecError::BufferUnderrun {
                requested: HEADER_SIZE,
                remaining: cursor.remaining(),
            });
        }
        Ok(Self {
            version: cursor.read_i32()?,
            prev_hash: cursor.read_hash()?,
            merkle_root: cursor.read_hash()?,
            time: cursor.read_u32()?,
            bits: cursor.read_u32()?,
            nonce: cursor.read_u32()?,
        })
    }

    /// Parses a standalone header; the input must be exactly 80 bytes.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        let mut cursor = ByteCursor::new(bytes);
        let header = Self::parse(&mut cursor)?;
        if !cursor.is_empty() {
            return Err(CodecError::TrailingBytes(cursor.remaining()));
        }
        Ok(header)
    }

    pub fn from_hex(s: &str) -> Result<Self> {
        Self::from_bytes(&hex::decode(s)?)
    }

    pub fn from_object(obj: &HeaderObject) -> Result<Self> {
        Ok(Self {
            version: obj.version,
            prev_hash: from_display_hex(&obj.prev_hash)?,
            merkle_root: from_display_hex(&obj.merkle_root)?,
            time: obj.time,
            bits: obj.bits,
            nonce: obj.nonce,
        })
    }

    pub fn serialize(&self, sink: &mut ByteSink) {
        sink.write_i32(self.version)
            .write_bytes(&self.prev_hash)
            .write_bytes(&self.merkle_root)
            .write_u32(self.time)
            .write_u32(self.bits)
            .write_u32(self.nonce);
    }

    pub fn to_bytes(&self) -> [u8; HEADER_SIZE] {
        let mut sink = ByteSink::with_capacity(HEADER_SIZE);
        self.serialize(&mut sink);
        let mut out = [0u8; HEADER_SIZE];
        out.copy_from_slice(sink.as_bytes());
        out
    }

    /// Double SHA-256 of the serialized header, wire order.
    pub fn digest(&self) -> Hash {
        sha256d(&self.to_bytes())
    }

    /// The block id: [`Self::digest`] in display order.
    pub fn id(&self) -> String {
        to_display_hex(&self.digest())
    }

    pub fn to_object(&self) -> HeaderObject {
        HeaderObject {
            hash: self.id(),
            version: self.version,
            prev_hash: to_display_hex(&self.prev_hash),
            merkle_root: to_display_hex(&self.merkle_root),
            time: self.time,
            bits: self.bits,
            nonce: self.nonce,
        }
    }

    pub fn version(&self) -> i32 {
        self.version
    }

    pub fn prev_hash(&self) -> &Hash {
        &self.prev_hash
    }

    pub fn merkle_root(&self) -> &Hash {
        &self.merkle_root
    }

    pub fn time(&self) -> u32 {
        self.time
    }

    pub fn bits(&self) -> u32 {
        self.bits
    }

    pub fn nonce(&self) -> u32 {
        self.nonce
    }

    /// Big-endian 256-bit target encoded by `bits`.
    pub fn target(&self) -> Option<[u8; HASH_SIZE]> {
        compact_to_target(self.bits)
    }
}

/// Decodes compact difficulty bits: `mantissa * 256^(exponent - 3)`.
///
/// Returns `None` for negative encodings and for values that do not fit in 256 bits.
pub fn compact_to_target(bits: u32) -> Option<[u8; HASH_SIZE]> {
    let exponent = (bits >> 24) as usize;
    let mantissa = bits & 0x007f_ffff;
    if mantissa != 0 && bits & 0x0080_0000 != 0 {
        return None;
    }
    let mut out = [0u8; HASH_SIZE];
    let mantissa_bytes = mantissa.to_be_bytes();
    // Byte i of the 3-byte mantissa lands at index 32 - exponent + i.
    for (i, byte) in mantissa_bytes[1..].iter().enumerate() {
        let pos = HASH_SIZE as isize - exponent as isize + i as isize;
        if pos < 0 {
            if *byte != 0 {
                return None;
            }
        } else if (pos as usize) < HASH_SIZE {
            out[pos as usize] = *byte;
        }
    }
    Some(out)
}
