use crate::constants::{HASH_HEX_SIZE, HASH_SIZE};
use crate::error::{CodecError, Result};
use sha2::{Digest, Sha256};

pub type Hash = [u8; HASH_SIZE];

/// Merkle root of a block without transactions. A sentinel, never the output of hashing.
pub const NULL_HASH: Hash = [0u8; HASH_SIZE];

/// SHA-256 applied twice.
pub fn sha256d(data: &[u8]) -> Hash {
    let first = Sha256::digest(data);
    let second = Sha256::digest(first);
    let mut out = [0u8; HASH_SIZE];
    out.copy_from_slice(&second[..]);
    out
}

/// Hex of a wire-order digest with its bytes reversed, the way ids are shown.
pub fn to_display_hex(hash: &Hash) -> String {
    let mut reversed = *hash;
    reversed.reverse();
    hex::encode(reversed)
}

/// Inverse of [`to_display_hex`]: decode and reverse back into wire order.
pub fn from_display_hex(s: &str) -> Result<Hash> {
    if s.len() != HASH_HEX_SIZE {
        return Err(CodecError::InvalidObject(format!(
            "digest must be {HASH_HEX_SIZE} hex chars, got {}",
            s.len()
        )));
    }
    let mut out = [0u8; HASH_SIZE];
    hex::decode_to_slice(s, &mut out)?;
    out.reverse();
    Ok(out)
}
