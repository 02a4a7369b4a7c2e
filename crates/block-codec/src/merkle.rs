use crate::constants::{HASH_SIZE, PARALLEL_MERKLE_THRESHOLD};
use crate::hash::{sha256d, Hash, NULL_HASH};
use crate::header::BlockHeader;
use crate::transaction::Transaction;
use rayon::prelude::*;
use tracing::debug;

fn hash_pair(pair: &[Hash]) -> Hash {
    let mut buf = [0u8; HASH_SIZE * 2];
    buf[..HASH_SIZE].copy_from_slice(&pair[0]);
    buf[HASH_SIZE..].copy_from_slice(&pair[1]);
    sha256d(&buf)
}

/// Merkle root over wire-order leaf digests.
///
/// An odd level has its last node duplicated before pairing. A single leaf is its own
/// root and an empty list yields [`NULL_HASH`].
pub fn compute_root(leaves: &[Hash]) -> Hash {
    if leaves.is_empty() {
        return NULL_HASH;
    }
    let mut level = leaves.to_vec();
    while level.len() > 1 {
        if level.len() % 2 == 1 {
            let last = level[level.len() - 1];
            level.push(last);
        }
        level = if level.len() >= PARALLEL_MERKLE_THRESHOLD {
            level.par_chunks(2).map(hash_pair).collect()
        } else {
            level.chunks(2).map(hash_pair).collect()
        };
    }
    level[0]
}

/// True when the root over `transactions` equals the root committed in `header`.
pub fn validate<T: Transaction>(header: &BlockHeader, transactions: &[T]) -> bool {
    let leaves: Vec<Hash> = transactions.iter().map(Transaction::digest).collect();
    let computed = compute_root(&leaves);
    let valid = &computed == header.merkle_root();
    if !valid {
        debug!(
            txs = transactions.len(),
            computed = %hex::encode(computed),
            committed = %hex::encode(header.merkle_root()),
            "merkle root mismatch"
        );
    }
    valid
}
