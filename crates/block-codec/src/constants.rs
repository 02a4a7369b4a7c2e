pub const HASH_SIZE: usize = 32;
pub const HASH_HEX_SIZE: usize = HASH_SIZE * 2;
pub const HEADER_SIZE: usize = 80;
/// Framing bytes a node's raw block endpoint puts in front of the canonical block.
pub const RAW_BLOCK_PREFIX_SIZE: usize = 8;
/// Merkle levels with at least this many nodes hash their pairs on the rayon pool.
pub const PARALLEL_MERKLE_THRESHOLD: usize = 2048;
