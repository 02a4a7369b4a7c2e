//! Codec for Litecoin-family blocks: canonical binary, hex, the structured JSON form
//! and the raw form served by a node's block endpoint, plus block ids and merkle roots.

pub mod block;
pub mod constants;
pub mod cursor;
pub mod error;
pub mod hash;
pub mod header;
pub mod merkle;
pub mod object;
pub mod sink;
pub mod transaction;

pub use block::Block;
pub use cursor::ByteCursor;
pub use error::{CodecError, Result};
pub use hash::{Hash, NULL_HASH};
pub use header::BlockHeader;
pub use object::{BlockObject, HeaderObject, InputObject, OutputObject, TxObject};
pub use sink::ByteSink;
pub use transaction::{Transaction, Tx, TxInput, TxOutput};
