use crate::constants::{HEADER_SIZE, RAW_BLOCK_PREFIX_SIZE};
use crate::cursor::ByteCursor;
use crate::error::{CodecError, Result};
use crate::hash::{to_display_hex, Hash};
use crate::header::BlockHeader;
use crate::merkle;
use crate::object::BlockObject;
use crate::sink::ByteSink;
use crate::transaction::{Transaction, Tx};
use serde_json::Value;
use std::fmt;
use std::str::FromStr;
use tracing::{debug, trace};

/// A block header and the transactions it commits to.
///
/// Both fields are public: callers may swap the header or edit the transaction list.
/// Nothing here is cached, so ids and merkle checks always reflect the current state,
/// and a block whose transactions disagree with its header is representable.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Block<T = Tx> {
    pub header: BlockHeader,
    pub transactions: Vec<T>,
}

impl<T: Transaction> Block<T> {
    pub fn new(header: BlockHeader, transactions: Vec<T>) -> Self {
        Self {
            header,
            transactions,
        }
    }

    /// Parses a header, a varint transaction count and that many transactions.
    /// Bytes after the last transaction are left in the cursor.
    pub fn from_cursor(cursor: &mut ByteCursor<'_>) -> Result<Self> {
        let header = BlockHeader::parse(cursor)?;
        let count = cursor.read_len()?;
        // A transaction is at least 10 bytes on the wire.
        let mut transactions = Vec::with_capacity(count.min(cursor.remaining() / 10));
        for _ in 0..count {
            transactions.push(T::parse(cursor)?);
        }
        let block = Self::new(header, transactions);
        debug!(id = %block.id(), txs = count, "parsed block");
        Ok(block)
    }

    pub fn from_buffer(bytes: &[u8]) -> Result<Self> {
        let mut cursor = ByteCursor::new(bytes);
        let block = Self::from_cursor(&mut cursor)?;
        if !cursor.is_empty() {
            trace!(trailing = cursor.remaining(), "ignoring bytes after block");
        }
        Ok(block)
    }

    pub fn from_string(s: &str) -> Result<Self> {
        Self::from_buffer(&hex::decode(s.trim())?)
    }

    /// Parses a node's raw block response: 8 framing bytes, never inspected, then
    /// the canonical block.
    pub fn from_raw_block(bytes: &[u8]) -> Result<Self> {
        let mut cursor = ByteCursor::new(bytes);
        cursor.read_bytes(RAW_BLOCK_PREFIX_SIZE)?;
        Self::from_cursor(&mut cursor)
    }

    pub fn from_object(obj: &BlockObject<T::Object>) -> Result<Self> {
        let header = BlockHeader::from_object(&obj.header)?;
        let transactions = obj
            .transactions
            .iter()
            .map(T::from_object)
            .collect::<Result<Vec<_>>>()?;
        Ok(Self::new(header, transactions))
    }

    pub fn from_json(json: &str) -> Result<Self> {
        let obj: BlockObject<T::Object> = serde_json::from_str(json)?;
        Self::from_object(&obj)
    }

    /// Builds a block from whatever shape `input` has: a hex string, the object
    /// form, or an array of byte values.
    pub fn from_input(input: Option<&Value>) -> Result<Self> {
        let unrecognized =
            |shape: &str| -> Result<Self> { Err(CodecError::UnrecognizedArgument(shape.into())) };
        match input {
            None => unrecognized("no argument"),
            Some(Value::String(s)) => Self::from_string(s),
            Some(v @ Value::Object(_)) => {
                let obj: BlockObject<T::Object> = serde_json::from_value(v.clone())?;
                Self::from_object(&obj)
            }
            Some(Value::Array(items)) => {
                let bytes = items
                    .iter()
                    .map(|item| item.as_u64().and_then(|n| u8::try_from(n).ok()))
                    .collect::<Option<Vec<u8>>>();
                match bytes {
                    Some(bytes) => Self::from_buffer(&bytes),
                    None => unrecognized("array of non-byte values"),
                }
            }
            Some(Value::Null) => unrecognized("null"),
            Some(Value::Bool(_)) => unrecognized("boolean"),
            Some(Value::Number(_)) => unrecognized("number"),
        }
    }

    pub fn to_buffer(&self) -> Vec<u8> {
        let mut sink = ByteSink::with_capacity(HEADER_SIZE + 1);
        self.to_buffer_into(&mut sink);
        sink.into_bytes()
    }

    /// Appends the block to `sink` and hands the same sink back.
    pub fn to_buffer_into<'s>(&self, sink: &'s mut ByteSink) -> &'s mut ByteSink {
        self.header.serialize(sink);
        sink.write_varint(self.transactions.len() as u64);
        for tx in &self.transactions {
            tx.serialize(sink);
        }
        sink
    }

    pub fn to_hex(&self) -> String {
        hex::encode(self.to_buffer())
    }

    pub fn size(&self) -> usize {
        self.to_buffer().len()
    }

    pub fn to_object(&self) -> BlockObject<T::Object> {
        BlockObject {
            header: self.header.to_object(),
            transactions: self.transactions.iter().map(T::to_object).collect(),
        }
    }

    /// Same content as [`Self::to_object`], as a JSON value.
    pub fn to_json(&self) -> Result<Value> {
        Ok(serde_json::to_value(self.to_object())?)
    }

    pub fn to_json_string(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(&self.to_object())?)
    }

    /// Wire-order header digest.
    pub fn digest(&self) -> Hash {
        self.header.digest()
    }

    pub fn id(&self) -> String {
        self.header.id()
    }

    /// Alias of [`Self::id`].
    pub fn hash(&self) -> String {
        self.id()
    }

    /// Merkle root over the current transactions.
    pub fn merkle_root(&self) -> Hash {
        let leaves: Vec<Hash> = self.transactions.iter().map(T::digest).collect();
        merkle::compute_root(&leaves)
    }

    pub fn merkle_root_hex(&self) -> String {
        to_display_hex(&self.merkle_root())
    }

    pub fn valid_merkle_root(&self) -> bool {
        merkle::validate(&self.header, &self.transactions)
    }

    pub fn inspect(&self) -> String {
        format!("<Block {}>", self.id())
    }
}

impl<T: Transaction> fmt::Display for Block<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl<T: Transaction> FromStr for Block<T> {
    type Err = CodecError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_string(s)
    }
}
