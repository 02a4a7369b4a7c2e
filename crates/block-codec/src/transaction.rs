use crate::cursor::ByteCursor;
use crate::error::{CodecError, Result};
use crate::hash::{from_display_hex, sha256d, to_display_hex, Hash};
use crate::object::{InputObject, OutputObject, TxObject};
use crate::sink::ByteSink;
use serde::{de::DeserializeOwned, Serialize};
use std::fmt::Debug;

/// What a [`crate::Block`] needs from the transactions it carries.
///
/// Parsing and serialization share the block's cursor and sink so a transaction
/// only ever sees its own bytes.
pub trait Transaction: Sized {
    type Object: Serialize + DeserializeOwned + Clone + PartialEq + Debug;

    fn parse(cursor: &mut ByteCursor<'_>) -> Result<Self>;

    fn serialize(&self, sink: &mut ByteSink);

    /// Wire-order digest; this is the merkle leaf.
    fn digest(&self) -> Hash;

    fn id(&self) -> String {
        to_display_hex(&self.digest())
    }

    fn to_object(&self) -> Self::Object;

    fn from_object(obj: &Self::Object) -> Result<Self>;
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TxInput {
    pub prev_tx_id: Hash,
    pub output_index: u32,
    pub script: Vec<u8>,
    pub sequence_number: u32,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TxOutput {
    pub satoshis: u64,
    pub script: Vec<u8>,
}

/// Legacy (pre-segwit) transaction.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Tx {
    pub version: u32,
    pub inputs: Vec<TxInput>,
    pub outputs: Vec<TxOutput>,
    pub lock_time: u32,
}

impl Default for Tx {
    fn default() -> Self {
        Self {
            version: 1,
            inputs: vec![],
            outputs: vec![],
            lock_time: 0,
        }
    }
}

impl Tx {
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut sink = ByteSink::new();
        self.serialize(&mut sink);
        sink.into_bytes()
    }
}

// Counts come from untrusted input, so preallocation is bounded by what is left to read.
fn bounded_capacity(count: usize, cursor: &ByteCursor<'_>, min_item_size: usize) -> usize {
    count.min(cursor.remaining() / min_item_size)
}

impl Transaction for Tx {
    type Object = TxObject;

    fn parse(cursor: &mut ByteCursor<'_>) -> Result<Self> {
        let version = cursor.read_u32()?;

        let n_inputs = cursor.read_len()?;
        let mut inputs = Vec::with_capacity(bounded_capacity(n_inputs, cursor, 41));
        for _ in 0..n_inputs {
            let prev_tx_id = cursor.read_hash()?;
            let output_index = cursor.read_u32()?;
            let script_len = cursor.read_len()?;
            let script = cursor.read_bytes(script_len)?.to_vec();
            let sequence_number = cursor.read_u32()?;
            inputs.push(TxInput {
                prev_tx_id,
                output_index,
                script,
                sequence_number,
            });
        }

        let n_outputs = cursor.read_len()?;
        let mut outputs = Vec::with_capacity(bounded_capacity(n_outputs, cursor, 9));
        for _ in 0..n_outputs {
            let satoshis = cursor.read_u64()?;
            let script_len = cursor.read_len()?;
            let script = cursor.read_bytes(script_len)?.to_vec();
            outputs.push(TxOutput { satoshis, script });
        }

        let lock_time = cursor.read_u32()?;
        Ok(Self {
            version,
            inputs,
            outputs,
            lock_time,
        })
    }

    fn serialize(&self, sink: &mut ByteSink) {
        sink.write_u32(self.version).write_varint(self.inputs.len() as u64);
        for input in &self.inputs {
            sink.write_bytes(&input.prev_tx_id)
                .write_u32(input.output_index)
                .write_var_bytes(&input.script)
                .write_u32(input.sequence_number);
        }
        sink.write_varint(self.outputs.len() as u64);
        for output in &self.outputs {
            sink.write_u64(output.satoshis).write_var_bytes(&output.script);
        }
        sink.write_u32(self.lock_time);
    }

    fn digest(&self) -> Hash {
        sha256d(&self.to_bytes())
    }

    fn to_object(&self) -> TxObject {
        TxObject {
            hash: self.id(),
            version: self.version,
            inputs: self
                .inputs
                .iter()
                .map(|i| InputObject {
                    prev_tx_id: to_display_hex(&i.prev_tx_id),
                    output_index: i.output_index,
                    sequence_number: i.sequence_number,
                    script: hex::encode(&i.script),
                })
                .collect(),
            outputs: self
                .outputs
                .iter()
                .map(|o| OutputObject {
                    satoshis: o.satoshis,
                    script: hex::encode(&o.script),
                })
                .collect(),
            lock_time: self.lock_time,
        }
    }

    fn from_object(obj: &TxObject) -> Result<Self> {
        let inputs = obj
            .inputs
            .iter()
            .map(|i| -> Result<TxInput> {
                Ok(TxInput {
                    prev_tx_id: from_display_hex(&i.prev_tx_id)?,
                    output_index: i.output_index,
                    script: hex::decode(&i.script)?,
                    sequence_number: i.sequence_number,
                })
            })
            .collect::<Result<Vec<_>>>()?;
        let outputs = obj
            .outputs
            .iter()
            .map(|o| -> Result<TxOutput> {
                Ok(TxOutput {
                    satoshis: o.satoshis,
                    script: hex::decode(&o.script)?,
                })
            })
            .collect::<Result<Vec<_>>>()?;
        let tx = Self {
            version: obj.version,
            inputs,
            outputs,
            lock_time: obj.lock_time,
        };
        if !obj.hash.is_empty() && obj.hash != tx.id() {
            return Err(CodecError::InvalidObject(format!(
                "transaction hash {} does not match contents ({})",
                obj.hash,
                tx.id()
            )));
        }
        Ok(tx)
    }
}
