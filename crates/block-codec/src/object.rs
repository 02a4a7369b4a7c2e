//! Structured (JSON) forms of blocks and transactions.
//!
//! Digests appear as display-order hex, scripts as plain hex, and numeric header
//! fields as plain integers.

use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockObject<O> {
    pub header: HeaderObject,
    pub transactions: Vec<O>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HeaderObject {
    /// Block id. Derived from the other fields, so it is ignored on input.
    #[serde(default)]
    pub hash: String,
    pub version: i32,
    pub prev_hash: String,
    pub merkle_root: String,
    pub time: u32,
    pub bits: u32,
    pub nonce: u32,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TxObject {
    /// Transaction id. When present on input it must match the rebuilt transaction.
    #[serde(default)]
    pub hash: String,
    pub version: u32,
    pub inputs: Vec<InputObject>,
    pub outputs: Vec<OutputObject>,
    #[serde(rename = "nLockTime")]
    pub lock_time: u32,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InputObject {
    pub prev_tx_id: String,
    pub output_index: u32,
    pub sequence_number: u32,
    pub script: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputObject {
    pub satoshis: u64,
    pub script: String,
}
