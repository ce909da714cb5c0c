//! Shared test helpers for `txharvest-core` unit tests.
//!
//! Consolidates builder functions for transaction documents and the
//! in-memory / always-failing store implementations so tests across modules
//! share one source of dummy data construction.

use crate::error::CoreError;
use crate::store::TxStore;
use crate::types::{TxHash, TxInput, TxOutput, TxRecord};

/// Create a deterministic hash from a single distinguishing byte. Useful
/// for building small test graphs where hashes only need to be unique.
pub fn hash_from_byte(b: u8) -> TxHash {
    TxHash::new(format!("{b:02x}").repeat(32))
}

/// Build a transaction document with empty opaque payload.
pub fn make_record(hash: Option<TxHash>, inputs: Vec<TxInput>, outputs: Vec<TxOutput>) -> TxRecord {
    TxRecord {
        hash,
        block_hash: None,
        inputs,
        outputs,
        payload: serde_json::Map::new(),
    }
}

/// An input funded by `prev`.
pub fn spending_input(prev: &TxHash) -> TxInput {
    TxInput {
        prev_hash: Some(prev.clone()),
        payload: serde_json::Map::new(),
    }
}

/// A coinbase-style input with no funding transaction.
pub fn open_input() -> TxInput {
    TxInput {
        prev_hash: None,
        payload: serde_json::Map::new(),
    }
}

/// An output already spent by `spender`.
pub fn spent_output(spender: &TxHash) -> TxOutput {
    TxOutput {
        spent_by: Some(spender.clone()),
        payload: serde_json::Map::new(),
    }
}

/// An output not yet spent.
pub fn unspent_output() -> TxOutput {
    TxOutput {
        spent_by: None,
        payload: serde_json::Map::new(),
    }
}

/// Collects appended documents in memory.
#[derive(Default)]
pub struct MemoryStore {
    pub records: Vec<TxRecord>,
}

impl TxStore for MemoryStore {
    fn append(&mut self, record: &TxRecord) -> Result<(), CoreError> {
        self.records.push(record.clone());
        Ok(())
    }
}

/// Rejects every append, for exercising persistence-failure paths.
pub struct FailingStore;

impl TxStore for FailingStore {
    fn append(&mut self, _record: &TxRecord) -> Result<(), CoreError> {
        Err(CoreError::Io(std::io::Error::other("store unavailable")))
    }
}
