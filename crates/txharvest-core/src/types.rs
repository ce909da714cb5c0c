//! Domain types for the transaction dataset crawler.
//!
//! Transaction documents are semi-structured: only the fields the crawler
//! interprets (`hash`, `block_hash`, input `prev_hash`, output `spent_by`)
//! are typed, everything else is carried as opaque payload and written back
//! verbatim on persistence.

use serde::{Deserialize, Serialize};

// ==============================================================================
// Transaction Hash
// ==============================================================================

/// An opaque transaction identifier.
///
/// No internal structure is interpreted; the hash is only compared, hashed,
/// and used as a lookup key. `#[serde(transparent)]` keeps the JSON
/// representation a bare string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TxHash(String);

impl TxHash {
    pub fn new(hash: impl Into<String>) -> Self {
        Self(hash.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for TxHash {
    fn from(s: &str) -> Self {
        Self(s.to_owned())
    }
}

impl From<String> for TxHash {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl std::fmt::Display for TxHash {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

// ==============================================================================
// Transaction Documents
// ==============================================================================

/// A transaction document as returned by the lookup service.
///
/// `inputs` and `outputs` default to empty when the document lacks them, so
/// a sparse or unusual document still deserializes and simply references
/// nothing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TxRecord {
    /// The document's own transaction hash, when it carries one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hash: Option<TxHash>,
    /// Hash of the containing block; absent for unconfirmed transactions.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub block_hash: Option<String>,
    #[serde(default)]
    pub inputs: Vec<TxInput>,
    #[serde(default)]
    pub outputs: Vec<TxOutput>,
    /// Everything else in the document, preserved verbatim.
    #[serde(flatten)]
    pub payload: serde_json::Map<String, serde_json::Value>,
}

/// A transaction input. `prev_hash` names the funding transaction; inputs
/// without one (coinbase-style) fund nothing traversable.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TxInput {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prev_hash: Option<TxHash>,
    #[serde(flatten)]
    pub payload: serde_json::Map<String, serde_json::Value>,
}

/// A transaction output. `spent_by` names the spending transaction; an
/// output not yet spent has no `spent_by`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TxOutput {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub spent_by: Option<TxHash>,
    #[serde(flatten)]
    pub payload: serde_json::Map<String, serde_json::Value>,
}
