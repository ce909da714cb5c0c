//! Transaction lookup service abstraction.
//!
//! Defines the [`TxSource`] trait and provides an HTTP implementation
//! ([`HttpTxSource`]) plus a test mock (`mock::MockSource`).

mod http_adapter;
#[cfg(test)]
pub mod mock;

pub use http_adapter::HttpTxSource;

use async_trait::async_trait;

use crate::error::CoreError;
use crate::types::{TxHash, TxRecord};

/// Minimal capability the crawler needs from a transaction-lookup service.
///
/// Implementations are expected to handle transport, authentication, and
/// response decoding internally; the crawler only sees a document or an
/// error per hash.
#[async_trait]
pub trait TxSource: Send + Sync {
    /// Fetch the full transaction document for a hash.
    async fn fetch(&self, hash: &TxHash) -> Result<TxRecord, CoreError>;
}
