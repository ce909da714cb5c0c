use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;

use crate::error::CoreError;
use crate::types::{TxHash, TxRecord};

use super::TxSource;

/// A mock lookup service for testing. Returns canned documents from a
/// `HashMap` populated via the builder pattern, and logs every fetch so
/// tests can assert call counts.
pub struct MockSource {
    records: HashMap<TxHash, TxRecord>,
    fetch_log: Mutex<Vec<TxHash>>,
}

impl MockSource {
    pub fn builder() -> MockSourceBuilder {
        MockSourceBuilder {
            records: HashMap::new(),
        }
    }

    /// Every hash fetched so far, in call order.
    pub fn fetch_log(&self) -> Vec<TxHash> {
        self.fetch_log
            .lock()
            .expect("fetch log lock never poisoned")
            .clone()
    }

    pub fn fetch_count(&self, hash: &TxHash) -> usize {
        self.fetch_log().iter().filter(|h| *h == hash).count()
    }
}

pub struct MockSourceBuilder {
    records: HashMap<TxHash, TxRecord>,
}

impl MockSourceBuilder {
    /// Register a document under its own `hash` field.
    pub fn with_record(mut self, record: TxRecord) -> Self {
        let hash = record.hash.clone().expect("mock records must carry a hash");
        self.records.insert(hash, record);
        self
    }

    pub fn build(self) -> MockSource {
        MockSource {
            records: self.records,
            fetch_log: Mutex::new(Vec::new()),
        }
    }
}

#[async_trait]
impl TxSource for MockSource {
    async fn fetch(&self, hash: &TxHash) -> Result<TxRecord, CoreError> {
        self.fetch_log
            .lock()
            .expect("fetch log lock never poisoned")
            .push(hash.clone());
        self.records
            .get(hash)
            .cloned()
            .ok_or_else(|| CoreError::TxNotFound(hash.clone()))
    }
}
