use std::time::Duration;

use async_trait::async_trait;
use reqwest::StatusCode;
use tracing::{debug, trace};

use crate::error::CoreError;
use crate::types::{TxHash, TxRecord};

use super::TxSource;

// ==============================================================================
// HttpTxSource — GET-by-hash client for transaction-indexing services
// ==============================================================================

/// HTTP client for a BlockCypher-style transaction lookup endpoint.
///
/// Requests are plain `GET {base_url}/txs/{hash}`; an optional API token is
/// appended as a `token` query parameter. HTTP 404 maps to
/// [`CoreError::TxNotFound`], other failures to [`CoreError::Transport`].
pub struct HttpTxSource {
    client: reqwest::Client,
    base_url: String,
    token: Option<String>,
}

impl HttpTxSource {
    pub fn new(base_url: &str, token: Option<&str>) -> Self {
        let client = reqwest::Client::builder()
            .connect_timeout(Duration::from_secs(10))
            .timeout(Duration::from_secs(30))
            .build()
            .expect("reqwest client builder uses valid static config");

        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_owned(),
            token: token.map(str::to_owned),
        }
    }

    fn tx_url(&self, hash: &TxHash) -> String {
        format!("{}/txs/{}", self.base_url, hash)
    }
}

#[async_trait]
impl TxSource for HttpTxSource {
    async fn fetch(&self, hash: &TxHash) -> Result<TxRecord, CoreError> {
        let url = self.tx_url(hash);
        debug!(tx.hash = %hash, %url, "fetching transaction");

        let mut builder = self.client.get(&url);
        if let Some(token) = &self.token {
            builder = builder.query(&[("token", token.as_str())]);
        }

        let response = builder
            .send()
            .await
            .map_err(|e| CoreError::Transport(format!("HTTP error: {e}")))?;
        let status = response.status();

        if status == StatusCode::NOT_FOUND {
            return Err(CoreError::TxNotFound(hash.clone()));
        }

        let body = response
            .text()
            .await
            .map_err(|e| CoreError::Transport(format!("read response body: {e}")))?;
        debug!(tx.hash = %hash, %status, body_len = body.len(), "lookup response");
        trace!(tx.hash = %hash, body = %body, "lookup response body");

        if !status.is_success() {
            return Err(CoreError::Transport(format!(
                "lookup returned {status} for {hash}"
            )));
        }

        serde_json::from_str(&body)
            .map_err(|e| CoreError::InvalidRecord(format!("decode transaction document: {e}")))
    }
}
