// src/client.rs

use reqwest::Client;

use crate::errors::Result;
use crate::relay::{NormalizedResult, RunRequest};
use crate::session::RelayTransport;

/// Talks to a runpad relay endpoint over HTTP. The relay answers every
/// request (validation failures and program failures included) with a
/// normalized JSON body, so any parseable reply is an `Ok` here; only a
/// transport-level failure reaching the relay becomes an error.
pub struct HttpRelayClient {
    client: Client,
    endpoint: String,
}

impl HttpRelayClient {
    /// `endpoint` is the full URL of the relay's execute route,
    /// e.g. `http://127.0.0.1:8080/api/execute`.
    pub fn new(client: Client, endpoint: impl Into<String>) -> Self {
        Self {
            client,
            endpoint: endpoint.into(),
        }
    }
}

impl RelayTransport for HttpRelayClient {
    async fn execute(&self, request: &RunRequest) -> Result<NormalizedResult> {
        let resp = self.client.post(&self.endpoint).json(request).send().await?;
        let result = resp.json().await?;
        Ok(result)
    }
}
