// src/backend/piston.rs

use reqwest::Client;

use crate::backend::ExecutionBackend;
use crate::config::BackendConfig;
use crate::errors::{RelayError, Result};
use crate::relay::{BackendPayload, BackendResponse, RunOutcome};

/// Client for the public Piston execution API.
pub struct PistonBackend {
    client: Client,
    config: BackendConfig,
}

impl PistonBackend {
    /// Creates a new `PistonBackend` on a shared HTTP client.
    pub fn new(client: Client, config: BackendConfig) -> Self {
        Self { client, config }
    }
}

impl ExecutionBackend for PistonBackend {
    /// Issues exactly one `POST /execute` call. No retry, no backoff, no
    /// relay-side timeout; the payload's own compile/run limits are the only
    /// deadline.
    async fn run(&self, payload: &BackendPayload) -> Result<RunOutcome> {
        let url = format!("{}/execute", self.config.api_base.trim_end_matches('/'));

        log::debug!(
            "submitting {} ({}) run to {}",
            payload.language,
            payload.version,
            url
        );

        let resp = self.client.post(&url).json(payload).send().await?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp
                .text()
                .await
                .unwrap_or_else(|_| "Could not read error body".to_string());
            return Err(RelayError::BackendStatus {
                status: status.as_u16(),
                body,
            });
        }

        let parsed: BackendResponse = resp.json().await?;
        Ok(parsed.run)
    }
}
