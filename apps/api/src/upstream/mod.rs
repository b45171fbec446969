//! Upstream passthrough — the single point of contact with the external
//! recommendation backend. Responses are surfaced verbatim: the upstream's
//! status code and body travel back to our caller unchanged, and transport
//! failures degrade to an empty list. No retries.

pub mod handlers;

use reqwest::Client;
use serde_json::{json, Value};
use thiserror::Error;

const UPSTREAM_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Error)]
pub enum UpstreamError {
    /// The upstream answered with a non-success status. Carries the exact
    /// status and body for passthrough.
    #[error("upstream returned status {status}")]
    Status { status: u16, body: Value },

    /// The call never completed (connect failure, timeout).
    #[error("upstream transport error: {0}")]
    Transport(#[from] reqwest::Error),
}

#[derive(Clone)]
pub struct UpstreamClient {
    client: Client,
    base_url: String,
}

impl UpstreamClient {
    pub fn new(base_url: String) -> Self {
        Self {
            client: Client::builder()
                .timeout(std::time::Duration::from_secs(UPSTREAM_TIMEOUT_SECS))
                .build()
                .expect("Failed to build HTTP client"),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Forwards a GET with the given query pairs and returns the upstream's
    /// JSON body on success. Non-success responses come back as
    /// [`UpstreamError::Status`] with the body preserved.
    pub async fn forward(
        &self,
        path: &str,
        params: &[(String, String)],
    ) -> Result<Value, UpstreamError> {
        let url = format!("{}{}", self.base_url, path);
        let response = self.client.get(&url).query(params).send().await?;
        let status = response.status();
        let raw = response.text().await?;
        let body = parse_passthrough_body(&raw);

        if status.is_success() {
            Ok(body)
        } else {
            Err(UpstreamError::Status {
                status: status.as_u16(),
                body,
            })
        }
    }
}

/// The only contract on upstream bodies is JSON-parseability toward our
/// caller; anything else is wrapped rather than rejected.
fn parse_passthrough_body(raw: &str) -> Value {
    serde_json::from_str(raw).unwrap_or_else(|_| json!({ "raw": raw }))
}
