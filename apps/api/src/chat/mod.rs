//! Chat proxy client — the single point of entry for generative-language
//! API calls. Counselling chat requests are forwarded as-is; no other
//! module may call the API directly.
//!
//! Retry policy: an upstream 429 triggers exactly one retry on the
//! fallback model. No backoff, no schedule; every other failure surfaces
//! to the caller unchanged.

pub mod handlers;

use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

const GENERATIVE_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta/models";
pub const PRIMARY_MODEL: &str = "gemini-1.5-flash";
pub const FALLBACK_MODEL: &str = "gemini-1.5-flash-8b";
const CHAT_TIMEOUT_SECS: u64 = 60;

#[derive(Debug, Error)]
pub enum ChatError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("model returned no reply text")]
    EmptyReply,
}

/// One turn of the conversation as the front-end sends it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
}

#[derive(Debug, Serialize)]
struct GenerateRequest {
    contents: Vec<Content>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Content {
    role: String,
    parts: Vec<Part>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Part {
    text: String,
}

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Content,
}

#[derive(Debug, Deserialize)]
struct ApiError {
    error: ApiErrorBody,
}

#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    message: String,
}

/// The reply handed back to the front-end, tagged with the model that
/// actually answered.
#[derive(Debug, Serialize)]
pub struct ChatReply {
    pub reply: String,
    pub model: String,
}

/// The generative-language API speaks `user`/`model`; the front-end speaks
/// `user`/`assistant`.
fn wire_role(role: &str) -> &'static str {
    match role {
        "assistant" | "model" => "model",
        _ => "user",
    }
}

/// Only a rate-limit response moves the request to the fallback model.
fn should_fall_back(status: u16) -> bool {
    status == 429
}

#[derive(Clone)]
pub struct ChatClient {
    client: Client,
    api_key: String,
}

impl ChatClient {
    pub fn new(api_key: String) -> Self {
        Self {
            client: Client::builder()
                .timeout(std::time::Duration::from_secs(CHAT_TIMEOUT_SECS))
                .build()
                .expect("Failed to build HTTP client"),
            api_key,
        }
    }

    /// Forwards the message list, falling back to [`FALLBACK_MODEL`] on a
    /// single 429.
    pub async fn complete(&self, messages: &[ChatMessage]) -> Result<ChatReply, ChatError> {
        match self.call_model(PRIMARY_MODEL, messages).await {
            Err(ChatError::Api { status, message }) if should_fall_back(status) => {
                warn!("{PRIMARY_MODEL} rate limited ({message}); retrying once on {FALLBACK_MODEL}");
                self.call_model(FALLBACK_MODEL, messages).await
            }
            other => other,
        }
    }

    async fn call_model(
        &self,
        model: &str,
        messages: &[ChatMessage],
    ) -> Result<ChatReply, ChatError> {
        let request_body = GenerateRequest {
            contents: messages
                .iter()
                .map(|m| Content {
                    role: wire_role(&m.role).to_string(),
                    parts: vec![Part {
                        text: m.content.clone(),
                    }],
                })
                .collect(),
        };

        let url = format!("{GENERATIVE_API_BASE}/{model}:generateContent");
        let response = self
            .client
            .post(&url)
            .query(&[("key", self.api_key.as_str())])
            .json(&request_body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<ApiError>(&body)
                .map(|e| e.error.message)
                .unwrap_or(body);
            return Err(ChatError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let parsed: GenerateResponse = response.json().await?;
        let reply = extract_reply(&parsed).ok_or(ChatError::EmptyReply)?;
        debug!("Chat reply from {model}: {} chars", reply.len());

        Ok(ChatReply {
            reply,
            model: model.to_string(),
        })
    }
}

fn extract_reply(response: &GenerateResponse) -> Option<String> {
    let candidate = response.candidates.first()?;
    let text: Vec<&str> = candidate
        .content
        .parts
        .iter()
        .map(|p| p.text.as_str())
        .filter(|t| !t.is_empty())
        .collect();
    if text.is_empty() {
        None
    } else {
        Some(text.join("\n"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_role_maps_assistant_to_model() {
        assert_eq!(wire_role("assistant"), "model");
        assert_eq!(wire_role("model"), "model");
        assert_eq!(wire_role("user"), "user");
        assert_eq!(wire_role("system"), "user");
    }

    #[test]
    fn test_only_429_falls_back() {
        assert!(should_fall_back(429));
        assert!(!should_fall_back(400));
        assert!(!should_fall_back(500));
        assert!(!should_fall_back(503));
    }

    #[test]
    fn test_extract_reply_joins_parts() {
        let response: GenerateResponse = serde_json::from_str(
            r#"{
                "candidates": [{
                    "content": {
                        "role": "model",
                        "parts": [{"text": "NIT Trichy"}, {"text": "fits your rank."}]
                    }
                }]
            }"#,
        )
        .unwrap();
        assert_eq!(
            extract_reply(&response).unwrap(),
            "NIT Trichy\nfits your rank."
        );
    }

    #[test]
    fn test_extract_reply_empty_candidates_is_none() {
        let response: GenerateResponse = serde_json::from_str("{}").unwrap();
        assert!(extract_reply(&response).is_none());
    }
}
