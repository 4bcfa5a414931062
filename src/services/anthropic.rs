use crate::models::MessagesResponse;
use reqwest::Client;
use serde::Serialize;
use std::time::Duration;
use thiserror::Error;

/// Errors that can occur when calling the Anthropic Messages API
#[derive(Debug, Error)]
pub enum AnthropicError {
    #[error("HTTP request failed: {0}")]
    RequestError(#[from] reqwest::Error),

    #[error("authentication failed: invalid API key")]
    Unauthorized,

    #[error("rate limit exceeded")]
    RateLimited,

    #[error("upstream rejected the request: {0}")]
    BadRequest(String),

    #[error("Claude API unavailable")]
    Unavailable,

    #[error("API returned error status {status}: {detail}")]
    ApiError { status: u16, detail: String },

    #[error("Invalid response format: {0}")]
    InvalidResponse(String),
}

pub const DEFAULT_BASE_URL: &str = "https://api.anthropic.com";

const ANTHROPIC_VERSION: &str = "2023-06-01";
const WEB_SEARCH_TOOL_TYPE: &str = "web_search_20250305";
const WEB_SEARCH_TOOL_NAME: &str = "web_search";
const WEB_SEARCH_MAX_USES: u32 = 5;

// Server-side web search dominates latency (tens of seconds), so the
// outbound timeout sits well above an ordinary API round-trip.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(120);

/// Anthropic Messages API client
///
/// Sends a single-turn message with the web search tool enabled and
/// returns the raw content-block sequence for the parser. The base URL is
/// injectable so tests can point the client at a stub server.
pub struct AnthropicClient {
    base_url: String,
    api_key: String,
    model: String,
    max_tokens: u32,
    client: Client,
}

#[derive(Serialize)]
struct MessagesRequest<'a> {
    model: &'a str,
    max_tokens: u32,
    tools: Vec<ToolSpec>,
    messages: Vec<Message<'a>>,
}

#[derive(Serialize)]
struct ToolSpec {
    #[serde(rename = "type")]
    tool_type: &'static str,
    name: &'static str,
    max_uses: u32,
}

#[derive(Serialize)]
struct Message<'a> {
    role: &'static str,
    content: &'a str,
}

impl AnthropicClient {
    /// Create a client against the production API endpoint
    pub fn new(api_key: String, model: String, max_tokens: u32) -> Self {
        Self::with_base_url(DEFAULT_BASE_URL.to_string(), api_key, model, max_tokens)
    }

    /// Create a client against a custom endpoint
    pub fn with_base_url(base_url: String, api_key: String, model: String, max_tokens: u32) -> Self {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .expect("Failed to create HTTP client");

        Self {
            base_url,
            api_key,
            model,
            max_tokens,
            client,
        }
    }

    /// Send one user message with web search enabled (capped at 5 uses)
    pub async fn create_message(&self, prompt: &str) -> Result<MessagesResponse, AnthropicError> {
        let url = format!("{}/v1/messages", self.base_url.trim_end_matches('/'));

        let payload = MessagesRequest {
            model: &self.model,
            max_tokens: self.max_tokens,
            tools: vec![ToolSpec {
                tool_type: WEB_SEARCH_TOOL_TYPE,
                name: WEB_SEARCH_TOOL_NAME,
                max_uses: WEB_SEARCH_MAX_USES,
            }],
            messages: vec![Message {
                role: "user",
                content: prompt,
            }],
        };

        tracing::debug!("Calling Claude Messages API: {}", url);

        let response = self
            .client
            .post(&url)
            .header("x-api-key", &self.api_key)
            .header("anthropic-version", ANTHROPIC_VERSION)
            .json(&payload)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let detail = response
                .text()
                .await
                .ok()
                .and_then(|body| extract_error_message(&body))
                .unwrap_or_else(|| format!("upstream returned status {}", status));

            tracing::error!("Claude API call failed: {} - {}", status, detail);

            return Err(match status.as_u16() {
                401 => AnthropicError::Unauthorized,
                429 => AnthropicError::RateLimited,
                400 => AnthropicError::BadRequest(detail),
                503 | 529 => AnthropicError::Unavailable,
                code => AnthropicError::ApiError {
                    status: code,
                    detail,
                },
            });
        }

        response
            .json()
            .await
            .map_err(|e| AnthropicError::InvalidResponse(e.to_string()))
    }
}

/// Pull the human-readable message out of an Anthropic error body
fn extract_error_message(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    value
        .get("error")?
        .get("message")?
        .as_str()
        .map(|message| message.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_creation() {
        let client = AnthropicClient::new(
            "test_key".to_string(),
            "claude-sonnet-4-20250514".to_string(),
            4096,
        );

        assert_eq!(client.base_url, DEFAULT_BASE_URL);
        assert_eq!(client.api_key, "test_key");
        assert_eq!(client.max_tokens, 4096);
    }

    #[test]
    fn test_extract_error_message() {
        let body = r#"{"type":"error","error":{"type":"invalid_request_error","message":"max_tokens is required"}}"#;
        assert_eq!(
            extract_error_message(body).as_deref(),
            Some("max_tokens is required")
        );

        assert!(extract_error_message("not json").is_none());
        assert!(extract_error_message(r#"{"error":{}}"#).is_none());
    }
}
