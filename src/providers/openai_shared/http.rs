//! HTTP client functionality for OpenAI-compatible providers
//!
//! One POST per call. Non-success statuses are turned into [`LlmError`]
//! variants here so callers never see raw `reqwest` errors.

use super::types::{OpenAIRequest, OpenAIResponse};
use crate::error::{LlmError, LlmResult};
use crate::logging::{log_debug, log_error};
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE};

/// Seconds to wait after a 429 that carries no usable `Retry-After` header.
const DEFAULT_RETRY_AFTER_SECONDS: u64 = 60;

/// Shared HTTP client for OpenAI-compatible providers
#[derive(Debug, Clone, Default)]
pub struct OpenAICompatibleClient {
    client: reqwest::Client,
}

impl OpenAICompatibleClient {
    /// Create a new OpenAI-compatible HTTP client
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::new(),
        }
    }

    /// Execute a chat completion request
    pub async fn execute_chat_request(
        &self,
        url: &str,
        headers: &HeaderMap,
        request: &OpenAIRequest,
    ) -> LlmResult<OpenAIResponse> {
        log_debug!(
            url = %url,
            model = %request.model,
            message_count = request.messages.len(),
            "Sending OpenAI-compatible request"
        );

        let response = self
            .client
            .post(url)
            .headers(headers.clone())
            .json(request)
            .send()
            .await
            .map_err(|e| {
                log_error!(
                    url = %url,
                    error = %e,
                    "HTTP request failed"
                );
                LlmError::request_failed(format!("Request failed: {e}"), Some(Box::new(e)))
            })?;

        if !response.status().is_success() {
            return Err(handle_error_response(response).await);
        }

        parse_success_response(response).await
    }

    /// Build authentication headers for OpenAI-compatible APIs
    pub fn build_auth_headers(api_key: &str) -> LlmResult<HeaderMap> {
        let mut headers = HeaderMap::new();

        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(
            AUTHORIZATION,
            HeaderValue::from_str(&format!("Bearer {api_key}")).map_err(|e| {
                LlmError::configuration_error(format!("Invalid API key format: {e}"))
            })?,
        );

        Ok(headers)
    }
}

/// Handle non-success HTTP responses
async fn handle_error_response(response: reqwest::Response) -> LlmError {
    let status = response.status();
    let retry_after = response
        .headers()
        .get("retry-after")
        .and_then(|h| h.to_str().ok())
        .and_then(|s| s.trim().parse::<u64>().ok());
    let error_text = response
        .text()
        .await
        .unwrap_or_else(|_| "Unknown error".to_string());

    log_error!(
        status = %status,
        error_text = %error_text,
        "API error response"
    );

    match status.as_u16() {
        401 => match upstream_error_message(&error_text) {
            Some(message) => LlmError::authentication_failed(message),
            None => LlmError::authentication_failed("Authentication failed"),
        },
        429 => LlmError::rate_limit_exceeded(retry_after.unwrap_or(DEFAULT_RETRY_AFTER_SECONDS)),
        _ => LlmError::request_failed(format!("API error {status}: {error_text}"), None),
    }
}

/// Pull `error.message` out of an OpenAI error body, if it has one.
fn upstream_error_message(error_text: &str) -> Option<String> {
    let error_json = serde_json::from_str::<serde_json::Value>(error_text).ok()?;
    error_json
        .get("error")?
        .get("message")?
        .as_str()
        .map(str::to_string)
}

/// Parse successful HTTP response into OpenAIResponse
async fn parse_success_response(response: reqwest::Response) -> LlmResult<OpenAIResponse> {
    let raw_body = response.text().await.map_err(|e| {
        log_error!(
            error = %e,
            "Failed to read response body"
        );
        LlmError::response_parsing_error(format!("Failed to read response: {e}"))
    })?;

    serde_json::from_str(&raw_body).map_err(|e| {
        log_error!(
            error = %e,
            raw_body = %raw_body,
            "Failed to parse response"
        );
        LlmError::response_parsing_error(format!("Invalid response: {e}"))
    })
}
