//! OpenAI provider implementation
//!
//! This provider uses the OpenAI-compatible shared structures and utilities.

use super::openai_shared::{OpenAICompatibleClient, OpenAIMessage, OpenAIRequest, OpenAIResponse};
use crate::config::Settings;
use crate::error::{LlmError, LlmResult};
use crate::logging::log_debug;
use std::time::Instant;

/// Sampling parameters for a single completion.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CompletionParams {
    pub temperature: f64,
    pub max_tokens: u32,
}

/// OpenAI provider implementation
#[derive(Debug, Clone)]
pub struct OpenAIProvider {
    http_client: OpenAICompatibleClient,
    api_key: String,
    base_url: String,
    model: String,
}

impl OpenAIProvider {
    /// Create a provider from settings.
    ///
    /// An empty API key is accepted; the service rejects the first call
    /// with an authentication error instead.
    pub fn new(settings: &Settings) -> Self {
        log_debug!(
            provider = "openai",
            has_api_key = !settings.openai_api_key.is_empty(),
            base_url = %settings.openai_base_url,
            model = %settings.openai_model,
            "Creating OpenAI provider"
        );

        Self {
            http_client: OpenAICompatibleClient::new(),
            api_key: settings.openai_api_key.clone(),
            base_url: settings.openai_base_url.trim_end_matches('/').to_string(),
            model: settings.openai_model.clone(),
        }
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    /// Full chat completions endpoint URL.
    pub fn completions_url(&self) -> String {
        format!("{}/v1/chat/completions", self.base_url)
    }

    fn create_request(
        &self,
        messages: Vec<OpenAIMessage>,
        params: CompletionParams,
    ) -> OpenAIRequest {
        OpenAIRequest {
            model: self.model.clone(),
            messages,
            temperature: Some(params.temperature),
            max_tokens: Some(params.max_tokens),
        }
    }

    /// Send messages and return the text of the top choice.
    pub async fn complete(
        &self,
        messages: Vec<OpenAIMessage>,
        params: CompletionParams,
    ) -> LlmResult<String> {
        let request = self.create_request(messages, params);
        let headers = OpenAICompatibleClient::build_auth_headers(&self.api_key)?;

        let start_time = Instant::now();
        let response = self
            .http_client
            .execute_chat_request(&self.completions_url(), &headers, &request)
            .await?;
        let duration_ms = start_time.elapsed().as_millis() as u64;

        log_debug!(
            provider = "openai",
            model = %self.model,
            duration_ms = duration_ms,
            prompt_tokens = response.usage.as_ref().map(|u| u.prompt_tokens).unwrap_or(0),
            completion_tokens = response.usage.as_ref().map(|u| u.completion_tokens).unwrap_or(0),
            "Received completion"
        );

        first_choice_content(response)
    }
}

/// Text of the first choice, or an error when there are none.
fn first_choice_content(response: OpenAIResponse) -> LlmResult<String> {
    response
        .choices
        .into_iter()
        .next()
        .map(|choice| choice.message.content)
        .ok_or_else(|| LlmError::response_parsing_error("No choices in OpenAI response"))
}
