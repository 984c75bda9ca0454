//! Historical event lookup.
//!
//! [`HistoricalEventClient`] turns a free-text query into the event prompt,
//! asks the completion service for an answer and hands back the raw text.
//! It does not look at the text; parsing is the HTTP layer's job.

use crate::config::Settings;
use crate::error::EventResult;
use crate::logging::log_info;
use crate::prompt::{build_event_prompt, SYSTEM_PROMPT};
use crate::providers::openai_shared::OpenAIMessage;
use crate::providers::{CompletionParams, OpenAIProvider};
use async_trait::async_trait;

/// Sampling used for event lookups: low temperature, room for the full
/// JSON document.
pub const EVENT_COMPLETION_PARAMS: CompletionParams = CompletionParams {
    temperature: 0.2,
    max_tokens: 1500,
};

/// Source of historical event descriptions.
///
/// The HTTP layer only talks to this trait, so tests can swap in a stub.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait EventSource: Send + Sync {
    /// Return the completion text for `query`, whitespace-trimmed.
    ///
    /// `query` is expected to be non-empty; callers validate it.
    async fn fetch_event(&self, query: &str) -> EventResult<String>;
}

/// [`EventSource`] backed by the OpenAI chat completions API.
#[derive(Debug, Clone)]
pub struct HistoricalEventClient {
    provider: OpenAIProvider,
}

impl HistoricalEventClient {
    pub fn new(settings: &Settings) -> Self {
        Self {
            provider: OpenAIProvider::new(settings),
        }
    }

    /// Messages sent for `query`: persona first, then the prompt.
    pub fn messages_for(query: &str) -> Vec<OpenAIMessage> {
        vec![
            OpenAIMessage::system(SYSTEM_PROMPT),
            OpenAIMessage::user(build_event_prompt(query)),
        ]
    }
}

#[async_trait]
impl EventSource for HistoricalEventClient {
    async fn fetch_event(&self, query: &str) -> EventResult<String> {
        log_info!(query = %query, model = %self.provider.model(), "Fetching historical event");

        let content = self
            .provider
            .complete(Self::messages_for(query), EVENT_COMPLETION_PARAMS)
            .await?;

        Ok(content.trim().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_for_builds_system_then_user() {
        let messages = HistoricalEventClient::messages_for("great depression");

        assert_eq!(messages.len(), 2);
        assert_eq!(messages[0].role, "system");
        assert_eq!(messages[0].content, SYSTEM_PROMPT);
        assert_eq!(messages[1].role, "user");
        assert!(messages[1].content.contains("\"great depression\""));
    }

    #[test]
    fn test_event_completion_params() {
        assert_eq!(EVENT_COMPLETION_PARAMS.temperature, 0.2);
        assert_eq!(EVENT_COMPLETION_PARAMS.max_tokens, 1500);
    }
}
