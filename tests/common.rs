//! Test helper utilities for historical-events-api integration tests
//!
//! IMPORTANT: These helpers are test-only and should NEVER be used in production code.

// Allow dead code in test utilities - functions are used across different test files
#![allow(dead_code)]

use historical_events_api::Settings;
use serde_json::{json, Value};
use wiremock::MockServer;

pub const TEST_API_KEY: &str = "test-openai-key";
pub const COMPLETIONS_PATH: &str = "/v1/chat/completions";

/// Settings pointing the completion client at `mock_server`.
pub fn settings_for(mock_server: &MockServer) -> Settings {
    Settings {
        openai_api_key: TEST_API_KEY.to_string(),
        openai_base_url: mock_server.uri(),
        ..Settings::default()
    }
}

/// Chat completion body whose single choice carries `content`.
pub fn completion_body(content: &str) -> Value {
    json!({
        "id": "chatcmpl-test",
        "object": "chat.completion",
        "model": "gpt-3.5-turbo",
        "choices": [{
            "index": 0,
            "message": {"role": "assistant", "content": content},
            "finish_reason": "stop"
        }],
        "usage": {"prompt_tokens": 512, "completion_tokens": 64, "total_tokens": 576}
    })
}

/// OpenAI-style error body.
pub fn error_body(message: &str, code: &str) -> Value {
    json!({
        "error": {
            "message": message,
            "type": "invalid_request_error",
            "code": code
        }
    })
}
