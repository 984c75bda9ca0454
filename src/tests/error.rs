// Unit Tests for Error Handling
//
// UNIT UNDER TEST: LlmError, EventError
//
// BUSINESS RESPONSIBILITY:
//   - Categorizes completion service failures for logging
//   - Collapses every completion failure into one generic lookup error
//   - Preserves the upstream message text through the collapse
//
// TEST COVERAGE:
//   - Category for each LlmError variant
//   - Display text of constructors
//   - LlmError -> EventError conversion keeps the message

use crate::error::{ErrorCategory, EventError, LlmError};

#[cfg(test)]
mod llm_error_categorization_tests {
    use super::*;

    #[test]
    fn test_configuration_error_is_client() {
        let error = LlmError::configuration_error("Invalid API key format");

        assert_eq!(error.category(), ErrorCategory::Client);
        assert_eq!(
            error.to_string(),
            "Provider configuration error: Invalid API key format"
        );
    }

    #[test]
    fn test_request_failed_is_external() {
        let error = LlmError::request_failed("API error 500 Internal Server Error: boom", None);

        assert_eq!(error.category(), ErrorCategory::External);
        assert_eq!(
            error.to_string(),
            "Request failed: API error 500 Internal Server Error: boom"
        );
    }

    #[test]
    fn test_rate_limit_is_transient() {
        let error = LlmError::rate_limit_exceeded(20);

        assert_eq!(error.category(), ErrorCategory::Transient);
        assert_eq!(error.to_string(), "Rate limit exceeded, retry after 20s");
    }

    #[test]
    fn test_authentication_failed_is_client() {
        let error = LlmError::authentication_failed("Incorrect API key provided");

        assert_eq!(error.category(), ErrorCategory::Client);
        assert_eq!(error.category().as_str(), "client");
    }

    #[test]
    fn test_response_parsing_error_is_external() {
        let error = LlmError::response_parsing_error("No choices in OpenAI response");

        assert_eq!(error.category(), ErrorCategory::External);
    }
}

#[cfg(test)]
mod event_error_conversion_tests {
    use super::*;

    #[test]
    fn test_every_llm_error_becomes_upstream() {
        let errors = vec![
            LlmError::configuration_error("bad key"),
            LlmError::request_failed("network down", None),
            LlmError::response_parsing_error("garbage"),
            LlmError::rate_limit_exceeded(60),
            LlmError::authentication_failed("denied"),
        ];

        for error in errors {
            let text = error.to_string();
            let EventError::Upstream(message) = EventError::from(error);
            assert_eq!(message, text);
        }
    }

    #[test]
    fn test_upstream_display_is_prefixed() {
        let source = LlmError::authentication_failed("Incorrect API key provided");
        let error = EventError::from(source);

        assert_eq!(
            error.to_string(),
            "OpenAI API error: Authentication failed: Incorrect API key provided"
        );
    }
}
