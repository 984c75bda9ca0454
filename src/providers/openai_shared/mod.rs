//! Shared OpenAI-compatible API structures and utilities
//!
//! - `types` - Request/response data structures
//! - `http` - HTTP client and error response handling

pub mod http;
pub mod types;

pub use http::OpenAICompatibleClient;
pub use types::*;
