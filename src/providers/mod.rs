//! Completion provider implementations
//!
//! - **openai**: OpenAI chat completion provider
//! - **openai_shared**: Wire types and HTTP transport for OpenAI-compatible APIs
//!
//! ```text
//! openai_shared/types.rs   <- request/response structures
//! openai_shared/http.rs    <- reqwest transport, status -> LlmError mapping
//!         |
//! openai.rs                <- OpenAIProvider: settings + messages -> text
//! ```

pub mod openai;
pub mod openai_shared;

pub use openai::{CompletionParams, OpenAIProvider};
