//! # historical-events-api
//!
//! HTTP service that answers "what happened, and what did it do to the
//! markets?" for a free-text query, by asking an OpenAI-compatible chat
//! completion API for a structured JSON description of the event.
//!
//! ## Layout
//!
//! - [`config`]: [`Settings`], loaded once from the environment
//! - [`prompt`]: the fixed system persona and event prompt template
//! - [`providers`]: OpenAI wire types and HTTP transport
//! - [`historian`]: [`EventSource`] trait and its OpenAI-backed implementation
//! - [`api`]: axum router, handlers, error mapping
//! - [`server`]: listener and graceful shutdown
//!
//! ## Example
//!
//! ```rust,no_run
//! use historical_events_api::{EventSource, HistoricalEventClient, Settings};
//!
//! # async fn example() -> anyhow::Result<()> {
//! let settings = Settings::from_env();
//! let client = HistoricalEventClient::new(&settings);
//! let text = client.fetch_event("black monday").await?;
//! let event: serde_json::Value = serde_json::from_str(&text)?;
//! println!("{}", event["date"]);
//! # Ok(())
//! # }
//! ```

pub mod api;
pub mod config;
pub mod error;
pub mod historian;
pub mod logging;
pub mod prompt;
pub mod providers;
pub mod server;

#[cfg(test)]
pub mod tests;

// Re-export main types
pub use api::{router, ApiError, AppState};
pub use config::Settings;
pub use error::{ErrorCategory, EventError, EventResult, LlmError, LlmResult};
pub use historian::{EventSource, HistoricalEventClient};
pub use providers::{CompletionParams, OpenAIProvider};
pub use server::create_app;
