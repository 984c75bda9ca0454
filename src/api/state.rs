use std::sync::Arc;

use crate::config::Settings;
use crate::historian::{EventSource, HistoricalEventClient};

/// Shared state for all handlers
///
/// Read-only after construction; cloning only bumps the `Arc`.
#[derive(Clone)]
pub struct AppState {
    pub events: Arc<dyn EventSource>,
}

impl AppState {
    pub fn new(events: Arc<dyn EventSource>) -> Self {
        Self { events }
    }

    /// State backed by the OpenAI completion client.
    pub fn from_settings(settings: &Settings) -> Self {
        Self::new(Arc::new(HistoricalEventClient::new(settings)))
    }
}
