use serde::Serialize;

/// GET /api/historical-event query string
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct HistoricalEventParams {
    /// Free-text description of the event.
    pub query: Option<String>,
}

impl HistoricalEventParams {
    /// Pick `query` out of decoded query-string pairs.
    ///
    /// A repeated `query` keeps its last value. Other keys are ignored.
    pub fn from_pairs(pairs: Vec<(String, String)>) -> Self {
        let query = pairs
            .into_iter()
            .filter(|(key, _)| key == "query")
            .map(|(_, value)| value)
            .last();

        Self { query }
    }
}

/// GET / response
#[derive(Debug, Serialize)]
pub struct RootResponse {
    pub message: &'static str,
}

/// GET /health response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub service: &'static str,
}
