use axum::{
    extract::{rejection::QueryRejection, Query, State},
    Json,
};
use serde_json::Value;

use super::dto::{HealthResponse, HistoricalEventParams, RootResponse};
use super::error::{ApiError, ApiResult, PARSE_FAILED, QUERY_REQUIRED};
use super::state::AppState;
use crate::logging::log_warn;

/// GET / - Service banner
pub async fn root() -> Json<RootResponse> {
    Json(RootResponse {
        message: "Historical Events API is running!",
    })
}

/// GET /health - Health check
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        service: "historical-events-api",
    })
}

/// GET /api/historical-event?query=... - Look up an event
///
/// Returns whatever JSON document the model produced, unchanged.
pub async fn historical_event(
    State(state): State<AppState>,
    pairs: Result<Query<Vec<(String, String)>>, QueryRejection>,
) -> ApiResult<Json<Value>> {
    let Query(pairs) = pairs.map_err(|rejection| {
        log_warn!(error = %rejection, "Rejected query string");
        ApiError::BadRequest(rejection.body_text())
    })?;

    let query = HistoricalEventParams::from_pairs(pairs)
        .query
        .unwrap_or_default();
    if query.is_empty() {
        return Err(ApiError::BadRequest(QUERY_REQUIRED.into()));
    }

    // LLM call (slow: several seconds)
    let content = state.events.fetch_event(&query).await?;

    let event = serde_json::from_str::<Value>(&content).map_err(|e| {
        log_warn!(
            error = %e,
            content_len = content.len(),
            "Completion text is not valid JSON"
        );
        ApiError::Internal(PARSE_FAILED.into())
    })?;

    Ok(Json(event))
}
