//! HTTP surface of the service.
//!
//! - `GET /` - banner
//! - `GET /health` - liveness probe
//! - `GET /api/historical-event?query=...` - event lookup

mod dto;
mod error;
mod handlers;
mod state;

pub use dto::{HealthResponse, HistoricalEventParams, RootResponse};
pub use error::{ApiError, ApiResult, ErrorBody, PARSE_FAILED, QUERY_REQUIRED};
pub use state::AppState;

use axum::{
    extract::Request,
    http::HeaderValue,
    middleware::{self, Next},
    response::Response,
    routing::get,
    Router,
};
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer};

use crate::config::Settings;
use crate::logging::{log_info, log_warn};

/// Build the application router
pub fn router(state: AppState, settings: &Settings) -> Router {
    Router::new()
        .route("/", get(handlers::root))
        .route("/health", get(handlers::health))
        .route("/api/historical-event", get(handlers::historical_event))
        .layer(cors_layer(&settings.cors_origins))
        .layer(middleware::from_fn(log_requests))
        .with_state(state)
}

/// CORS for the configured origins, any method and header, with credentials.
///
/// Methods and headers are mirrored from the preflight request because
/// wildcards cannot be combined with credentials.
pub fn cors_layer(origins: &[String]) -> CorsLayer {
    let origins: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(e) => {
                log_warn!(origin = %origin, error = %e, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(true)
}

/// Log every request line and the resulting status.
async fn log_requests(request: Request, next: Next) -> Response {
    log_info!("Request: {} {}", request.method(), request.uri());
    let response = next.run(request).await;
    log_info!("Response status: {}", response.status().as_u16());
    response
}
