//! HTTP request handlers for the bivarmap API.
//!
//! This module contains all the endpoint handlers for the web server.

pub mod colors;
pub mod heartbeat;
pub mod legend;
pub mod metadata;
pub mod region;

pub use colors::colors_handler;
pub use heartbeat::heartbeat_handler;
pub use legend::legend_handler;
pub use metadata::metadata_handler;
pub use region::region_handler;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Deserialize;

use crate::error::BivarmapError;
use crate::logging::log_request_error;

/// Query parameters shared by endpoints that only select a scheme
#[derive(Debug, Deserialize)]
pub struct SchemeQuery {
    /// Scheme name (RdBu, BuPu, GnBu, PuOr); the configured default when absent
    pub scheme: Option<String>,
}

/// Log `error` and turn it into a JSON error response
pub(crate) fn error_response(
    error: &BivarmapError,
    endpoint: &str,
    request_id: &str,
    params: Option<&str>,
) -> Response {
    log_request_error(error, endpoint, request_id, params);

    let status = match error {
        BivarmapError::DataNotFound { .. } => StatusCode::NOT_FOUND,
        BivarmapError::InvalidParameter { .. } | BivarmapError::InvalidInput { .. } => {
            StatusCode::BAD_REQUEST
        }
        _ => StatusCode::INTERNAL_SERVER_ERROR,
    };

    (
        status,
        Json(serde_json::json!({
            "error": error.to_string(),
            "request_id": request_id
        })),
    )
        .into_response()
}

/// Router serving every endpoint over `state`
pub fn router(state: std::sync::Arc<crate::state::AppState>) -> axum::Router {
    axum::Router::new()
        .route("/metadata", axum::routing::get(metadata_handler))
        .route("/legend", axum::routing::get(legend_handler))
        .route("/region", axum::routing::get(region_handler))
        .route("/colors", axum::routing::get(colors_handler))
        .route("/heartbeat", axum::routing::get(heartbeat_handler))
        .layer(tower_http::cors::CorsLayer::permissive())
        .layer(crate::logging::create_http_trace_layer())
        .with_state(state)
}
