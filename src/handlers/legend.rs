//! Legend endpoint handler.
//!
//! Returns the swatch grid and axis titles for one scheme.

use axum::{
    extract::{Query, State},
    response::{IntoResponse, Response},
    Json,
};
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, info};

use super::{error_response, SchemeQuery};
use crate::classify::build_legend;
use crate::logging::generate_request_id;
use crate::state::AppState;

/// Handle GET /legend requests
pub async fn legend_handler(
    State(state): State<Arc<AppState>>,
    Query(params): Query<SchemeQuery>,
) -> Response {
    let request_id = generate_request_id();
    let start_time = Instant::now();

    debug!(
        endpoint = "/legend",
        request_id = %request_id,
        scheme = ?params.scheme,
        "Processing legend request"
    );

    let (scheme, classifier) = match state.classifier(params.scheme.as_deref()) {
        Ok(found) => found,
        Err(error) => {
            return error_response(&error, "/legend", &request_id, params.scheme.as_deref())
        }
    };

    let legend = build_legend(classifier, &state.config.data.titles, state.labels());

    info!(
        endpoint = "/legend",
        request_id = %request_id,
        scheme = scheme,
        duration_us = start_time.elapsed().as_micros() as u64,
        "Legend request successful"
    );

    Json(serde_json::json!({
        "scheme": scheme,
        "legend": legend,
    }))
    .into_response()
}
