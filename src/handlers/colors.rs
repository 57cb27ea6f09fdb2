//! Colors endpoint handler.
//!
//! Returns the fill color of every region for one scheme.

use axum::{
    extract::{Query, State},
    response::{IntoResponse, Response},
    Json,
};
use std::collections::BTreeMap;
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, info};

use super::{error_response, SchemeQuery};
use crate::logging::generate_request_id;
use crate::palettes::Color;
use crate::state::AppState;

/// Handle GET /colors requests
pub async fn colors_handler(
    State(state): State<Arc<AppState>>,
    Query(params): Query<SchemeQuery>,
) -> Response {
    let request_id = generate_request_id();
    let start_time = Instant::now();

    debug!(
        endpoint = "/colors",
        request_id = %request_id,
        scheme = ?params.scheme,
        "Processing colors request"
    );

    let (scheme, classifier) = match state.classifier(params.scheme.as_deref()) {
        Ok(found) => found,
        Err(error) => {
            return error_response(&error, "/colors", &request_id, params.scheme.as_deref())
        }
    };

    let colors: BTreeMap<&str, &Color> = state
        .observations
        .iter()
        .map(|(id, pair)| (id.as_str(), classifier.color_for(pair.as_ref())))
        .collect();

    info!(
        endpoint = "/colors",
        request_id = %request_id,
        scheme = scheme,
        region_count = colors.len(),
        duration_us = start_time.elapsed().as_micros() as u64,
        "Colors request successful"
    );

    Json(serde_json::json!({
        "scheme": scheme,
        "colors": colors,
    }))
    .into_response()
}
