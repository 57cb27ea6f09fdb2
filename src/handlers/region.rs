//! Region endpoint handler.
//!
//! Returns the color, classes and tooltip text of a single region.

use axum::{
    extract::{Query, State},
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, info};

use super::error_response;
use crate::classify::{format_pair, Buckets, Pair};
use crate::error::BivarmapError;
use crate::logging::generate_request_id;
use crate::palettes::Color;
use crate::state::AppState;

/// Query parameters for region endpoint
#[derive(Debug, Deserialize)]
pub struct RegionQuery {
    /// Region id as found in the data file
    pub id: String,
    /// Scheme name; the configured default when absent
    pub scheme: Option<String>,
}

/// Response for region query
#[derive(Debug, Serialize)]
pub struct RegionResponse {
    pub id: String,
    pub scheme: String,
    /// `null` when the region has no data
    pub values: Option<Pair>,
    /// `null` when the region has no data
    pub buckets: Option<Buckets>,
    pub color: Color,
    pub text: String,
}

/// Handle GET /region requests
pub async fn region_handler(
    State(state): State<Arc<AppState>>,
    Query(params): Query<RegionQuery>,
) -> Response {
    let request_id = generate_request_id();
    let start_time = Instant::now();

    debug!(
        endpoint = "/region",
        request_id = %request_id,
        id = %params.id,
        scheme = ?params.scheme,
        "Processing region request"
    );

    match describe_region(&state, &params) {
        Ok(response) => {
            info!(
                endpoint = "/region",
                request_id = %request_id,
                id = %response.id,
                scheme = %response.scheme,
                duration_us = start_time.elapsed().as_micros() as u64,
                "Region request successful"
            );
            Json(response).into_response()
        }
        Err(error) => error_response(
            &error,
            "/region",
            &request_id,
            Some(&format!("id={} scheme={:?}", params.id, params.scheme)),
        ),
    }
}

/// Classify one region; color, classes and text share one class lookup.
fn describe_region(state: &AppState, params: &RegionQuery) -> crate::Result<RegionResponse> {
    let (scheme, classifier) = state.classifier(params.scheme.as_deref())?;
    let observation = state
        .observation(&params.id)
        .ok_or_else(|| BivarmapError::DataNotFound {
            message: format!("Unknown region: {}", params.id),
        })?;

    let data = &state.config.data;
    Ok(RegionResponse {
        id: params.id.clone(),
        scheme: scheme.to_string(),
        values: *observation,
        buckets: observation.as_ref().map(|pair| classifier.buckets_for(pair)),
        color: classifier.color_for(observation.as_ref()).clone(),
        text: format_pair(
            observation.as_ref(),
            classifier,
            &data.titles,
            state.labels(),
            &data.unit,
        ),
    })
}
