//! Metadata endpoint handler.
//!
//! Returns JSON describing the dataset, the class labels and every fitted scheme.

use axum::{extract::State, Json};
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, info};

use crate::logging::generate_request_id;
use crate::state::AppState;

/// Build the metadata document for `state`
pub fn metadata_json(state: &AppState) -> serde_json::Value {
    let schemes: serde_json::Map<String, serde_json::Value> = state
        .classifiers
        .iter()
        .map(|(name, classifier)| {
            (
                name.clone(),
                serde_json::json!({
                    "n": classifier.n(),
                    "colors": classifier.palette(),
                    "boundaries_a": classifier.binner_a().boundaries(),
                    "boundaries_b": classifier.binner_b().boundaries(),
                }),
            )
        })
        .collect();

    let data = &state.config.data;
    serde_json::json!({
        "titles": data.titles,
        "labels": data.labels,
        "unit": data.unit,
        "region_count": state.observations.len(),
        "absent_count": state.observations.values().filter(|o| o.is_none()).count(),
        "default_scheme": data.default_scheme,
        "schemes": schemes,
    })
}

/// Handle GET /metadata requests
pub async fn metadata_handler(State(state): State<Arc<AppState>>) -> Json<serde_json::Value> {
    let request_id = generate_request_id();
    let start_time = Instant::now();

    debug!(
        endpoint = "/metadata",
        request_id = %request_id,
        "Processing metadata request"
    );

    let response = metadata_json(&state);

    let duration = start_time.elapsed();
    info!(
        endpoint = "/metadata",
        request_id = %request_id,
        duration_us = duration.as_micros() as u64,
        region_count = state.observations.len(),
        scheme_count = state.classifiers.len(),
        "Metadata request successful"
    );

    Json(response)
}
