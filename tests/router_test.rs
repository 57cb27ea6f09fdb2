//! In-process router tests driven through `tower::ServiceExt`.

mod common;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use std::sync::Arc;
use tower::ServiceExt;

fn app() -> axum::Router {
    let state = bivarmap::AppState::new(
        bivarmap::Config::default(),
        "scenario.csv".to_string(),
        common::test_data::scenario_observations(),
    )
    .expect("Failed to fit classifiers");
    bivarmap::handlers::router(Arc::new(state))
}

async fn get(uri: &str) -> (StatusCode, serde_json::Value) {
    let response = app()
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

#[tokio::test]
async fn test_default_scheme_legend() {
    let (status, json) = get("/legend").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["scheme"], "BuPu");
    assert_eq!(json["legend"]["swatches"][8]["color"], "#3b4994");
}

#[tokio::test]
async fn test_unknown_scheme_is_bad_request() {
    let (status, json) = get("/colors?scheme=viridis").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(json["error"].as_str().unwrap().contains("viridis"));
}

#[tokio::test]
async fn test_unknown_region_is_not_found() {
    let (status, _) = get("/region?id=nowhere").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}
