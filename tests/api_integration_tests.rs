//! Integration Tests for API Endpoints
//!
//! Tests the full request/response cycle for the endpoints that do not
//! depend on upstream availability.

use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use serde_json::Value;
use tower::ServiceExt;
use weather_hub::{api::create_router, AppState, Config};

// == Helper Functions ==

fn create_test_app() -> Router {
    // Default config carries no AccuWeather key
    let state = AppState::from_config(&Config::default());
    create_router(state)
}

async fn body_to_json(body: Body) -> Value {
    let bytes = axum::body::to_bytes(body, usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

// == Health Endpoint Tests ==

#[tokio::test]
async fn test_health_endpoint() {
    let app = create_test_app();

    let response = app
        .oneshot(
            Request::builder()
                .uri("/health")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let json = body_to_json(response.into_body()).await;
    assert_eq!(json["status"].as_str().unwrap(), "healthy");
    assert!(json.get("timestamp").is_some());
}

// == Stats Endpoint Tests ==

#[tokio::test]
async fn test_stats_endpoint_reports_both_caches() {
    let app = create_test_app();

    let response = app
        .oneshot(
            Request::builder()
                .uri("/stats")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let json = body_to_json(response.into_body()).await;
    assert_eq!(json["weather"]["hits"].as_u64().unwrap(), 0);
    assert_eq!(json["weather"]["entries"].as_u64().unwrap(), 0);
    assert_eq!(json["accuweather"]["hits"].as_u64().unwrap(), 0);
}

// == Search Endpoint Tests ==

#[tokio::test]
async fn test_search_with_empty_query_is_bad_request() {
    let app = create_test_app();

    let response = app
        .oneshot(
            Request::builder()
                .uri("/accuweather/search?q=")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = body_to_json(response.into_body()).await;
    assert!(json["error"].as_str().unwrap().contains("empty"));
}

#[tokio::test]
async fn test_search_without_api_key_is_bad_gateway() {
    let app = create_test_app();

    let response = app
        .oneshot(
            Request::builder()
                .uri("/accuweather/search?q=paris")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_GATEWAY);

    let json = body_to_json(response.into_body()).await;
    assert!(json.get("error").is_some());
}

// == Routing Tests ==

#[tokio::test]
async fn test_unknown_route_is_not_found() {
    let app = create_test_app();

    let response = app
        .oneshot(
            Request::builder()
                .uri("/forecast")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
