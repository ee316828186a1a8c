// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

use axum::body::Body;
use axum::http::{header, Request};
use std::sync::Arc;
use trip_planner::config::Config;
use trip_planner::models::Stop;
use trip_planner::routes::create_router;
use trip_planner::AppState;

/// Create a test app with the default configuration.
/// Returns the router and the shared state.
#[allow(dead_code)]
pub fn create_test_app() -> (axum::Router, Arc<AppState>) {
    create_test_app_with(Config::test_default())
}

/// Create a test app with a custom configuration.
#[allow(dead_code)]
pub fn create_test_app_with(config: Config) -> (axum::Router, Arc<AppState>) {
    let state = Arc::new(AppState::new(config));
    (create_router(state.clone()), state)
}

/// Build a JSON POST request.
#[allow(dead_code)]
pub fn post_json(uri: &str, body: serde_json::Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

/// Read a response body as JSON.
#[allow(dead_code)]
pub async fn body_json(response: axum::response::Response) -> serde_json::Value {
    let body = axum::body::to_bytes(response.into_body(), 1024 * 1024)
        .await
        .unwrap();
    serde_json::from_slice(&body).unwrap()
}

#[allow(dead_code)]
pub fn stop(id: &str, name: &str, lat: f64, lon: f64, region: &str, category: &str) -> Stop {
    Stop {
        id: id.to_string(),
        name: name.to_string(),
        latitude: lat,
        longitude: lon,
        region: Some(region.to_string()),
        category: Some(category.to_string()),
    }
}

/// Colombo, Kandy, Ella: city, cultural, mountain.
#[allow(dead_code)]
pub fn hill_country_trip() -> Vec<Stop> {
    vec![
        stop("colombo", "Colombo", 6.9271, 79.8612, "Western", "city"),
        stop("kandy", "Kandy", 7.2906, 80.6337, "Central", "cultural"),
        stop("ella", "Ella", 6.8667, 81.0466, "Uva", "mountain"),
    ]
}
