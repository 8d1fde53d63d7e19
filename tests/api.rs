use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use serde_json::Value;
use std::time::{Duration, Instant};
use tower::ServiceExt;

use shorts_ideagen::catalog::NicheCatalog;
use shorts_ideagen::server::{create_router, AppState};

fn app_with_delay(delay: Duration) -> Router {
    create_router(AppState::new(NicheCatalog::builtin(), delay), None)
}

fn app() -> Router {
    app_with_delay(Duration::ZERO)
}

async fn post_generate(app: Router, body: &str) -> (StatusCode, Value) {
    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/generate")
                .header("content-type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let payload = serde_json::from_slice(&bytes).unwrap();
    (status, payload)
}

#[tokio::test]
async fn health_returns_ok() {
    let response = app()
        .oneshot(
            Request::builder()
                .uri("/api/health")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn missing_niche_is_a_client_error() {
    let (status, payload) = post_generate(app(), "{}").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(payload, serde_json::json!({ "error": "Niche is required" }));
}

#[tokio::test]
async fn non_string_or_empty_niche_is_a_client_error() {
    for body in [r#"{"niche": 42}"#, r#"{"niche": ""}"#, r#"{"niche": null}"#] {
        let (status, payload) = post_generate(app(), body).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "body {}", body);
        assert_eq!(payload["error"], "Niche is required");
    }
}

#[tokio::test]
async fn malformed_body_is_a_server_error() {
    let (status, payload) = post_generate(app(), "niche=gaming").await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(payload, serde_json::json!({ "error": "Failed to generate ideas" }));
}

#[tokio::test]
async fn gaming_request_returns_three_ideas() {
    let (status, payload) = post_generate(app(), r#"{"niche": "gaming"}"#).await;

    assert_eq!(status, StatusCode::OK);
    let ideas = payload["ideas"].as_array().unwrap();
    assert_eq!(ideas.len(), 3);

    let title = ideas[0]["title"].as_str().unwrap();
    assert!(title.contains("Gameplay Tips"));
    assert!(title.ends_with("Blow Your Mind"));
    assert_eq!(ideas[0]["trending"], true);
    assert_eq!(ideas[1]["trending"], false);
    assert_eq!(
        ideas[0]["optimization"]["bestTime"],
        "6-9 AM (peak engagement hours)"
    );

    for idea in ideas {
        let score = idea["viralScore"].as_u64().unwrap();
        assert!((80..=100).contains(&score));
        assert_eq!(idea["optimization"]["tips"].as_array().unwrap().len(), 3);
    }
}

#[tokio::test]
async fn configured_niche_is_served() {
    let mut extra = std::collections::BTreeMap::new();
    extra.insert("travel".to_string(), vec!["packing lists".to_string()]);
    let app = create_router(
        AppState::new(NicheCatalog::with_extra(&extra), Duration::ZERO),
        None,
    );

    let (status, payload) = post_generate(app, r#"{"niche": "Travel"}"#).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        payload["ideas"][2]["title"],
        "Packing Lists That Will Go Viral"
    );
    assert_eq!(payload["ideas"][0]["hashtags"][3], "#Travel");
}

#[tokio::test]
async fn response_waits_for_configured_delay() {
    let delay = Duration::from_millis(50);
    let started = Instant::now();

    let (status, _) = post_generate(app_with_delay(delay), r#"{"niche": "tech"}"#).await;

    assert_eq!(status, StatusCode::OK);
    assert!(started.elapsed() >= delay);
}

#[tokio::test]
async fn invalid_input_skips_the_delay() {
    let started = Instant::now();

    let (status, _) = post_generate(app_with_delay(Duration::from_secs(5)), "{}").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(started.elapsed() < Duration::from_secs(5));
}
