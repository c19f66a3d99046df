use std::time::Duration;

use axum::{
    body::{to_bytes, Body},
    http::Request,
};
use fintra_server::{api::app_router, build_state, config::Config};
use tower::ServiceExt;

fn test_app() -> axum::Router {
    let config = Config {
        listen_addr: "127.0.0.1:0".parse().unwrap(),
        api_key: "test-key".to_string(),
        // Nothing in these tests should reach the upstream
        base_url: "http://127.0.0.1:1/query".to_string(),
        cors_allow: vec!["*".to_string()],
        request_timeout: Duration::from_secs(5),
    };
    let state = build_state(&config).unwrap();
    app_router(state, &config)
}

#[tokio::test]
async fn health_returns_ok_with_parseable_timestamp() {
    let response = test_app()
        .oneshot(
            Request::builder()
                .uri("/health")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), 200);
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(json["status"], "OK");
    assert_eq!(json["message"], "Fintra API is running");
    let timestamp = json["timestamp"].as_str().unwrap();
    chrono::DateTime::parse_from_rfc3339(timestamp).unwrap();
}

#[tokio::test]
async fn root_returns_api_documentation() {
    let response = test_app()
        .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), 200);
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(json["message"], "Welcome to Fintra API");
    assert!(json["endpoints"].is_object());
    assert_eq!(json["examples"]["quote"], "/company-quote/IBM");
}
