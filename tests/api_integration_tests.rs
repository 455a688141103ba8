//! Integration Tests for API Endpoints
//!
//! Tests the full request/response cycle for each endpoint.

use std::time::Duration;

use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use codeshare::{api::create_router, AppState, CodeStore, StoreOptions};
use serde_json::Value;
use tower::ServiceExt;

// == Helper Functions ==

fn create_test_app() -> Router {
    create_router(AppState::new(CodeStore::new()))
}

async fn body_to_json(body: Body) -> Value {
    let bytes = axum::body::to_bytes(body, usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

fn put_request(body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/drops")
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn get_request(code: &str) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(format!("/drops/{code}"))
        .body(Body::empty())
        .unwrap()
}

fn claim_request(code: &str) -> Request<Body> {
    Request::builder()
        .method("DELETE")
        .uri(format!("/drops/{code}"))
        .body(Body::empty())
        .unwrap()
}

async fn put_text(app: &Router, text: &str) -> String {
    let body = serde_json::json!({ "text": text }).to_string();
    let response = app.clone().oneshot(put_request(&body)).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_to_json(response.into_body()).await;
    json["code"].as_str().unwrap().to_string()
}

// == PUT Endpoint Tests ==

#[tokio::test]
async fn test_put_endpoint_success() {
    let app = create_test_app();

    let response = app
        .oneshot(put_request(r#"{"text":"hello world"}"#))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let json = body_to_json(response.into_body()).await;
    let code = json["code"].as_str().unwrap();
    assert_eq!(code.len(), 4);
    assert!(code
        .chars()
        .all(|c| c.is_ascii_uppercase() || c.is_ascii_digit()));
    assert_eq!(json["expires_in"].as_u64().unwrap(), 1800);
    assert!(json["expires_at"].is_string());
}

#[tokio::test]
async fn test_put_empty_text() {
    let app = create_test_app();

    let response = app
        .oneshot(put_request(r#"{"text":"   "}"#))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_to_json(response.into_body()).await;
    assert_eq!(json["error"].as_str().unwrap(), "Text cannot be empty");
}

#[tokio::test]
async fn test_put_text_too_long() {
    let app = create_test_app();
    let body = serde_json::json!({ "text": "x".repeat(5001) }).to_string();

    let response = app.oneshot(put_request(&body)).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_to_json(response.into_body()).await;
    assert!(json["error"].as_str().unwrap().contains("5001"));
}

#[tokio::test]
async fn test_invalid_json_request() {
    let app = create_test_app();

    let response = app.oneshot(put_request("not json")).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_to_json(response.into_body()).await;
    assert!(json["error"]
        .as_str()
        .unwrap()
        .starts_with("Invalid request"));
}

#[tokio::test]
async fn test_missing_text_field() {
    let app = create_test_app();

    let response = app.oneshot(put_request(r#"{"body":"hi"}"#)).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

// == GET Endpoint Tests ==

#[tokio::test]
async fn test_round_trip() {
    let app = create_test_app();
    let code = put_text(&app, "hello world").await;

    let response = app.clone().oneshot(get_request(&code)).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_to_json(response.into_body()).await;
    assert_eq!(json["code"].as_str().unwrap(), code);
    assert_eq!(json["text"].as_str().unwrap(), "hello world");
}

#[tokio::test]
async fn test_get_is_repeatable() {
    let app = create_test_app();
    let code = put_text(&app, "read me twice").await;

    for _ in 0..3 {
        let response = app.clone().oneshot(get_request(&code)).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }
}

#[tokio::test]
async fn test_get_accepts_lowercase_code() {
    let app = create_test_app();
    let code = put_text(&app, "case insensitive").await;

    let response = app
        .clone()
        .oneshot(get_request(&code.to_lowercase()))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_to_json(response.into_body()).await;
    assert_eq!(json["text"].as_str().unwrap(), "case insensitive");
}

#[tokio::test]
async fn test_get_endpoint_not_found() {
    let app = create_test_app();

    let response = app.oneshot(get_request("ZZZZ")).await.unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let json = body_to_json(response.into_body()).await;
    assert_eq!(
        json["error"].as_str().unwrap(),
        "Code not found or has expired: ZZZZ"
    );
}

#[tokio::test]
async fn test_get_malformed_code_not_found() {
    let app = create_test_app();
    put_text(&app, "something").await;

    let response = app.clone().oneshot(get_request("AB")).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_undecodable_code_is_json_not_found() {
    let app = create_test_app();

    for request in [get_request("%FF%FE%FD%FC"), claim_request("%FF%FE%FD%FC")] {
        let response = app.clone().oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let json = body_to_json(response.into_body()).await;
        assert!(json["error"]
            .as_str()
            .unwrap()
            .starts_with("Code not found or has expired"));
    }
}

#[tokio::test]
async fn test_expiry_via_api() {
    let store = CodeStore::with_options(StoreOptions {
        ttl: Duration::from_millis(200),
        ..StoreOptions::default()
    });
    let app = create_router(AppState::new(store));
    let code = put_text(&app, "short lived").await;

    let response = app.clone().oneshot(get_request(&code)).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    tokio::time::sleep(Duration::from_millis(300)).await;

    let response = app.clone().oneshot(get_request(&code)).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// == DELETE Endpoint Tests ==

#[tokio::test]
async fn test_claim_is_single_use() {
    let app = create_test_app();
    let code = put_text(&app, "secret").await;

    let response = app.clone().oneshot(claim_request(&code)).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_to_json(response.into_body()).await;
    assert_eq!(json["text"].as_str().unwrap(), "secret");

    let response = app.clone().oneshot(claim_request(&code)).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = app.clone().oneshot(get_request(&code)).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// == Concurrency ==

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_puts_get_distinct_codes() {
    let app = create_test_app();

    let handles: Vec<_> = (0..50)
        .map(|i| {
            let app = app.clone();
            tokio::spawn(async move {
                let text = format!("payload {i}");
                let code = put_text(&app, &text).await;
                (code, text)
            })
        })
        .collect();

    let mut results = Vec::new();
    for handle in handles {
        results.push(handle.await.unwrap());
    }

    let codes: std::collections::HashSet<_> = results.iter().map(|(c, _)| c.clone()).collect();
    assert_eq!(codes.len(), results.len());

    for (code, text) in results {
        let response = app.clone().oneshot(get_request(&code)).await.unwrap();
        let json = body_to_json(response.into_body()).await;
        assert_eq!(json["text"].as_str().unwrap(), text);
    }
}

// == Stats / Health Endpoint Tests ==

#[tokio::test]
async fn test_stats_endpoint() {
    let app = create_test_app();
    let code = put_text(&app, "counted").await;
    app.clone().oneshot(get_request(&code)).await.unwrap();

    let response = app
        .clone()
        .oneshot(Request::builder().uri("/stats").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_to_json(response.into_body()).await;
    assert_eq!(json["puts"].as_u64().unwrap(), 1);
    assert_eq!(json["hits"].as_u64().unwrap(), 1);
    assert_eq!(json["live_entries"].as_u64().unwrap(), 1);
    assert_eq!(json["fallbacks"].as_u64().unwrap(), 0);
}

#[tokio::test]
async fn test_health_endpoint() {
    let app = create_test_app();

    let response = app
        .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_to_json(response.into_body()).await;
    assert_eq!(json["status"].as_str().unwrap(), "healthy");
}
