//! HTTP surface tests
//!
//! These exercise the code paths that resolve before any storage I/O:
//! validation, authentication, and identifier parsing. They run against a
//! lazy pool and need no database.

mod common;

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use tower::ServiceExt;
use uuid::Uuid;

use common::test_app;

async fn body_json(response: axum::response::Response) -> serde_json::Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("read body");
    serde_json::from_slice(&bytes).expect("body is JSON")
}

#[tokio::test]
async fn ping_responds_pong() {
    let response = test_app()
        .oneshot(Request::builder().uri("/ping").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["message"], "pong");
}

#[tokio::test]
async fn search_with_unknown_field_is_400() {
    let response = test_app()
        .oneshot(
            Request::builder()
                .uri("/letters?field=body&query=hello")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert_eq!(body["status"], 400);
    assert!(body["error"].as_str().unwrap().contains("search field"));
}

#[tokio::test]
async fn letter_detail_with_malformed_id_is_400() {
    let response = test_app()
        .oneshot(
            Request::builder()
                .uri("/letters/not-a-uuid")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn create_letter_without_token_is_401() {
    let response = test_app()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/letters")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(
                    r#"{"recipientEmail":"mayor@example.com","subject":"s","body":"b"}"#,
                ))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn create_letter_with_garbage_token_is_401() {
    let response = test_app()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/letters")
                .header(header::AUTHORIZATION, "Bearer not.a.token")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(
                    r#"{"recipientEmail":"mayor@example.com","subject":"s","body":"b"}"#,
                ))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn toggle_without_token_is_401() {
    let response = test_app()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(format!("/letters/{}/toggle-signature", Uuid::new_v4()))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn me_without_token_is_401() {
    let response = test_app()
        .oneshot(
            Request::builder()
                .uri("/users/me")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn register_with_malformed_email_is_400() {
    let response = test_app()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/users/register")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(
                    r#"{"email":"not-an-email","password":"password123"}"#,
                ))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn register_with_short_password_is_400() {
    let response = test_app()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/users/register")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(r#"{"email":"user@example.com","password":"short"}"#))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert!(body["error"].as_str().unwrap().contains("8"));
}

#[tokio::test]
async fn unknown_route_is_404() {
    let response = test_app()
        .oneshot(
            Request::builder()
                .uri("/totally/unknown")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
