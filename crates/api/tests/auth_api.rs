//! Integration tests for the authorization gate.
//!
//! The app is built over an unreachable database: a rejected request must
//! come back as 401, which proves no handler reached the store.

mod common;

use axum::body::Body;
use axum::http::{Method, Request, StatusCode};
use common::{body_json, send, unreachable_pool};

const DENIED: &str = "you don't have the permission!!";

fn request(method: Method, uri: &str, auth: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(value) = auth {
        builder = builder.header("Authorization", value);
    }
    builder.body(Body::empty()).unwrap()
}

// ---------------------------------------------------------------------------
// Test: every route rejects a missing header
// ---------------------------------------------------------------------------

#[tokio::test]
async fn missing_header_is_rejected_on_every_route() {
    let routes = [
        (Method::GET, "/customers"),
        (Method::POST, "/customers"),
        (Method::GET, "/customers/1"),
        (Method::PUT, "/customers/1"),
        (Method::DELETE, "/customers/1"),
    ];

    for (method, uri) in routes {
        let app = common::build_test_app(unreachable_pool());
        let response = send(app, request(method.clone(), uri, None)).await;

        assert_eq!(
            response.status(),
            StatusCode::UNAUTHORIZED,
            "{method} {uri} should be rejected"
        );
        let json = body_json(response).await;
        assert_eq!(json, serde_json::json!({ "error": DENIED }));
    }
}

// ---------------------------------------------------------------------------
// Test: near-miss tokens are rejected
// ---------------------------------------------------------------------------

#[tokio::test]
async fn wrong_token_is_rejected() {
    for token in [
        "november 10, 2009",
        "Bearer November 10, 2009",
        "November 10, 2009 ",
        "",
    ] {
        let app = common::build_test_app(unreachable_pool());
        let response = send(app, request(Method::GET, "/customers", Some(token))).await;

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED, "{token:?}");
        let json = body_json(response).await;
        assert_eq!(json["error"], DENIED);
    }
}

// ---------------------------------------------------------------------------
// Test: the gate runs before id parsing and body parsing
// ---------------------------------------------------------------------------

#[tokio::test]
async fn gate_runs_before_input_parsing() {
    let app = common::build_test_app(unreachable_pool());
    let response = send(app, request(Method::GET, "/customers/not-a-number", None)).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let app = common::build_test_app(unreachable_pool());
    let malformed = Request::builder()
        .method(Method::POST)
        .uri("/customers")
        .header("Content-Type", "application/json")
        .body(Body::from("{not json"))
        .unwrap();
    let response = send(app, malformed).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

// ---------------------------------------------------------------------------
// Test: unmatched paths are gated too
// ---------------------------------------------------------------------------

#[tokio::test]
async fn unknown_route_requires_token() {
    let app = common::build_test_app(unreachable_pool());
    let response = send(app, request(Method::GET, "/nope", None)).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let app = common::build_test_app(unreachable_pool());
    let response = common::get(app, "/nope").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn wrong_method_on_known_path_returns_405_when_authorized() {
    let app = common::build_test_app(unreachable_pool());
    let response = send(
        app,
        request(Method::PATCH, "/customers/1", Some(common::TEST_TOKEN)),
    )
    .await;
    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
}
