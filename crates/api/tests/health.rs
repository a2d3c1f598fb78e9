//! Root-level endpoints and the middleware every response passes through.

mod common;

use axum::body::Body;
use axum::http::{Method, Request, StatusCode};
use common::{body_json, gemini_config, get, send};
use serde_json::json;
use sqlx::PgPool;

#[sqlx::test(migrations = "../../db/migrations")]
async fn health_reports_database_and_ai_status(pool: PgPool) {
    let response = get(common::build_test_app(pool.clone()), "/health").await;
    assert_eq!(response.status(), StatusCode::OK);

    let report = body_json(response).await;
    assert_eq!(report["status"], "ok");
    assert_eq!(report["dbHealthy"], true);
    assert_eq!(report["aiConfigured"], false);
    assert!(report["version"].is_string());

    let app = common::build_test_app_with(pool, gemini_config("http://127.0.0.1:9".into()));
    let report = body_json(get(app, "/health").await).await;
    assert_eq!(report["aiConfigured"], true);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn unknown_path_is_404(pool: PgPool) {
    let response = get(common::build_test_app(pool), "/api/users").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn put_is_not_routed(pool: PgPool) {
    let request = Request::builder()
        .method(Method::PUT)
        .uri("/api/artists/a1")
        .header("content-type", "application/json")
        .body(Body::from(json!({ "name": "x" }).to_string()))
        .unwrap();
    let response = send(common::build_test_app(pool), request).await;
    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn every_response_carries_a_request_id(pool: PgPool) {
    let response = get(common::build_test_app(pool), "/api/artists").await;

    let id = response
        .headers()
        .get("x-request-id")
        .and_then(|v| v.to_str().ok())
        .map(str::to_owned);
    assert_matches::assert_matches!(id, Some(id) if id.len() == 36);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn caller_request_id_is_echoed(pool: PgPool) {
    let request = Request::builder()
        .uri("/health")
        .header("x-request-id", "dashboard-42")
        .body(Body::empty())
        .unwrap();
    let response = send(common::build_test_app(pool), request).await;
    assert_eq!(response.headers()["x-request-id"], "dashboard-42");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn preflight_from_dashboard_origin_allows_patch(pool: PgPool) {
    let request = Request::builder()
        .method(Method::OPTIONS)
        .uri("/api/artists/a1")
        .header("origin", "http://localhost:5173")
        .header("access-control-request-method", "PATCH")
        .header("access-control-request-headers", "content-type")
        .body(Body::empty())
        .unwrap();
    let response = send(common::build_test_app(pool), request).await;

    assert_eq!(response.status(), StatusCode::OK);
    let headers = response.headers();
    assert_eq!(headers["access-control-allow-origin"], "http://localhost:5173");
    assert!(headers["access-control-allow-methods"]
        .to_str()
        .unwrap()
        .contains("PATCH"));
}
