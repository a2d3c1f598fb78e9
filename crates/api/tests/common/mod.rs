#![allow(dead_code)]

use axum::body::Body;
use axum::http::{Method, Request, Response};
use axum::Router;
use ecv_api::config::ServerConfig;
use ecv_api::router::build_app_router;
use ecv_api::state::AppState;
use ecv_gemini::GeminiConfig;
use http_body_util::BodyExt;
use serde_json::Value;
use sqlx::PgPool;
use tower::ServiceExt;

/// Build a test `ServerConfig` with safe defaults and no Gemini key.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        database_max_connections: 5,
        max_upload_bytes: 5 * 1024 * 1024,
        gemini: None,
    }
}

/// Build the full application router, exactly as `main.rs` does.
pub fn build_test_app(pool: PgPool) -> Router {
    build_test_app_with(pool, test_config())
}

pub fn build_test_app_with(pool: PgPool, config: ServerConfig) -> Router {
    let state = AppState::new(pool, config.clone());
    build_app_router(state, &config)
}

/// A config whose Gemini calls go to `base_url` (a wiremock server).
pub fn gemini_config(base_url: String) -> ServerConfig {
    ServerConfig {
        gemini: Some(GeminiConfig {
            api_key: "test-key".to_string(),
            model: "gemini-test".to_string(),
            base_url,
        }),
        ..test_config()
    }
}

pub async fn send(app: Router, request: Request<Body>) -> Response<Body> {
    app.oneshot(request).await.unwrap()
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    send(app, request).await
}

pub async fn delete(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::DELETE)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    send(app, request).await
}

pub async fn post_json(app: Router, uri: &str, body: Value) -> Response<Body> {
    json_request(app, Method::POST, uri, body).await
}

pub async fn patch_json(app: Router, uri: &str, body: Value) -> Response<Body> {
    json_request(app, Method::PATCH, uri, body).await
}

async fn json_request(app: Router, method: Method, uri: &str, body: Value) -> Response<Body> {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    send(app, request).await
}

/// POST a single-file multipart form.
pub async fn post_file(
    app: Router,
    uri: &str,
    field: &str,
    content_type: &str,
    bytes: &[u8],
) -> Response<Body> {
    const BOUNDARY: &str = "ecv-test-boundary";
    let mut body = Vec::new();
    body.extend_from_slice(
        format!(
            "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"{field}\"; \
             filename=\"upload\"\r\nContent-Type: {content_type}\r\n\r\n"
        )
        .as_bytes(),
    );
    body.extend_from_slice(bytes);
    body.extend_from_slice(format!("\r\n--{BOUNDARY}--\r\n").as_bytes());

    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(
            "content-type",
            format!("multipart/form-data; boundary={BOUNDARY}"),
        )
        .body(Body::from(body))
        .unwrap();
    send(app, request).await
}

pub async fn body_json(response: Response<Body>) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

/// Create an artist through the API and return its id.
pub async fn create_artist(pool: &PgPool, name: &str) -> String {
    let app = build_test_app(pool.clone());
    let response = post_json(
        app,
        "/api/artists",
        serde_json::json!({ "name": name, "genre": "Electronic", "platform": "Instagram" }),
    )
    .await;
    let json = body_json(response).await;
    json["id"].as_str().unwrap().to_string()
}

/// Create a reality node through the API and return its id.
pub async fn create_node(pool: &PgPool, artist_id: &str, name: &str) -> String {
    let app = build_test_app(pool.clone());
    let response = post_json(
        app,
        "/api/reality-nodes",
        serde_json::json!({ "artistId": artist_id, "type": "character", "name": name }),
    )
    .await;
    let json = body_json(response).await;
    json["id"].as_str().unwrap().to_string()
}
