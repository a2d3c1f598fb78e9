//! Integration tests for the `/api/ai` endpoints, with Gemini mocked.

mod common;

use axum::http::StatusCode;
use common::{body_json, gemini_config, post_file, post_json};
use serde_json::json;
use sqlx::PgPool;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const GENERATE_PATH: &str = "/models/gemini-test:generateContent";
const PNG: &[u8] = &[0x89, b'P', b'N', b'G'];

fn text_response(text: &str) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_json(json!({
        "candidates": [{ "content": { "role": "model", "parts": [{ "text": text }] } }]
    }))
}

async fn mock_gemini(response: ResponseTemplate) -> MockServer {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(GENERATE_PATH))
        .respond_with(response)
        .mount(&server)
        .await;
    server
}

// ---------------------------------------------------------------------------
// generate-lore
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn generate_lore_without_key_is_rejected(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = post_json(app, "/api/ai/generate-lore", json!({ "concept": "DJ" })).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(
        json["error"],
        "Gemini API key not configured in environment secrets."
    );
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn generate_lore_requires_a_concept(pool: PgPool) {
    for body in [json!({}), json!({ "concept": "" }), json!({ "concept": "   " })] {
        let app = common::build_test_app(pool.clone());
        let response = post_json(app, "/api/ai/generate-lore", body).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(body_json(response).await["error"], "Concept is required");
    }
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn generate_lore_rejects_a_non_string_concept(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = post_json(app, "/api/ai/generate-lore", json!({ "concept": 5 })).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], "BAD_REQUEST");
    assert!(json.get("fields").is_none());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn generate_lore_returns_text(pool: PgPool) {
    let server = mock_gemini(text_response("Nascida em Neo-Tóquio...")).await;
    let app = common::build_test_app_with(pool, gemini_config(server.uri()));

    let response = post_json(
        app,
        "/api/ai/generate-lore",
        json!({ "concept": "cyberpunk DJ" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        body_json(response).await,
        json!({ "lore": "Nascida em Neo-Tóquio..." })
    );
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn generate_lore_upstream_failure_is_500(pool: PgPool) {
    let server = mock_gemini(ResponseTemplate::new(403).set_body_string("denied")).await;
    let app = common::build_test_app_with(pool, gemini_config(server.uri()));

    let response = post_json(app, "/api/ai/generate-lore", json!({ "concept": "DJ" })).await;
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let json = body_json(response).await;
    assert_eq!(
        json["error"],
        "Failed to generate lore. Please check your API key and try again."
    );
    assert_eq!(json["code"], "EXTERNAL_SERVICE_ERROR");
}

// ---------------------------------------------------------------------------
// analyze-image
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn analyze_image_returns_extracted_dna(pool: PgPool) {
    let server = mock_gemini(text_response(
        "```json\n{\"cabelo\": \"Ruivo\", \"corOlhos\": \"Verdes\"}\n```",
    ))
    .await;
    let app = common::build_test_app_with(pool, gemini_config(server.uri()));

    let response = post_file(app, "/api/ai/analyze-image", "image", "image/png", PNG).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        body_json(response).await,
        json!({ "cabelo": "Ruivo", "corOlhos": "Verdes" })
    );
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn analyze_image_unparseable_answer_is_500(pool: PgPool) {
    let server = mock_gemini(text_response("I cannot describe this image.")).await;
    let app = common::build_test_app_with(pool, gemini_config(server.uri()));

    let response = post_file(app, "/api/ai/analyze-image", "image", "image/png", PNG).await;
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        body_json(response).await["error"],
        "Failed to analyze image. Please check your API key and try again."
    );
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn analyze_image_rejects_non_images(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = post_file(
        app,
        "/api/ai/analyze-image",
        "image",
        "application/pdf",
        b"%PDF-1.4",
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        body_json(response).await["error"],
        "Only image files are allowed"
    );
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn analyze_image_requires_a_file(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let response = post_file(app, "/api/ai/analyze-image", "photo", "image/png", PNG).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["error"], "No image file provided");

    let app = common::build_test_app(pool.clone());
    let response = post_file(app, "/api/ai/analyze-image", "image", "image/png", &[]).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let app = common::build_test_app(pool);
    let response = post_json(app, "/api/ai/analyze-image", json!({})).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn analyze_image_without_key_is_rejected_after_file_checks(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = post_file(app, "/api/ai/analyze-image", "image", "image/png", PNG).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        body_json(response).await["error"],
        "Gemini API key not configured in environment secrets."
    );
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn analyze_image_over_limit_is_413(pool: PgPool) {
    let mut config = common::test_config();
    config.max_upload_bytes = 16;
    let app = common::build_test_app_with(pool, config);

    let response = post_file(app, "/api/ai/analyze-image", "image", "image/png", &[0u8; 64]).await;
    assert_eq!(response.status(), StatusCode::PAYLOAD_TOO_LARGE);
}
