//! Handlers for the `/ai` proxy endpoints.
//!
//! Both endpoints need `GEMINI_API_KEY`; without it they answer 400. Any
//! failure of the Gemini call itself is reported as a 500 with a fixed
//! message; details go to the log only.

use std::sync::Arc;

use axum::extract::multipart::{Multipart, MultipartError, MultipartRejection};
use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use ecv_gemini::{ExtractedDna, GeminiClient};
use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// Multipart field carrying the uploaded image.
pub const IMAGE_FIELD: &str = "image";

const KEY_NOT_CONFIGURED: &str = "Gemini API key not configured in environment secrets.";
const LORE_FAILED: &str = "Failed to generate lore. Please check your API key and try again.";
const ANALYSIS_FAILED: &str = "Failed to analyze image. Please check your API key and try again.";

#[derive(Debug, Deserialize)]
pub struct GenerateLoreRequest {
    pub concept: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct GenerateLoreResponse {
    pub lore: String,
}

/// POST /api/ai/generate-lore
pub async fn generate_lore(
    State(state): State<AppState>,
    payload: Result<Json<GenerateLoreRequest>, JsonRejection>,
) -> AppResult<Json<GenerateLoreResponse>> {
    let Json(input) = payload.map_err(|rejection| AppError::BadRequest(rejection.body_text()))?;
    let concept = input
        .concept
        .filter(|c| !c.trim().is_empty())
        .ok_or_else(|| AppError::BadRequest("Concept is required".into()))?;
    let gemini = gemini_client(&state)?;

    let lore = gemini
        .generate_lore(&concept)
        .await
        .map_err(|source| AppError::ExternalService {
            message: LORE_FAILED,
            source,
        })?;

    tracing::info!(model = gemini.model(), chars = lore.len(), "Lore generated");
    Ok(Json(GenerateLoreResponse { lore }))
}

/// POST /api/ai/analyze-image
///
/// Expects `multipart/form-data` with a single `image` file of an `image/*`
/// type, at most `MAX_UPLOAD_BYTES` long.
pub async fn analyze_image(
    State(state): State<AppState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> AppResult<Json<ExtractedDna>> {
    let mut multipart =
        multipart.map_err(|_| AppError::BadRequest("No image file provided".into()))?;
    let (bytes, mime_type) = read_image_field(&mut multipart, state.config.max_upload_bytes)
        .await?
        .ok_or_else(|| AppError::BadRequest("No image file provided".into()))?;
    let gemini = gemini_client(&state)?;

    let dna = gemini
        .analyze_image(&bytes, &mime_type)
        .await
        .map_err(|source| AppError::ExternalService {
            message: ANALYSIS_FAILED,
            source,
        })?;

    tracing::info!(mime_type = %mime_type, bytes = bytes.len(), "Image analyzed");
    Ok(Json(dna))
}

fn gemini_client(state: &AppState) -> Result<Arc<GeminiClient>, AppError> {
    state
        .gemini
        .clone()
        .ok_or_else(|| AppError::BadRequest(KEY_NOT_CONFIGURED.into()))
}

/// Find the `image` field and return its bytes and MIME type. Other fields
/// are skipped.
async fn read_image_field(
    multipart: &mut Multipart,
    max_bytes: usize,
) -> Result<Option<(Vec<u8>, String)>, AppError> {
    while let Some(field) = multipart.next_field().await.map_err(multipart_error)? {
        if field.name() != Some(IMAGE_FIELD) {
            continue;
        }

        let mime_type = field.content_type().unwrap_or_default().to_string();
        if !mime_type.starts_with("image/") {
            return Err(AppError::BadRequest("Only image files are allowed".into()));
        }

        let bytes = field.bytes().await.map_err(multipart_error)?;
        if bytes.is_empty() {
            return Ok(None);
        }
        if bytes.len() > max_bytes {
            return Err(too_large(max_bytes));
        }
        return Ok(Some((bytes.to_vec(), mime_type)));
    }
    Ok(None)
}

fn multipart_error(err: MultipartError) -> AppError {
    if err.status() == StatusCode::PAYLOAD_TOO_LARGE {
        AppError::PayloadTooLarge(err.body_text())
    } else {
        AppError::BadRequest(err.body_text())
    }
}

fn too_large(max_bytes: usize) -> AppError {
    AppError::PayloadTooLarge(format!(
        "Image exceeds the {} MB upload limit",
        max_bytes / (1024 * 1024)
    ))
}
