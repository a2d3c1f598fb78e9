//! Handlers for the `/curated-images` resource.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use ecv_core::curation::approval_label;
use ecv_core::types::DbId;
use ecv_db::models::curated_image::{CreateCuratedImage, CuratedImage, UpdateCuratedImage};
use ecv_db::repositories::CuratedImageRepo;

use crate::error::{AppError, AppResult};
use crate::extract::{ValidatedJson, ValidatedPatch};
use crate::query::ArtistScope;
use crate::state::AppState;

/// GET /api/curated-images?artistId=
pub async fn list(
    State(state): State<AppState>,
    Query(scope): Query<ArtistScope>,
) -> AppResult<Json<Vec<CuratedImage>>> {
    let images = CuratedImageRepo::list_by_artist(&state.pool, scope.require()?).await?;
    Ok(Json(images))
}

/// GET /api/curated-images/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<CuratedImage>> {
    let image = CuratedImageRepo::find_by_id(&state.pool, &id)
        .await?
        .ok_or_else(|| AppError::not_found("Curated image", id))?;
    Ok(Json(image))
}

/// POST /api/curated-images
pub async fn create(
    State(state): State<AppState>,
    ValidatedJson(input): ValidatedJson<CreateCuratedImage>,
) -> AppResult<(StatusCode, Json<CuratedImage>)> {
    let image = CuratedImageRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(image)))
}

/// PATCH /api/curated-images/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    ValidatedPatch(input): ValidatedPatch<UpdateCuratedImage>,
) -> AppResult<Json<CuratedImage>> {
    let image = CuratedImageRepo::update(&state.pool, &id, &input)
        .await?
        .ok_or_else(|| AppError::not_found("Curated image", id))?;
    if input.approved.is_some() {
        tracing::info!(
            image_id = %image.id,
            approval = approval_label(image.approved).unwrap_or("unknown"),
            "Curated image review recorded"
        );
    }
    Ok(Json(image))
}

/// DELETE /api/curated-images/{id}
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    CuratedImageRepo::delete(&state.pool, &id).await?;
    Ok(StatusCode::NO_CONTENT)
}
