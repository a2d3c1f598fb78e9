//! Handlers for the `/artists` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use ecv_core::types::DbId;
use ecv_db::models::artist::{Artist, CreateArtist, UpdateArtist};
use ecv_db::repositories::ArtistRepo;

use crate::error::{AppError, AppResult};
use crate::extract::{ValidatedJson, ValidatedPatch};
use crate::state::AppState;

/// POST /api/artists
pub async fn create(
    State(state): State<AppState>,
    ValidatedJson(input): ValidatedJson<CreateArtist>,
) -> AppResult<(StatusCode, Json<Artist>)> {
    let artist = ArtistRepo::create(&state.pool, &input).await?;
    tracing::info!(artist_id = %artist.id, name = %artist.name, "Artist created");
    Ok((StatusCode::CREATED, Json(artist)))
}

/// GET /api/artists
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Artist>>> {
    let artists = ArtistRepo::list(&state.pool).await?;
    Ok(Json(artists))
}

/// GET /api/artists/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Artist>> {
    let artist = ArtistRepo::find_by_id(&state.pool, &id)
        .await?
        .ok_or_else(|| AppError::not_found("Artist", id))?;
    Ok(Json(artist))
}

/// PATCH /api/artists/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    ValidatedPatch(input): ValidatedPatch<UpdateArtist>,
) -> AppResult<Json<Artist>> {
    let artist = ArtistRepo::update(&state.pool, &id, &input)
        .await?
        .ok_or_else(|| AppError::not_found("Artist", id))?;
    Ok(Json(artist))
}

/// DELETE /api/artists/{id}
///
/// Removes everything the artist owns. Answers 204 whether or not the artist
/// existed.
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    if ArtistRepo::delete(&state.pool, &id).await? {
        tracing::info!(artist_id = %id, "Artist deleted with owned records");
    }
    Ok(StatusCode::NO_CONTENT)
}
