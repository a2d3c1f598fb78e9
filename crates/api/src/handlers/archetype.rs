//! Handlers for the `/admin/archetypes` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use ecv_core::types::DbId;
use ecv_db::models::archetype::{
    CreateRealityArchetype, RealityArchetype, UpdateRealityArchetype,
};
use ecv_db::repositories::RealityArchetypeRepo;

use crate::error::{AppError, AppResult};
use crate::extract::{ValidatedJson, ValidatedPatch};
use crate::state::AppState;

/// GET /api/admin/archetypes
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<RealityArchetype>>> {
    let archetypes = RealityArchetypeRepo::list(&state.pool).await?;
    Ok(Json(archetypes))
}

/// GET /api/admin/archetypes/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<RealityArchetype>> {
    let archetype = RealityArchetypeRepo::find_by_id(&state.pool, &id)
        .await?
        .ok_or_else(|| AppError::not_found("Archetype", id))?;
    Ok(Json(archetype))
}

/// POST /api/admin/archetypes
pub async fn create(
    State(state): State<AppState>,
    ValidatedJson(input): ValidatedJson<CreateRealityArchetype>,
) -> AppResult<(StatusCode, Json<RealityArchetype>)> {
    let archetype = RealityArchetypeRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(archetype)))
}

/// PATCH /api/admin/archetypes/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    ValidatedPatch(input): ValidatedPatch<UpdateRealityArchetype>,
) -> AppResult<Json<RealityArchetype>> {
    let archetype = RealityArchetypeRepo::update(&state.pool, &id, &input)
        .await?
        .ok_or_else(|| AppError::not_found("Archetype", id))?;
    Ok(Json(archetype))
}

/// DELETE /api/admin/archetypes/{id}
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    RealityArchetypeRepo::delete(&state.pool, &id).await?;
    Ok(StatusCode::NO_CONTENT)
}
