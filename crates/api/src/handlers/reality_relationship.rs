//! Handlers for the `/reality-relationships` resource.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use ecv_core::types::DbId;
use ecv_db::models::reality_relationship::{
    CreateRealityRelationship, RealityRelationship, UpdateRealityRelationship,
};
use ecv_db::repositories::RealityRelationshipRepo;

use crate::error::{AppError, AppResult};
use crate::extract::{ValidatedJson, ValidatedPatch};
use crate::query::ArtistScope;
use crate::state::AppState;

/// GET /api/reality-relationships[?artistId=]
///
/// With `artistId`, only edges whose source node belongs to the artist.
pub async fn list(
    State(state): State<AppState>,
    Query(scope): Query<ArtistScope>,
) -> AppResult<Json<Vec<RealityRelationship>>> {
    let relationships = RealityRelationshipRepo::list(&state.pool, scope.optional()).await?;
    Ok(Json(relationships))
}

/// GET /api/reality-relationships/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<RealityRelationship>> {
    let relationship = RealityRelationshipRepo::find_by_id(&state.pool, &id)
        .await?
        .ok_or_else(|| AppError::not_found("Reality relationship", id))?;
    Ok(Json(relationship))
}

/// POST /api/reality-relationships
///
/// Endpoint ids are not checked here; an unknown node fails on the foreign
/// key and surfaces as a 500.
pub async fn create(
    State(state): State<AppState>,
    ValidatedJson(input): ValidatedJson<CreateRealityRelationship>,
) -> AppResult<(StatusCode, Json<RealityRelationship>)> {
    let relationship = RealityRelationshipRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(relationship)))
}

/// PATCH /api/reality-relationships/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    ValidatedPatch(input): ValidatedPatch<UpdateRealityRelationship>,
) -> AppResult<Json<RealityRelationship>> {
    let relationship = RealityRelationshipRepo::update(&state.pool, &id, &input)
        .await?
        .ok_or_else(|| AppError::not_found("Reality relationship", id))?;
    Ok(Json(relationship))
}

/// DELETE /api/reality-relationships/{id}
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    RealityRelationshipRepo::delete(&state.pool, &id).await?;
    Ok(StatusCode::NO_CONTENT)
}
