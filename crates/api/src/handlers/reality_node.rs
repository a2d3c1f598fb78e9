//! Handlers for the `/reality-nodes` resource.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use ecv_core::types::DbId;
use ecv_db::models::reality_node::{CreateRealityNode, RealityNode, UpdateRealityNode};
use ecv_db::repositories::RealityNodeRepo;

use crate::error::{AppError, AppResult};
use crate::extract::{ValidatedJson, ValidatedPatch};
use crate::query::ArtistScope;
use crate::state::AppState;

/// GET /api/reality-nodes?artistId=
pub async fn list(
    State(state): State<AppState>,
    Query(scope): Query<ArtistScope>,
) -> AppResult<Json<Vec<RealityNode>>> {
    let nodes = RealityNodeRepo::list_by_artist(&state.pool, scope.require()?).await?;
    Ok(Json(nodes))
}

/// GET /api/reality-nodes/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<RealityNode>> {
    let node = RealityNodeRepo::find_by_id(&state.pool, &id)
        .await?
        .ok_or_else(|| AppError::not_found("Reality node", id))?;
    Ok(Json(node))
}

/// POST /api/reality-nodes
pub async fn create(
    State(state): State<AppState>,
    ValidatedJson(input): ValidatedJson<CreateRealityNode>,
) -> AppResult<(StatusCode, Json<RealityNode>)> {
    let node = RealityNodeRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(node)))
}

/// PATCH /api/reality-nodes/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    ValidatedPatch(input): ValidatedPatch<UpdateRealityNode>,
) -> AppResult<Json<RealityNode>> {
    let node = RealityNodeRepo::update(&state.pool, &id, &input)
        .await?
        .ok_or_else(|| AppError::not_found("Reality node", id))?;
    Ok(Json(node))
}

/// DELETE /api/reality-nodes/{id}
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    RealityNodeRepo::delete(&state.pool, &id).await?;
    Ok(StatusCode::NO_CONTENT)
}
