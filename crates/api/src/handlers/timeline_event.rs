//! Handlers for the `/timeline-events` resource.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use ecv_core::types::DbId;
use ecv_db::models::timeline_event::{CreateTimelineEvent, TimelineEvent, UpdateTimelineEvent};
use ecv_db::repositories::TimelineEventRepo;

use crate::error::{AppError, AppResult};
use crate::extract::{ValidatedJson, ValidatedPatch};
use crate::query::ArtistScope;
use crate::state::AppState;

/// GET /api/timeline-events?artistId=
pub async fn list(
    State(state): State<AppState>,
    Query(scope): Query<ArtistScope>,
) -> AppResult<Json<Vec<TimelineEvent>>> {
    let events = TimelineEventRepo::list_by_artist(&state.pool, scope.require()?).await?;
    Ok(Json(events))
}

/// GET /api/timeline-events/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<TimelineEvent>> {
    let event = TimelineEventRepo::find_by_id(&state.pool, &id)
        .await?
        .ok_or_else(|| AppError::not_found("Timeline event", id))?;
    Ok(Json(event))
}

/// POST /api/timeline-events
pub async fn create(
    State(state): State<AppState>,
    ValidatedJson(input): ValidatedJson<CreateTimelineEvent>,
) -> AppResult<(StatusCode, Json<TimelineEvent>)> {
    let event = TimelineEventRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(event)))
}

/// PATCH /api/timeline-events/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    ValidatedPatch(input): ValidatedPatch<UpdateTimelineEvent>,
) -> AppResult<Json<TimelineEvent>> {
    let event = TimelineEventRepo::update(&state.pool, &id, &input)
        .await?
        .ok_or_else(|| AppError::not_found("Timeline event", id))?;
    Ok(Json(event))
}

/// DELETE /api/timeline-events/{id}
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    TimelineEventRepo::delete(&state.pool, &id).await?;
    Ok(StatusCode::NO_CONTENT)
}
