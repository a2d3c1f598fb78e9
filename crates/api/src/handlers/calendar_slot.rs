//! Handlers for the `/calendar-slots` resource.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use ecv_core::types::DbId;
use ecv_db::models::calendar_slot::{CalendarSlot, CreateCalendarSlot, UpdateCalendarSlot};
use ecv_db::repositories::CalendarSlotRepo;

use crate::error::{AppError, AppResult};
use crate::extract::{ValidatedJson, ValidatedPatch};
use crate::query::CalendarRangeParams;
use crate::state::AppState;

/// GET /api/calendar-slots?artistId=[&dateStart=][&dateEnd=]
///
/// Slots come back in scheduled order; both bounds are inclusive.
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<CalendarRangeParams>,
) -> AppResult<Json<Vec<CalendarSlot>>> {
    let filter = params.into_filter()?;
    let slots = CalendarSlotRepo::list(&state.pool, &filter).await?;
    Ok(Json(slots))
}

/// GET /api/calendar-slots/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<CalendarSlot>> {
    let slot = CalendarSlotRepo::find_by_id(&state.pool, &id)
        .await?
        .ok_or_else(|| AppError::not_found("Calendar slot", id))?;
    Ok(Json(slot))
}

/// POST /api/calendar-slots
pub async fn create(
    State(state): State<AppState>,
    ValidatedJson(input): ValidatedJson<CreateCalendarSlot>,
) -> AppResult<(StatusCode, Json<CalendarSlot>)> {
    let slot = CalendarSlotRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(slot)))
}

/// PATCH /api/calendar-slots/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    ValidatedPatch(input): ValidatedPatch<UpdateCalendarSlot>,
) -> AppResult<Json<CalendarSlot>> {
    let slot = CalendarSlotRepo::update(&state.pool, &id, &input)
        .await?
        .ok_or_else(|| AppError::not_found("Calendar slot", id))?;
    Ok(Json(slot))
}

/// DELETE /api/calendar-slots/{id}
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    CalendarSlotRepo::delete(&state.pool, &id).await?;
    Ok(StatusCode::NO_CONTENT)
}
