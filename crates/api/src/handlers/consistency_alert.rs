//! Handlers for the `/consistency-alerts` resource.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use ecv_core::alert::is_expected_severity;
use ecv_core::types::DbId;
use ecv_db::models::consistency_alert::{
    ConsistencyAlert, CreateConsistencyAlert, UpdateConsistencyAlert,
};
use ecv_db::repositories::ConsistencyAlertRepo;

use crate::error::{AppError, AppResult};
use crate::extract::{ValidatedJson, ValidatedPatch};
use crate::query::ArtistScope;
use crate::state::AppState;

/// GET /api/consistency-alerts?artistId=
pub async fn list(
    State(state): State<AppState>,
    Query(scope): Query<ArtistScope>,
) -> AppResult<Json<Vec<ConsistencyAlert>>> {
    let alerts = ConsistencyAlertRepo::list_by_artist(&state.pool, scope.require()?).await?;
    Ok(Json(alerts))
}

/// GET /api/consistency-alerts/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<ConsistencyAlert>> {
    let alert = ConsistencyAlertRepo::find_by_id(&state.pool, &id)
        .await?
        .ok_or_else(|| AppError::not_found("Consistency alert", id))?;
    Ok(Json(alert))
}

/// POST /api/consistency-alerts
///
/// Severity is free text; values outside low/medium/high are stored but
/// logged.
pub async fn create(
    State(state): State<AppState>,
    ValidatedJson(input): ValidatedJson<CreateConsistencyAlert>,
) -> AppResult<(StatusCode, Json<ConsistencyAlert>)> {
    if !is_expected_severity(&input.severity) {
        tracing::warn!(severity = %input.severity, "Consistency alert with unexpected severity");
    }
    let alert = ConsistencyAlertRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(alert)))
}

/// PATCH /api/consistency-alerts/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    ValidatedPatch(input): ValidatedPatch<UpdateConsistencyAlert>,
) -> AppResult<Json<ConsistencyAlert>> {
    let alert = ConsistencyAlertRepo::update(&state.pool, &id, &input)
        .await?
        .ok_or_else(|| AppError::not_found("Consistency alert", id))?;
    Ok(Json(alert))
}

/// DELETE /api/consistency-alerts/{id}
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    ConsistencyAlertRepo::delete(&state.pool, &id).await?;
    Ok(StatusCode::NO_CONTENT)
}
