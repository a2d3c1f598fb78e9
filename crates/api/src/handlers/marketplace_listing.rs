//! Handlers for the `/marketplace-listings` resource.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use ecv_core::types::DbId;
use ecv_db::models::marketplace_listing::{
    CreateMarketplaceListing, MarketplaceListing, UpdateMarketplaceListing,
};
use ecv_db::repositories::MarketplaceListingRepo;

use crate::error::{AppError, AppResult};
use crate::extract::{ValidatedJson, ValidatedPatch};
use crate::query::ArtistScope;
use crate::state::AppState;

/// GET /api/marketplace-listings[?artistId=]
pub async fn list(
    State(state): State<AppState>,
    Query(scope): Query<ArtistScope>,
) -> AppResult<Json<Vec<MarketplaceListing>>> {
    let listings = MarketplaceListingRepo::list(&state.pool, scope.optional()).await?;
    Ok(Json(listings))
}

/// GET /api/marketplace-listings/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<MarketplaceListing>> {
    let listing = MarketplaceListingRepo::find_by_id(&state.pool, &id)
        .await?
        .ok_or_else(|| AppError::not_found("Marketplace listing", id))?;
    Ok(Json(listing))
}

/// POST /api/marketplace-listings
pub async fn create(
    State(state): State<AppState>,
    ValidatedJson(input): ValidatedJson<CreateMarketplaceListing>,
) -> AppResult<(StatusCode, Json<MarketplaceListing>)> {
    let listing = MarketplaceListingRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(listing)))
}

/// PATCH /api/marketplace-listings/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    ValidatedPatch(input): ValidatedPatch<UpdateMarketplaceListing>,
) -> AppResult<Json<MarketplaceListing>> {
    let listing = MarketplaceListingRepo::update(&state.pool, &id, &input)
        .await?
        .ok_or_else(|| AppError::not_found("Marketplace listing", id))?;
    Ok(Json(listing))
}

/// DELETE /api/marketplace-listings/{id}
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    MarketplaceListingRepo::delete(&state.pool, &id).await?;
    Ok(StatusCode::NO_CONTENT)
}
