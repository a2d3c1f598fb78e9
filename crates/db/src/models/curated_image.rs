//! Curated image model and DTOs.

use ecv_core::patch;
use ecv_core::schema::PayloadFields;
use ecv_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::types::Json;
use sqlx::FromRow;
use validator::Validate;

/// A generated or collected image from the `curated_images` table.
///
/// `approved` is -1 (rejected), 0 (pending) or 1 (approved).
/// `project_id` is cleared when the project is deleted.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CuratedImage {
    pub id: DbId,
    pub artist_id: DbId,
    pub project_id: Option<DbId>,
    pub image_url: String,
    pub prompt: Option<String>,
    pub rating: i32,
    pub tags: Json<Vec<String>>,
    pub approved: i32,
    pub created_at: Timestamp,
}

#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateCuratedImage {
    pub artist_id: DbId,
    pub project_id: Option<DbId>,
    pub image_url: String,
    pub prompt: Option<String>,
    pub rating: Option<i32>,
    pub tags: Option<Vec<String>>,
    #[validate(range(min = -1, max = 1, message = "must be -1, 0 or 1"))]
    pub approved: Option<i32>,
}

impl PayloadFields for CreateCuratedImage {
    const REQUIRED: &'static [&'static str] = &["artistId", "imageUrl"];
}

#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCuratedImage {
    #[serde(default, deserialize_with = "patch::not_null")]
    pub artist_id: Option<DbId>,
    #[serde(default, deserialize_with = "patch::nullable")]
    pub project_id: Option<Option<DbId>>,
    #[serde(default, deserialize_with = "patch::not_null")]
    pub image_url: Option<String>,
    #[serde(default, deserialize_with = "patch::nullable")]
    pub prompt: Option<Option<String>>,
    #[serde(default, deserialize_with = "patch::not_null")]
    pub rating: Option<i32>,
    #[serde(default, deserialize_with = "patch::not_null")]
    pub tags: Option<Vec<String>>,
    #[validate(range(min = -1, max = 1, message = "must be -1, 0 or 1"))]
    #[serde(default, deserialize_with = "patch::not_null")]
    pub approved: Option<i32>,
}

impl PayloadFields for UpdateCuratedImage {}
