//! Artist entity model and DTOs.

use ecv_core::artist::validate_status;
use ecv_core::patch;
use ecv_core::schema::PayloadFields;
use ecv_core::types::{AttributeMap, DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::types::Json;
use sqlx::FromRow;
use validator::Validate;

/// An artist row from the `artists` table.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Artist {
    pub id: DbId,
    pub name: String,
    pub genre: String,
    pub platform: String,
    pub followers: i32,
    /// Energy / creativity / vibe scores, stored free-form.
    pub ecv_dna: Option<Json<AttributeMap>>,
    /// Physical and stylistic traits, optionally filled from image analysis.
    pub dna: Option<Json<AttributeMap>>,
    pub status: String,
    pub created_at: Timestamp,
}

/// DTO for creating a new artist.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateArtist {
    pub name: String,
    pub genre: String,
    pub platform: String,
    /// Defaults to 0 if omitted.
    #[validate(range(min = 0, message = "must be zero or greater"))]
    pub followers: Option<i32>,
    pub ecv_dna: Option<AttributeMap>,
    pub dna: Option<AttributeMap>,
    /// Defaults to `active` if omitted.
    #[validate(custom(function = "validate_status"))]
    pub status: Option<String>,
}

impl PayloadFields for CreateArtist {
    const REQUIRED: &'static [&'static str] = &["name", "genre", "platform"];
}

/// DTO for updating an existing artist. All fields are optional.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateArtist {
    #[serde(default, deserialize_with = "patch::not_null")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "patch::not_null")]
    pub genre: Option<String>,
    #[serde(default, deserialize_with = "patch::not_null")]
    pub platform: Option<String>,
    #[validate(range(min = 0, message = "must be zero or greater"))]
    #[serde(default, deserialize_with = "patch::not_null")]
    pub followers: Option<i32>,
    #[serde(default, deserialize_with = "patch::nullable")]
    pub ecv_dna: Option<Option<AttributeMap>>,
    #[serde(default, deserialize_with = "patch::nullable")]
    pub dna: Option<Option<AttributeMap>>,
    #[validate(custom(function = "validate_status"))]
    #[serde(default, deserialize_with = "patch::not_null")]
    pub status: Option<String>,
}

impl PayloadFields for UpdateArtist {}
