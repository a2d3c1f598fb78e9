//! Reality archetype (node template) model and DTOs.

use ecv_core::patch;
use ecv_core::reality::validate_entity_type;
use ecv_core::schema::PayloadFields;
use ecv_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A template row from the `reality_archetypes` table. Not artist-scoped.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RealityArchetype {
    pub id: DbId,
    pub name: String,
    pub entity_type: String,
    pub description: Option<String>,
    pub icon: Option<String>,
    pub created_at: Timestamp,
}

#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateRealityArchetype {
    pub name: String,
    #[validate(custom(function = "validate_entity_type"))]
    pub entity_type: String,
    pub description: Option<String>,
    pub icon: Option<String>,
}

impl PayloadFields for CreateRealityArchetype {
    const REQUIRED: &'static [&'static str] = &["name", "entityType"];
}

#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateRealityArchetype {
    #[serde(default, deserialize_with = "patch::not_null")]
    pub name: Option<String>,
    #[validate(custom(function = "validate_entity_type"))]
    #[serde(default, deserialize_with = "patch::not_null")]
    pub entity_type: Option<String>,
    #[serde(default, deserialize_with = "patch::nullable")]
    pub description: Option<Option<String>>,
    #[serde(default, deserialize_with = "patch::nullable")]
    pub icon: Option<Option<String>>,
}

impl PayloadFields for UpdateRealityArchetype {}
