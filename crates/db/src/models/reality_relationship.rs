//! Reality relationship entity model and DTOs.

use ecv_core::patch;
use ecv_core::schema::PayloadFields;
use ecv_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A directed, weighted edge row from the `reality_relationships` table.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RealityRelationship {
    pub id: DbId,
    pub from_node_id: DbId,
    pub to_node_id: DbId,
    pub relationship_type: String,
    pub strength: i32,
    pub created_at: Timestamp,
}

/// DTO for creating a relationship. Both node ids are checked only by the
/// foreign keys.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateRealityRelationship {
    pub from_node_id: DbId,
    pub to_node_id: DbId,
    pub relationship_type: String,
    /// Defaults to 5 if omitted.
    pub strength: Option<i32>,
}

impl PayloadFields for CreateRealityRelationship {
    const REQUIRED: &'static [&'static str] = &["fromNodeId", "toNodeId", "relationshipType"];
}

/// DTO for updating a relationship. All fields are optional.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateRealityRelationship {
    #[serde(default, deserialize_with = "patch::not_null")]
    pub from_node_id: Option<DbId>,
    #[serde(default, deserialize_with = "patch::not_null")]
    pub to_node_id: Option<DbId>,
    #[serde(default, deserialize_with = "patch::not_null")]
    pub relationship_type: Option<String>,
    #[serde(default, deserialize_with = "patch::not_null")]
    pub strength: Option<i32>,
}

impl PayloadFields for UpdateRealityRelationship {}

