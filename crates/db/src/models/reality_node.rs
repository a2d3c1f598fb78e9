//! Reality node entity model and DTOs.

use ecv_core::patch;
use ecv_core::reality::validate_entity_type;
use ecv_core::schema::PayloadFields;
use ecv_core::types::{AttributeMap, DbId, Position, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::types::Json;
use sqlx::FromRow;
use validator::Validate;

/// A narrative entity row from the `reality_nodes` table.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RealityNode {
    pub id: DbId,
    pub artist_id: DbId,
    /// One of `location`, `character`, `possession`, `concept`.
    #[serde(rename = "type")]
    #[sqlx(rename = "type")]
    pub node_type: String,
    pub name: String,
    pub description: Option<String>,
    pub attributes: Option<Json<AttributeMap>>,
    pub position: Option<Json<Position>>,
    pub created_at: Timestamp,
}

/// DTO for creating a new reality node.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateRealityNode {
    pub artist_id: DbId,
    #[serde(rename = "type")]
    #[validate(custom(function = "validate_entity_type"))]
    pub node_type: String,
    pub name: String,
    pub description: Option<String>,
    pub attributes: Option<AttributeMap>,
    pub position: Option<Position>,
}

impl PayloadFields for CreateRealityNode {
    const REQUIRED: &'static [&'static str] = &["artistId", "type", "name"];
    const RENAMED: &'static [(&'static str, &'static str)] = &[("node_type", "type")];
}

/// DTO for updating an existing reality node. All fields are optional.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateRealityNode {
    #[serde(default, deserialize_with = "patch::not_null")]
    pub artist_id: Option<DbId>,
    #[serde(rename = "type", default, deserialize_with = "patch::not_null")]
    #[validate(custom(function = "validate_entity_type"))]
    pub node_type: Option<String>,
    #[serde(default, deserialize_with = "patch::not_null")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "patch::nullable")]
    pub description: Option<Option<String>>,
    #[serde(default, deserialize_with = "patch::nullable")]
    pub attributes: Option<Option<AttributeMap>>,
    #[serde(default, deserialize_with = "patch::nullable")]
    pub position: Option<Option<Position>>,
}

impl PayloadFields for UpdateRealityNode {
    const RENAMED: &'static [(&'static str, &'static str)] = &[("node_type", "type")];
}
