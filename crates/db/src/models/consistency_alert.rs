//! Consistency alert model and DTOs.

use ecv_core::patch;
use ecv_core::schema::PayloadFields;
use ecv_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::types::Json;
use sqlx::FromRow;
use validator::Validate;

/// A manually recorded narrative inconsistency.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConsistencyAlert {
    pub id: DbId,
    pub artist_id: DbId,
    pub severity: String,
    pub title: String,
    pub description: String,
    pub affected_nodes: Json<Vec<String>>,
    pub resolved: i32,
    pub created_at: Timestamp,
}

#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateConsistencyAlert {
    pub artist_id: DbId,
    pub severity: String,
    pub title: String,
    pub description: String,
    pub affected_nodes: Option<Vec<String>>,
    #[validate(range(min = 0, max = 1, message = "must be 0 or 1"))]
    pub resolved: Option<i32>,
}

impl PayloadFields for CreateConsistencyAlert {
    const REQUIRED: &'static [&'static str] =
        &["artistId", "severity", "title", "description"];
}

#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateConsistencyAlert {
    #[serde(default, deserialize_with = "patch::not_null")]
    pub artist_id: Option<DbId>,
    #[serde(default, deserialize_with = "patch::not_null")]
    pub severity: Option<String>,
    #[serde(default, deserialize_with = "patch::not_null")]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "patch::not_null")]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "patch::not_null")]
    pub affected_nodes: Option<Vec<String>>,
    #[validate(range(min = 0, max = 1, message = "must be 0 or 1"))]
    #[serde(default, deserialize_with = "patch::not_null")]
    pub resolved: Option<i32>,
}

impl PayloadFields for UpdateConsistencyAlert {}
