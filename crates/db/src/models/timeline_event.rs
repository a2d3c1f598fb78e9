//! Timeline event entity model and DTOs.

use ecv_core::schema::PayloadFields;
use ecv_core::types::{DbId, Timestamp};
use ecv_core::{dates, patch};
use serde::{Deserialize, Serialize};
use sqlx::types::Json;
use sqlx::FromRow;
use validator::Validate;

/// Event type applied when the payload omits one.
pub const DEFAULT_EVENT_TYPE: &str = "evento";

/// A dated story beat from the `timeline_events` table.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TimelineEvent {
    pub id: DbId,
    pub artist_id: DbId,
    pub title: String,
    pub description: Option<String>,
    pub event_date: Timestamp,
    #[serde(rename = "type")]
    #[sqlx(rename = "type")]
    pub event_type: String,
    /// Reality node ids. Not checked against `reality_nodes`.
    pub related_nodes: Json<Vec<String>>,
    pub created_at: Timestamp,
}

/// DTO for creating a timeline event.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateTimelineEvent {
    pub artist_id: DbId,
    pub title: String,
    pub description: Option<String>,
    #[serde(deserialize_with = "dates::required")]
    pub event_date: Timestamp,
    #[serde(rename = "type")]
    pub event_type: Option<String>,
    pub related_nodes: Option<Vec<String>>,
}

impl PayloadFields for CreateTimelineEvent {
    const REQUIRED: &'static [&'static str] = &["artistId", "title", "eventDate"];
    const RENAMED: &'static [(&'static str, &'static str)] = &[("event_type", "type")];
}

/// DTO for updating a timeline event. All fields are optional.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTimelineEvent {
    #[serde(default, deserialize_with = "patch::not_null")]
    pub artist_id: Option<DbId>,
    #[serde(default, deserialize_with = "patch::not_null")]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "patch::nullable")]
    pub description: Option<Option<String>>,
    #[serde(default, deserialize_with = "dates::present")]
    pub event_date: Option<Timestamp>,
    #[serde(rename = "type", default, deserialize_with = "patch::not_null")]
    pub event_type: Option<String>,
    #[serde(default, deserialize_with = "patch::not_null")]
    pub related_nodes: Option<Vec<String>>,
}

impl PayloadFields for UpdateTimelineEvent {
    const RENAMED: &'static [(&'static str, &'static str)] = &[("event_type", "type")];
}
