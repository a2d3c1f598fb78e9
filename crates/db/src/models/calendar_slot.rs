//! Content calendar slot model, DTOs, and list filter.

use ecv_core::calendar::validate_status;
use ecv_core::schema::PayloadFields;
use ecv_core::types::{DbId, Timestamp};
use ecv_core::{dates, patch};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A planned piece of content from the `calendar_slots` table.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CalendarSlot {
    pub id: DbId,
    pub artist_id: DbId,
    pub title: String,
    pub content_type: String,
    pub status: String,
    pub scheduled_at: Timestamp,
    pub brief: Option<String>,
    pub created_at: Timestamp,
}

/// DTO for creating a calendar slot.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateCalendarSlot {
    pub artist_id: DbId,
    pub title: String,
    pub content_type: String,
    /// Defaults to `Planejado` if omitted.
    #[validate(custom(function = "validate_status"))]
    pub status: Option<String>,
    #[serde(deserialize_with = "dates::required")]
    pub scheduled_at: Timestamp,
    pub brief: Option<String>,
}

impl PayloadFields for CreateCalendarSlot {
    const REQUIRED: &'static [&'static str] = &["artistId", "title", "contentType", "scheduledAt"];
}

/// DTO for updating a calendar slot. All fields are optional.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCalendarSlot {
    #[serde(default, deserialize_with = "patch::not_null")]
    pub artist_id: Option<DbId>,
    #[serde(default, deserialize_with = "patch::not_null")]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "patch::not_null")]
    pub content_type: Option<String>,
    #[validate(custom(function = "validate_status"))]
    #[serde(default, deserialize_with = "patch::not_null")]
    pub status: Option<String>,
    #[serde(default, deserialize_with = "dates::present")]
    pub scheduled_at: Option<Timestamp>,
    #[serde(default, deserialize_with = "patch::nullable")]
    pub brief: Option<Option<String>>,
}

impl PayloadFields for UpdateCalendarSlot {}

/// Filter for listing calendar slots. Both bounds are inclusive.
#[derive(Debug, Clone, Default)]
pub struct CalendarSlotFilter {
    pub artist_id: Option<DbId>,
    pub date_start: Option<Timestamp>,
    pub date_end: Option<Timestamp>,
}
