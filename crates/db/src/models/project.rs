//! Project entity model and DTOs.

use ecv_core::schema::PayloadFields;
use ecv_core::types::{DbId, Timestamp};
use ecv_core::{dates, patch};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

pub const DEFAULT_STATUS: &str = "planning";
pub const DEFAULT_PRIORITY: &str = "medium";

/// A production work item from the `projects` table.
///
/// `updated_at` is refreshed by every update regardless of payload.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: DbId,
    pub artist_id: DbId,
    pub title: String,
    pub description: Option<String>,
    pub status: String,
    pub priority: String,
    pub due_date: Option<Timestamp>,
    pub assignee: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a project.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateProject {
    pub artist_id: DbId,
    pub title: String,
    pub description: Option<String>,
    pub status: Option<String>,
    pub priority: Option<String>,
    #[serde(default, deserialize_with = "dates::optional")]
    pub due_date: Option<Timestamp>,
    pub assignee: Option<String>,
}

impl PayloadFields for CreateProject {
    const REQUIRED: &'static [&'static str] = &["artistId", "title"];
}

/// DTO for updating a project. All fields are optional.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProject {
    #[serde(default, deserialize_with = "patch::not_null")]
    pub artist_id: Option<DbId>,
    #[serde(default, deserialize_with = "patch::not_null")]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "patch::nullable")]
    pub description: Option<Option<String>>,
    #[serde(default, deserialize_with = "patch::not_null")]
    pub status: Option<String>,
    #[serde(default, deserialize_with = "patch::not_null")]
    pub priority: Option<String>,
    #[serde(default, deserialize_with = "dates::patch")]
    pub due_date: Option<Option<Timestamp>>,
    #[serde(default, deserialize_with = "patch::nullable")]
    pub assignee: Option<Option<String>>,
}

impl PayloadFields for UpdateProject {}
