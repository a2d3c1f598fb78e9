//! Marketplace listing model and DTOs.

use ecv_core::patch;
use ecv_core::schema::PayloadFields;
use ecv_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

pub const DEFAULT_STATUS: &str = "active";

#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MarketplaceListing {
    pub id: DbId,
    pub artist_id: DbId,
    pub title: String,
    #[serde(rename = "type")]
    #[sqlx(rename = "type")]
    pub listing_type: String,
    pub price: i32,
    pub duration: Option<String>,
    pub views: i32,
    pub image_url: Option<String>,
    pub status: String,
    pub created_at: Timestamp,
}

#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateMarketplaceListing {
    pub artist_id: DbId,
    pub title: String,
    #[serde(rename = "type")]
    pub listing_type: String,
    pub price: i32,
    pub duration: Option<String>,
    pub views: Option<i32>,
    pub image_url: Option<String>,
    pub status: Option<String>,
}

impl PayloadFields for CreateMarketplaceListing {
    const REQUIRED: &'static [&'static str] = &["artistId", "title", "type", "price"];
    const RENAMED: &'static [(&'static str, &'static str)] = &[("listing_type", "type")];
}

#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateMarketplaceListing {
    #[serde(default, deserialize_with = "patch::not_null")]
    pub artist_id: Option<DbId>,
    #[serde(default, deserialize_with = "patch::not_null")]
    pub title: Option<String>,
    #[serde(rename = "type", default, deserialize_with = "patch::not_null")]
    pub listing_type: Option<String>,
    #[serde(default, deserialize_with = "patch::not_null")]
    pub price: Option<i32>,
    #[serde(default, deserialize_with = "patch::nullable")]
    pub duration: Option<Option<String>>,
    #[serde(default, deserialize_with = "patch::not_null")]
    pub views: Option<i32>,
    #[serde(default, deserialize_with = "patch::nullable")]
    pub image_url: Option<Option<String>>,
    #[serde(default, deserialize_with = "patch::not_null")]
    pub status: Option<String>,
}

impl PayloadFields for UpdateMarketplaceListing {
    const RENAMED: &'static [(&'static str, &'static str)] = &[("listing_type", "type")];
}
