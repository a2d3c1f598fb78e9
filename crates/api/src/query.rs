//! Shared query parameter types for API handlers.

use ecv_core::dates::parse_timestamp;
use ecv_core::types::{DbId, Timestamp};
use ecv_db::models::calendar_slot::CalendarSlotFilter;
use serde::Deserialize;

use crate::error::AppError;

/// `?artistId=` on list endpoints.
///
/// Required for artist-scoped kinds (see [`ArtistScope::require`]) and an
/// optional narrowing filter elsewhere. An empty value counts as absent.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArtistScope {
    pub artist_id: Option<DbId>,
}

impl ArtistScope {
    /// The artist id, if one was supplied.
    pub fn optional(&self) -> Option<&str> {
        self.artist_id.as_deref().filter(|id| !id.is_empty())
    }

    /// The artist id, or a 400 when it is missing.
    pub fn require(&self) -> Result<&str, AppError> {
        self.optional()
            .ok_or_else(|| AppError::BadRequest("artistId query parameter required".into()))
    }
}

/// `?artistId=&dateStart=&dateEnd=` on the calendar list.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalendarRangeParams {
    pub artist_id: Option<DbId>,
    pub date_start: Option<String>,
    pub date_end: Option<String>,
}

impl CalendarRangeParams {
    /// Convert into a repository filter. `artistId` is required; each date
    /// bound is optional but must parse when present.
    pub fn into_filter(self) -> Result<CalendarSlotFilter, AppError> {
        let scope = ArtistScope {
            artist_id: self.artist_id,
        };
        let artist_id = scope.require()?.to_string();
        Ok(CalendarSlotFilter {
            artist_id: Some(artist_id),
            date_start: parse_bound("dateStart", self.date_start.as_deref())?,
            date_end: parse_bound("dateEnd", self.date_end.as_deref())?,
        })
    }
}

fn parse_bound(name: &str, raw: Option<&str>) -> Result<Option<Timestamp>, AppError> {
    match raw.filter(|s| !s.trim().is_empty()) {
        None => Ok(None),
        Some(raw) => parse_timestamp(raw)
            .map(Some)
            .ok_or_else(|| AppError::BadRequest(format!("{name} is not a valid date: '{raw}'"))),
    }
}
