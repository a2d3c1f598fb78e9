//! Repository for the `timeline_events` table.

use ecv_core::patch;
use sqlx::types::Json;
use sqlx::PgPool;

use crate::models::timeline_event::{
    CreateTimelineEvent, TimelineEvent, UpdateTimelineEvent, DEFAULT_EVENT_TYPE,
};

const COLUMNS: &str =
    "id, artist_id, title, description, event_date, type, related_nodes, created_at";

/// Provides CRUD operations for timeline events.
pub struct TimelineEventRepo;

impl TimelineEventRepo {
    /// Insert a new event. `type` defaults to `evento` and `relatedNodes`
    /// to an empty list.
    pub async fn create(
        pool: &PgPool,
        input: &CreateTimelineEvent,
    ) -> Result<TimelineEvent, sqlx::Error> {
        let query = format!(
            "INSERT INTO timeline_events
                (artist_id, title, description, event_date, type, related_nodes)
             VALUES ($1, $2, $3, $4, COALESCE($5, $6), COALESCE($7, '[]'::jsonb))
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, TimelineEvent>(&query)
            .bind(&input.artist_id)
            .bind(&input.title)
            .bind(&input.description)
            .bind(input.event_date)
            .bind(&input.event_type)
            .bind(DEFAULT_EVENT_TYPE)
            .bind(input.related_nodes.as_ref().map(Json))
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(
        pool: &PgPool,
        id: &str,
    ) -> Result<Option<TimelineEvent>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM timeline_events WHERE id = $1");
        sqlx::query_as::<_, TimelineEvent>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List an artist's events, latest event date first.
    pub async fn list_by_artist(
        pool: &PgPool,
        artist_id: &str,
    ) -> Result<Vec<TimelineEvent>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM timeline_events
             WHERE artist_id = $1
             ORDER BY event_date DESC"
        );
        sqlx::query_as::<_, TimelineEvent>(&query)
            .bind(artist_id)
            .fetch_all(pool)
            .await
    }

    pub async fn update(
        pool: &PgPool,
        id: &str,
        input: &UpdateTimelineEvent,
    ) -> Result<Option<TimelineEvent>, sqlx::Error> {
        let (description_set, description) = patch::split(&input.description);
        let query = format!(
            "UPDATE timeline_events SET
                artist_id = COALESCE($2, artist_id),
                title = COALESCE($3, title),
                description = CASE WHEN $4 THEN $5 ELSE description END,
                event_date = COALESCE($6, event_date),
                type = COALESCE($7, type),
                related_nodes = COALESCE($8, related_nodes)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, TimelineEvent>(&query)
            .bind(id)
            .bind(&input.artist_id)
            .bind(&input.title)
            .bind(description_set)
            .bind(description)
            .bind(input.event_date)
            .bind(&input.event_type)
            .bind(input.related_nodes.as_ref().map(Json))
            .fetch_optional(pool)
            .await
    }

    pub async fn delete(pool: &PgPool, id: &str) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM timeline_events WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
