//! Repository for the `calendar_slots` table.

use ecv_core::calendar::STATUS_PLANNED;
use ecv_core::patch;
use sqlx::PgPool;

use crate::models::calendar_slot::{
    CalendarSlot, CalendarSlotFilter, CreateCalendarSlot, UpdateCalendarSlot,
};

const COLUMNS: &str =
    "id, artist_id, title, content_type, status, scheduled_at, brief, created_at";

/// Provides CRUD operations for calendar slots.
pub struct CalendarSlotRepo;

impl CalendarSlotRepo {
    /// Insert a slot. `status` defaults to `Planejado`.
    pub async fn create(
        pool: &PgPool,
        input: &CreateCalendarSlot,
    ) -> Result<CalendarSlot, sqlx::Error> {
        let query = format!(
            "INSERT INTO calendar_slots (artist_id, title, content_type, status, scheduled_at, brief)
             VALUES ($1, $2, $3, COALESCE($4, $5), $6, $7)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, CalendarSlot>(&query)
            .bind(&input.artist_id)
            .bind(&input.title)
            .bind(&input.content_type)
            .bind(&input.status)
            .bind(STATUS_PLANNED)
            .bind(input.scheduled_at)
            .bind(&input.brief)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: &str) -> Result<Option<CalendarSlot>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM calendar_slots WHERE id = $1");
        sqlx::query_as::<_, CalendarSlot>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List slots in scheduled order. Each filter field narrows the result
    /// when set; the date bounds are inclusive.
    pub async fn list(
        pool: &PgPool,
        filter: &CalendarSlotFilter,
    ) -> Result<Vec<CalendarSlot>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM calendar_slots
             WHERE ($1::varchar IS NULL OR artist_id = $1)
               AND ($2::timestamptz IS NULL OR scheduled_at >= $2)
               AND ($3::timestamptz IS NULL OR scheduled_at <= $3)
             ORDER BY scheduled_at ASC"
        );
        sqlx::query_as::<_, CalendarSlot>(&query)
            .bind(&filter.artist_id)
            .bind(filter.date_start)
            .bind(filter.date_end)
            .fetch_all(pool)
            .await
    }

    pub async fn update(
        pool: &PgPool,
        id: &str,
        input: &UpdateCalendarSlot,
    ) -> Result<Option<CalendarSlot>, sqlx::Error> {
        let (brief_set, brief) = patch::split(&input.brief);
        let query = format!(
            "UPDATE calendar_slots SET
                artist_id = COALESCE($2, artist_id),
                title = COALESCE($3, title),
                content_type = COALESCE($4, content_type),
                status = COALESCE($5, status),
                scheduled_at = COALESCE($6, scheduled_at),
                brief = CASE WHEN $7 THEN $8 ELSE brief END
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, CalendarSlot>(&query)
            .bind(id)
            .bind(&input.artist_id)
            .bind(&input.title)
            .bind(&input.content_type)
            .bind(&input.status)
            .bind(input.scheduled_at)
            .bind(brief_set)
            .bind(brief)
            .fetch_optional(pool)
            .await
    }

    pub async fn delete(pool: &PgPool, id: &str) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM calendar_slots WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
