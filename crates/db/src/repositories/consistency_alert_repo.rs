//! Repository for the `consistency_alerts` table.

use ecv_core::alert::UNRESOLVED;
use sqlx::types::Json;
use sqlx::PgPool;

use crate::models::consistency_alert::{
    ConsistencyAlert, CreateConsistencyAlert, UpdateConsistencyAlert,
};

const COLUMNS: &str =
    "id, artist_id, severity, title, description, affected_nodes, resolved, created_at";

/// Provides CRUD operations for consistency alerts.
pub struct ConsistencyAlertRepo;

impl ConsistencyAlertRepo {
    pub async fn create(
        pool: &PgPool,
        input: &CreateConsistencyAlert,
    ) -> Result<ConsistencyAlert, sqlx::Error> {
        let query = format!(
            "INSERT INTO consistency_alerts
                (artist_id, severity, title, description, affected_nodes, resolved)
             VALUES ($1, $2, $3, $4, COALESCE($5, '[]'::jsonb), $6)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, ConsistencyAlert>(&query)
            .bind(&input.artist_id)
            .bind(&input.severity)
            .bind(&input.title)
            .bind(&input.description)
            .bind(input.affected_nodes.as_ref().map(Json))
            .bind(input.resolved.unwrap_or(UNRESOLVED))
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(
        pool: &PgPool,
        id: &str,
    ) -> Result<Option<ConsistencyAlert>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM consistency_alerts WHERE id = $1");
        sqlx::query_as::<_, ConsistencyAlert>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    pub async fn list_by_artist(
        pool: &PgPool,
        artist_id: &str,
    ) -> Result<Vec<ConsistencyAlert>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM consistency_alerts
             WHERE artist_id = $1
             ORDER BY created_at DESC"
        );
        sqlx::query_as::<_, ConsistencyAlert>(&query)
            .bind(artist_id)
            .fetch_all(pool)
            .await
    }

    pub async fn update(
        pool: &PgPool,
        id: &str,
        input: &UpdateConsistencyAlert,
    ) -> Result<Option<ConsistencyAlert>, sqlx::Error> {
        let query = format!(
            "UPDATE consistency_alerts SET
                artist_id = COALESCE($2, artist_id),
                severity = COALESCE($3, severity),
                title = COALESCE($4, title),
                description = COALESCE($5, description),
                affected_nodes = COALESCE($6, affected_nodes),
                resolved = COALESCE($7, resolved)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, ConsistencyAlert>(&query)
            .bind(id)
            .bind(&input.artist_id)
            .bind(&input.severity)
            .bind(&input.title)
            .bind(&input.description)
            .bind(input.affected_nodes.as_ref().map(Json))
            .bind(input.resolved)
            .fetch_optional(pool)
            .await
    }

    pub async fn delete(pool: &PgPool, id: &str) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM consistency_alerts WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
