//! Repository for the `reality_archetypes` table.

use ecv_core::patch;
use sqlx::PgPool;

use crate::models::archetype::{CreateRealityArchetype, RealityArchetype, UpdateRealityArchetype};

const COLUMNS: &str = "id, name, entity_type, description, icon, created_at";

/// Provides CRUD operations for archetype templates.
pub struct RealityArchetypeRepo;

impl RealityArchetypeRepo {
    pub async fn create(
        pool: &PgPool,
        input: &CreateRealityArchetype,
    ) -> Result<RealityArchetype, sqlx::Error> {
        let query = format!(
            "INSERT INTO reality_archetypes (name, entity_type, description, icon)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, RealityArchetype>(&query)
            .bind(&input.name)
            .bind(&input.entity_type)
            .bind(&input.description)
            .bind(&input.icon)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(
        pool: &PgPool,
        id: &str,
    ) -> Result<Option<RealityArchetype>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM reality_archetypes WHERE id = $1");
        sqlx::query_as::<_, RealityArchetype>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    pub async fn list(pool: &PgPool) -> Result<Vec<RealityArchetype>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM reality_archetypes ORDER BY created_at DESC");
        sqlx::query_as::<_, RealityArchetype>(&query)
            .fetch_all(pool)
            .await
    }

    pub async fn update(
        pool: &PgPool,
        id: &str,
        input: &UpdateRealityArchetype,
    ) -> Result<Option<RealityArchetype>, sqlx::Error> {
        let (description_set, description) = patch::split(&input.description);
        let (icon_set, icon) = patch::split(&input.icon);
        let query = format!(
            "UPDATE reality_archetypes SET
                name = COALESCE($2, name),
                entity_type = COALESCE($3, entity_type),
                description = CASE WHEN $4 THEN $5 ELSE description END,
                icon = CASE WHEN $6 THEN $7 ELSE icon END
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, RealityArchetype>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.entity_type)
            .bind(description_set)
            .bind(description)
            .bind(icon_set)
            .bind(icon)
            .fetch_optional(pool)
            .await
    }

    pub async fn delete(pool: &PgPool, id: &str) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM reality_archetypes WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
