//! Repository for the `reality_relationships` table.

use ecv_core::reality::DEFAULT_STRENGTH;
use sqlx::PgPool;

use crate::models::reality_relationship::{
    CreateRealityRelationship, RealityRelationship, UpdateRealityRelationship,
};

const COLUMNS: &str = "id, from_node_id, to_node_id, relationship_type, strength, created_at";

/// Provides CRUD operations for reality relationships.
pub struct RealityRelationshipRepo;

impl RealityRelationshipRepo {
    /// Insert a relationship. Unknown endpoint ids fail on the foreign key.
    pub async fn create(
        pool: &PgPool,
        input: &CreateRealityRelationship,
    ) -> Result<RealityRelationship, sqlx::Error> {
        let query = format!(
            "INSERT INTO reality_relationships (from_node_id, to_node_id, relationship_type, strength)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, RealityRelationship>(&query)
            .bind(&input.from_node_id)
            .bind(&input.to_node_id)
            .bind(&input.relationship_type)
            .bind(input.strength.unwrap_or(DEFAULT_STRENGTH))
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(
        pool: &PgPool,
        id: &str,
    ) -> Result<Option<RealityRelationship>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM reality_relationships WHERE id = $1");
        sqlx::query_as::<_, RealityRelationship>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List relationships, newest first. With an artist id, keep only the
    /// edges whose source node belongs to that artist.
    pub async fn list(
        pool: &PgPool,
        artist_id: Option<&str>,
    ) -> Result<Vec<RealityRelationship>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM reality_relationships r
             WHERE $1::varchar IS NULL OR EXISTS (
                 SELECT 1 FROM reality_nodes n
                 WHERE n.id = r.from_node_id AND n.artist_id = $1
             )
             ORDER BY created_at DESC"
        );
        sqlx::query_as::<_, RealityRelationship>(&query)
            .bind(artist_id)
            .fetch_all(pool)
            .await
    }

    pub async fn update(
        pool: &PgPool,
        id: &str,
        input: &UpdateRealityRelationship,
    ) -> Result<Option<RealityRelationship>, sqlx::Error> {
        let query = format!(
            "UPDATE reality_relationships SET
                from_node_id = COALESCE($2, from_node_id),
                to_node_id = COALESCE($3, to_node_id),
                relationship_type = COALESCE($4, relationship_type),
                strength = COALESCE($5, strength)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, RealityRelationship>(&query)
            .bind(id)
            .bind(&input.from_node_id)
            .bind(&input.to_node_id)
            .bind(&input.relationship_type)
            .bind(input.strength)
            .fetch_optional(pool)
            .await
    }

    pub async fn delete(pool: &PgPool, id: &str) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM reality_relationships WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
