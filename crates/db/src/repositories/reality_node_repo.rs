//! Repository for the `reality_nodes` table.

use ecv_core::patch;
use sqlx::types::Json;
use sqlx::PgPool;

use crate::models::reality_node::{CreateRealityNode, RealityNode, UpdateRealityNode};

const COLUMNS: &str = "id, artist_id, type, name, description, attributes, position, created_at";

/// Provides CRUD operations for reality nodes.
pub struct RealityNodeRepo;

impl RealityNodeRepo {
    pub async fn create(
        pool: &PgPool,
        input: &CreateRealityNode,
    ) -> Result<RealityNode, sqlx::Error> {
        let query = format!(
            "INSERT INTO reality_nodes (artist_id, type, name, description, attributes, position)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, RealityNode>(&query)
            .bind(&input.artist_id)
            .bind(&input.node_type)
            .bind(&input.name)
            .bind(&input.description)
            .bind(input.attributes.as_ref().map(Json))
            .bind(input.position.map(Json))
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: &str) -> Result<Option<RealityNode>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM reality_nodes WHERE id = $1");
        sqlx::query_as::<_, RealityNode>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List an artist's nodes, newest first.
    pub async fn list_by_artist(
        pool: &PgPool,
        artist_id: &str,
    ) -> Result<Vec<RealityNode>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM reality_nodes
             WHERE artist_id = $1
             ORDER BY created_at DESC"
        );
        sqlx::query_as::<_, RealityNode>(&query)
            .bind(artist_id)
            .fetch_all(pool)
            .await
    }

    pub async fn update(
        pool: &PgPool,
        id: &str,
        input: &UpdateRealityNode,
    ) -> Result<Option<RealityNode>, sqlx::Error> {
        let (description_set, description) = patch::split(&input.description);
        let (attributes_set, attributes) = patch::split(&input.attributes);
        let (position_set, position) = patch::split(&input.position);
        let query = format!(
            "UPDATE reality_nodes SET
                artist_id = COALESCE($2, artist_id),
                type = COALESCE($3, type),
                name = COALESCE($4, name),
                description = CASE WHEN $5 THEN $6 ELSE description END,
                attributes = CASE WHEN $7 THEN $8 ELSE attributes END,
                position = CASE WHEN $9 THEN $10 ELSE position END
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, RealityNode>(&query)
            .bind(id)
            .bind(&input.artist_id)
            .bind(&input.node_type)
            .bind(&input.name)
            .bind(description_set)
            .bind(description)
            .bind(attributes_set)
            .bind(attributes.map(Json))
            .bind(position_set)
            .bind(position.map(Json))
            .fetch_optional(pool)
            .await
    }

    /// Delete a node. Relationships touching it go with it.
    pub async fn delete(pool: &PgPool, id: &str) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM reality_nodes WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
