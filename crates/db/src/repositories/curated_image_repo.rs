//! Repository for the `curated_images` table.

use ecv_core::curation::APPROVAL_PENDING;
use ecv_core::patch;
use sqlx::types::Json;
use sqlx::PgPool;

use crate::models::curated_image::{CreateCuratedImage, CuratedImage, UpdateCuratedImage};

const COLUMNS: &str =
    "id, artist_id, project_id, image_url, prompt, rating, tags, approved, created_at";

/// Provides CRUD operations for curated images.
pub struct CuratedImageRepo;

impl CuratedImageRepo {
    /// Insert an image. `rating` defaults to 0, `tags` to an empty list and
    /// `approved` to pending.
    pub async fn create(
        pool: &PgPool,
        input: &CreateCuratedImage,
    ) -> Result<CuratedImage, sqlx::Error> {
        let query = format!(
            "INSERT INTO curated_images
                (artist_id, project_id, image_url, prompt, rating, tags, approved)
             VALUES ($1, $2, $3, $4, COALESCE($5, 0), COALESCE($6, '[]'::jsonb), $7)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, CuratedImage>(&query)
            .bind(&input.artist_id)
            .bind(&input.project_id)
            .bind(&input.image_url)
            .bind(&input.prompt)
            .bind(input.rating)
            .bind(input.tags.as_ref().map(Json))
            .bind(input.approved.unwrap_or(APPROVAL_PENDING))
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: &str) -> Result<Option<CuratedImage>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM curated_images WHERE id = $1");
        sqlx::query_as::<_, CuratedImage>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    pub async fn list_by_artist(
        pool: &PgPool,
        artist_id: &str,
    ) -> Result<Vec<CuratedImage>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM curated_images
             WHERE artist_id = $1
             ORDER BY created_at DESC"
        );
        sqlx::query_as::<_, CuratedImage>(&query)
            .bind(artist_id)
            .fetch_all(pool)
            .await
    }

    pub async fn update(
        pool: &PgPool,
        id: &str,
        input: &UpdateCuratedImage,
    ) -> Result<Option<CuratedImage>, sqlx::Error> {
        let (project_id_set, project_id) = patch::split(&input.project_id);
        let (prompt_set, prompt) = patch::split(&input.prompt);
        let query = format!(
            "UPDATE curated_images SET
                artist_id = COALESCE($2, artist_id),
                project_id = CASE WHEN $3 THEN $4 ELSE project_id END,
                image_url = COALESCE($5, image_url),
                prompt = CASE WHEN $6 THEN $7 ELSE prompt END,
                rating = COALESCE($8, rating),
                tags = COALESCE($9, tags),
                approved = COALESCE($10, approved)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, CuratedImage>(&query)
            .bind(id)
            .bind(&input.artist_id)
            .bind(project_id_set)
            .bind(project_id)
            .bind(&input.image_url)
            .bind(prompt_set)
            .bind(prompt)
            .bind(input.rating)
            .bind(input.tags.as_ref().map(Json))
            .bind(input.approved)
            .fetch_optional(pool)
            .await
    }

    pub async fn delete(pool: &PgPool, id: &str) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM curated_images WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
