//! Repository for the `artists` table.

use ecv_core::patch;
use sqlx::types::Json;
use sqlx::PgPool;

use crate::models::artist::{Artist, CreateArtist, UpdateArtist};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, genre, platform, followers, ecv_dna, dna, status, created_at";

/// Provides CRUD operations for artists.
pub struct ArtistRepo;

impl ArtistRepo {
    /// Insert a new artist, returning the created row.
    ///
    /// `followers` defaults to 0 and `status` to `active`.
    pub async fn create(pool: &PgPool, input: &CreateArtist) -> Result<Artist, sqlx::Error> {
        let query = format!(
            "INSERT INTO artists (name, genre, platform, followers, ecv_dna, dna, status)
             VALUES ($1, $2, $3, COALESCE($4, 0), $5, $6, COALESCE($7, 'active'))
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Artist>(&query)
            .bind(&input.name)
            .bind(&input.genre)
            .bind(&input.platform)
            .bind(input.followers)
            .bind(input.ecv_dna.as_ref().map(Json))
            .bind(input.dna.as_ref().map(Json))
            .bind(&input.status)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: &str) -> Result<Option<Artist>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM artists WHERE id = $1");
        sqlx::query_as::<_, Artist>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all artists ordered by most recently created first.
    pub async fn list(pool: &PgPool) -> Result<Vec<Artist>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM artists ORDER BY created_at DESC");
        sqlx::query_as::<_, Artist>(&query).fetch_all(pool).await
    }

    /// Update an artist. Only supplied fields are applied; an explicit
    /// `null` clears `ecvDna` or `dna`.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: &str,
        input: &UpdateArtist,
    ) -> Result<Option<Artist>, sqlx::Error> {
        let (ecv_dna_set, ecv_dna) = patch::split(&input.ecv_dna);
        let (dna_set, dna) = patch::split(&input.dna);
        let query = format!(
            "UPDATE artists SET
                name = COALESCE($2, name),
                genre = COALESCE($3, genre),
                platform = COALESCE($4, platform),
                followers = COALESCE($5, followers),
                ecv_dna = CASE WHEN $6 THEN $7 ELSE ecv_dna END,
                dna = CASE WHEN $8 THEN $9 ELSE dna END,
                status = COALESCE($10, status)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Artist>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.genre)
            .bind(&input.platform)
            .bind(input.followers)
            .bind(ecv_dna_set)
            .bind(ecv_dna.map(Json))
            .bind(dna_set)
            .bind(dna.map(Json))
            .bind(&input.status)
            .fetch_optional(pool)
            .await
    }

    /// Delete an artist and, through cascading foreign keys, everything it
    /// owns. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: &str) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM artists WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
