//! Repository for the `marketplace_listings` table.

use ecv_core::patch;
use sqlx::PgPool;

use crate::models::marketplace_listing::{
    CreateMarketplaceListing, MarketplaceListing, UpdateMarketplaceListing, DEFAULT_STATUS,
};

const COLUMNS: &str =
    "id, artist_id, title, type, price, duration, views, image_url, status, created_at";

/// Provides CRUD operations for marketplace listings.
pub struct MarketplaceListingRepo;

impl MarketplaceListingRepo {
    pub async fn create(
        pool: &PgPool,
        input: &CreateMarketplaceListing,
    ) -> Result<MarketplaceListing, sqlx::Error> {
        let query = format!(
            "INSERT INTO marketplace_listings
                (artist_id, title, type, price, duration, views, image_url, status)
             VALUES ($1, $2, $3, $4, $5, COALESCE($6, 0), $7, COALESCE($8, $9))
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, MarketplaceListing>(&query)
            .bind(&input.artist_id)
            .bind(&input.title)
            .bind(&input.listing_type)
            .bind(input.price)
            .bind(&input.duration)
            .bind(input.views)
            .bind(&input.image_url)
            .bind(&input.status)
            .bind(DEFAULT_STATUS)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(
        pool: &PgPool,
        id: &str,
    ) -> Result<Option<MarketplaceListing>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM marketplace_listings WHERE id = $1");
        sqlx::query_as::<_, MarketplaceListing>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List listings newest first, optionally restricted to one artist.
    pub async fn list(
        pool: &PgPool,
        artist_id: Option<&str>,
    ) -> Result<Vec<MarketplaceListing>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM marketplace_listings
             WHERE $1::varchar IS NULL OR artist_id = $1
             ORDER BY created_at DESC"
        );
        sqlx::query_as::<_, MarketplaceListing>(&query)
            .bind(artist_id)
            .fetch_all(pool)
            .await
    }

    pub async fn update(
        pool: &PgPool,
        id: &str,
        input: &UpdateMarketplaceListing,
    ) -> Result<Option<MarketplaceListing>, sqlx::Error> {
        let (duration_set, duration) = patch::split(&input.duration);
        let (image_url_set, image_url) = patch::split(&input.image_url);
        let query = format!(
            "UPDATE marketplace_listings SET
                artist_id = COALESCE($2, artist_id),
                title = COALESCE($3, title),
                type = COALESCE($4, type),
                price = COALESCE($5, price),
                duration = CASE WHEN $6 THEN $7 ELSE duration END,
                views = COALESCE($8, views),
                image_url = CASE WHEN $9 THEN $10 ELSE image_url END,
                status = COALESCE($11, status)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, MarketplaceListing>(&query)
            .bind(id)
            .bind(&input.artist_id)
            .bind(&input.title)
            .bind(&input.listing_type)
            .bind(input.price)
            .bind(duration_set)
            .bind(duration)
            .bind(input.views)
            .bind(image_url_set)
            .bind(image_url)
            .bind(&input.status)
            .fetch_optional(pool)
            .await
    }

    pub async fn delete(pool: &PgPool, id: &str) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM marketplace_listings WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
