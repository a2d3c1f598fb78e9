//! Load the demo dataset into the configured database.
//!
//! Applies pending migrations first, then inserts three demo artists and
//! their records. Running it twice duplicates the data.

use anyhow::Context;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use ecv_api::config::ServerConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "ecv_db=info,ecv_api=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = ServerConfig::from_env();
    let database_url = std::env::var("DATABASE_URL").context("DATABASE_URL must be set")?;

    let pool = ecv_db::create_pool(&database_url, config.database_max_connections)
        .await
        .context("Failed to connect to database")?;
    ecv_db::run_migrations(&pool)
        .await
        .context("Failed to run database migrations")?;

    let summary = ecv_db::seed::seed_demo_data(&pool)
        .await
        .context("Seeding failed")?;

    tracing::info!(
        artists = summary.artists,
        reality_nodes = summary.reality_nodes,
        projects = summary.projects,
        "Seed complete"
    );
    Ok(())
}
