//! Liveness endpoint, mounted at the root rather than under `/api`.

use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};
use serde::Serialize;

use crate::state::AppState;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthReport {
    /// `ok`, or `degraded` when the database does not answer.
    pub status: &'static str,
    pub version: &'static str,
    pub db_healthy: bool,
    /// Whether the `/api/ai` endpoints have a Gemini key to work with.
    pub ai_configured: bool,
}

async fn report(State(state): State<AppState>) -> Json<HealthReport> {
    let db_healthy = match ecv_db::health_check(&state.pool).await {
        Ok(()) => true,
        Err(err) => {
            tracing::warn!(error = %err, "Health check could not reach the database");
            false
        }
    };

    Json(HealthReport {
        status: if db_healthy { "ok" } else { "degraded" },
        version: env!("CARGO_PKG_VERSION"),
        db_healthy,
        ai_configured: state.gemini.is_some(),
    })
}

/// `GET /health`
pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(report))
}
