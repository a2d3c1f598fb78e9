//! Route definitions for the `/ai` proxy endpoints.

use axum::extract::DefaultBodyLimit;
use axum::routing::post;
use axum::Router;

use crate::handlers::ai;
use crate::state::AppState;

/// Room for multipart boundaries and part headers on top of the file itself.
const MULTIPART_OVERHEAD_BYTES: usize = 64 * 1024;

/// Routes mounted at `/ai`.
///
/// ```text
/// POST /generate-lore    -> generate_lore
/// POST /analyze-image    -> analyze_image
/// ```
pub fn router(max_upload_bytes: usize) -> Router<AppState> {
    Router::new()
        .route("/generate-lore", post(ai::generate_lore))
        .route(
            "/analyze-image",
            post(ai::analyze_image)
                .layer(DefaultBodyLimit::max(max_upload_bytes + MULTIPART_OVERHEAD_BYTES)),
        )
}
