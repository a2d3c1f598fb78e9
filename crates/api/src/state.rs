use std::sync::Arc;

use ecv_gemini::GeminiClient;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: ecv_db::DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Gemini client, `None` when no API key is configured.
    pub gemini: Option<Arc<GeminiClient>>,
}

impl AppState {
    /// Build state from a pool and configuration, creating the Gemini client
    /// when the configuration carries an API key.
    pub fn new(pool: ecv_db::DbPool, config: ServerConfig) -> Self {
        let gemini = config
            .gemini
            .clone()
            .map(|gemini| Arc::new(GeminiClient::new(gemini)));
        Self {
            pool,
            config: Arc::new(config),
            gemini,
        }
    }
}
