use ecv_gemini::GeminiConfig;

const DEFAULT_GEMINI_MODEL: &str = "gemini-2.0-flash-exp";
const DEFAULT_GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Server configuration loaded from environment variables.
///
/// All fields have defaults suitable for local development. `DATABASE_URL`
/// is read separately by the binaries.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `5000`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS` env var.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// Connection pool size (default: `10`).
    pub database_max_connections: u32,
    /// Largest accepted image upload in bytes (default: 5 MiB).
    pub max_upload_bytes: usize,
    /// Present only when `GEMINI_API_KEY` is set and non-empty.
    pub gemini: Option<GeminiConfig>,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                    | Default                                              |
    /// |----------------------------|------------------------------------------------------|
    /// | `HOST`                     | `0.0.0.0`                                            |
    /// | `PORT`                     | `5000`                                               |
    /// | `CORS_ORIGINS`             | `http://localhost:5173`                              |
    /// | `REQUEST_TIMEOUT_SECS`     | `30`                                                 |
    /// | `DATABASE_MAX_CONNECTIONS` | `10`                                                 |
    /// | `MAX_UPLOAD_BYTES`         | `5242880`                                            |
    /// | `GEMINI_API_KEY`           | unset (AI endpoints answer 400)                      |
    /// | `GEMINI_MODEL`             | `gemini-2.0-flash-exp`                               |
    /// | `GEMINI_BASE_URL`          | `https://generativelanguage.googleapis.com/v1beta`   |
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "5000".into())
            .parse()
            .expect("PORT must be a valid u16");

        let cors_origins: Vec<String> = std::env::var("CORS_ORIGINS")
            .unwrap_or_else(|_| "http://localhost:5173".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        let database_max_connections: u32 = std::env::var("DATABASE_MAX_CONNECTIONS")
            .unwrap_or_else(|_| "10".into())
            .parse()
            .expect("DATABASE_MAX_CONNECTIONS must be a valid u32");

        let max_upload_bytes: usize = std::env::var("MAX_UPLOAD_BYTES")
            .unwrap_or_else(|_| "5242880".into())
            .parse()
            .expect("MAX_UPLOAD_BYTES must be a valid usize");

        let gemini = std::env::var("GEMINI_API_KEY")
            .ok()
            .filter(|key| !key.trim().is_empty())
            .map(|api_key| GeminiConfig {
                api_key,
                model: std::env::var("GEMINI_MODEL")
                    .unwrap_or_else(|_| DEFAULT_GEMINI_MODEL.into()),
                base_url: std::env::var("GEMINI_BASE_URL")
                    .unwrap_or_else(|_| DEFAULT_GEMINI_BASE_URL.into()),
            });

        Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            database_max_connections,
            max_upload_bytes,
            gemini,
        }
    }
}
