//! REST client for Gemini `models/{model}:generateContent`.
//!
//! Wraps the endpoint using [`reqwest`]. Nothing here retries; callers
//! decide what a failure means to their users.

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use serde::Deserialize;
use serde_json::{json, Value};

use crate::dna::{parse_extracted_dna, ExtractedDna};
use crate::prompts::{lore_prompt, DNA_EXTRACTION_PROMPT};

/// Connection settings for the Gemini API.
#[derive(Debug, Clone)]
pub struct GeminiConfig {
    pub api_key: String,
    /// Model name, e.g. `gemini-2.0-flash-exp`.
    pub model: String,
    /// API root without a trailing slash, e.g.
    /// `https://generativelanguage.googleapis.com/v1beta`.
    pub base_url: String,
}

/// Errors from the Gemini API layer.
#[derive(Debug, thiserror::Error)]
pub enum GeminiError {
    /// The HTTP request itself failed (network, DNS, TLS, etc.).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Gemini returned a non-2xx status code.
    #[error("Gemini API error ({status}): {body}")]
    Api {
        status: u16,
        /// Raw response body for debugging.
        body: String,
    },

    /// The response carried no candidate text.
    #[error("Gemini returned an empty response")]
    EmptyResponse,

    /// The candidate text could not be interpreted.
    #[error("Malformed Gemini response: {0}")]
    Malformed(String),
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Debug, Deserialize)]
struct Part {
    text: Option<String>,
}

impl GenerateContentResponse {
    /// Concatenated text parts of the first candidate.
    fn into_text(self) -> Option<String> {
        let content = self.candidates.into_iter().next()?.content?;
        let text: String = content.parts.into_iter().filter_map(|p| p.text).collect();
        (!text.trim().is_empty()).then_some(text)
    }
}

/// HTTP client for the Gemini API.
pub struct GeminiClient {
    client: reqwest::Client,
    config: GeminiConfig,
}

impl GeminiClient {
    pub fn new(config: GeminiConfig) -> Self {
        Self::with_client(reqwest::Client::new(), config)
    }

    /// Create a client reusing an existing [`reqwest::Client`].
    pub fn with_client(client: reqwest::Client, config: GeminiConfig) -> Self {
        Self { client, config }
    }

    pub fn model(&self) -> &str {
        &self.config.model
    }

    /// Generate a narrative backstory for an artist concept.
    pub async fn generate_lore(&self, concept: &str) -> Result<String, GeminiError> {
        let parts = vec![json!({ "text": lore_prompt(concept) })];
        self.generate_content(parts).await
    }

    /// Extract physical traits from an image.
    ///
    /// The image is sent inline as base64 alongside the extraction prompt.
    pub async fn analyze_image(
        &self,
        image: &[u8],
        mime_type: &str,
    ) -> Result<ExtractedDna, GeminiError> {
        let parts = vec![
            json!({ "text": DNA_EXTRACTION_PROMPT }),
            json!({
                "inlineData": {
                    "mimeType": mime_type,
                    "data": BASE64.encode(image),
                }
            }),
        ];
        let text = self.generate_content(parts).await?;
        parse_extracted_dna(&text)
    }

    // ---- private helpers ----

    fn endpoint(&self) -> String {
        format!(
            "{}/models/{}:generateContent",
            self.config.base_url.trim_end_matches('/'),
            self.config.model
        )
    }

    /// Send a single user turn and return the first candidate's text.
    async fn generate_content(&self, parts: Vec<Value>) -> Result<String, GeminiError> {
        let body = json!({
            "contents": [{ "role": "user", "parts": parts }],
        });

        tracing::debug!(model = %self.config.model, "Sending Gemini generateContent request");

        let response = self
            .client
            .post(self.endpoint())
            .header("x-goog-api-key", &self.config.api_key)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<unreadable body>".to_string());
            return Err(GeminiError::Api {
                status: status.as_u16(),
                body,
            });
        }

        let parsed: GenerateContentResponse = response
            .json()
            .await
            .map_err(|e| GeminiError::Malformed(e.to_string()))?;
        parsed.into_text().ok_or(GeminiError::EmptyResponse)
    }
}
