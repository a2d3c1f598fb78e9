//! Client for the Google Gemini `generateContent` endpoint.
//!
//! Two calls are exposed: free-text lore generation from a concept, and
//! structured DNA extraction from a portrait image.

pub mod client;
pub mod dna;
pub mod prompts;

pub use client::{GeminiClient, GeminiConfig, GeminiError};
pub use dna::ExtractedDna;
