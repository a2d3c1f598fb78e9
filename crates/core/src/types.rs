use serde::{Deserialize, Serialize};

/// Primary keys are server-generated UUID strings stored as `VARCHAR`.
pub type DbId = String;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;

/// Free-form JSON object (`dna`, `ecvDna`, node `attributes`).
pub type AttributeMap = serde_json::Map<String, serde_json::Value>;

/// Canvas coordinates of a reality node in the graph view.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}
