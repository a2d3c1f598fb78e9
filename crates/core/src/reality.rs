//! Reality graph entity types.
//!
//! Reality nodes and archetypes share one closed set of entity types.

use validator::ValidationError;

use crate::schema::one_of;

pub const ENTITY_LOCATION: &str = "location";
pub const ENTITY_CHARACTER: &str = "character";
pub const ENTITY_POSSESSION: &str = "possession";
pub const ENTITY_CONCEPT: &str = "concept";

/// All valid reality entity types.
pub const VALID_ENTITY_TYPES: &[&str] = &[
    ENTITY_LOCATION,
    ENTITY_CHARACTER,
    ENTITY_POSSESSION,
    ENTITY_CONCEPT,
];

/// Relationship strength applied when the payload omits one.
pub const DEFAULT_STRENGTH: i32 = 5;

/// Validate a node `type` or archetype `entityType`.
pub fn validate_entity_type(entity_type: &str) -> Result<(), ValidationError> {
    one_of(entity_type, VALID_ENTITY_TYPES)
}
