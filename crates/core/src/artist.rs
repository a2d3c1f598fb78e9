//! Artist status values and validation.

use validator::ValidationError;

use crate::schema::one_of;

pub const STATUS_ACTIVE: &str = "active";
pub const STATUS_PAUSED: &str = "paused";
pub const STATUS_ARCHIVED: &str = "archived";

/// All valid artist status values.
pub const VALID_STATUSES: &[&str] = &[STATUS_ACTIVE, STATUS_PAUSED, STATUS_ARCHIVED];

/// Validate that an artist status is one of the allowed values.
pub fn validate_status(status: &str) -> Result<(), ValidationError> {
    one_of(status, VALID_STATUSES)
}
