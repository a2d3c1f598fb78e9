//! Content calendar slot statuses.
//!
//! The stored values are Portuguese labels shown verbatim by the dashboard;
//! they are kept as-is for compatibility with existing rows.

use validator::ValidationError;

use crate::schema::one_of;

pub const STATUS_PLANNED: &str = "Planejado";
pub const STATUS_IN_PRODUCTION: &str = "Em Produção";
pub const STATUS_PUBLISHED: &str = "Publicado";
pub const STATUS_CANCELLED: &str = "Cancelado";

/// All valid calendar slot statuses.
pub const VALID_STATUSES: &[&str] = &[
    STATUS_PLANNED,
    STATUS_IN_PRODUCTION,
    STATUS_PUBLISHED,
    STATUS_CANCELLED,
];

pub fn validate_status(status: &str) -> Result<(), ValidationError> {
    one_of(status, VALID_STATUSES)
}
