//! Curated image approval encoding.
//!
//! Approval is stored as an integer tri-state; consumers of existing data
//! depend on the numeric encoding.

pub const APPROVAL_REJECTED: i32 = -1;
pub const APPROVAL_PENDING: i32 = 0;
pub const APPROVAL_APPROVED: i32 = 1;

/// Human-readable label for an approval value, `None` outside the tri-state.
pub fn approval_label(approved: i32) -> Option<&'static str> {
    match approved {
        APPROVAL_REJECTED => Some("rejected"),
        APPROVAL_PENDING => Some("pending"),
        APPROVAL_APPROVED => Some("approved"),
        _ => None,
    }
}
