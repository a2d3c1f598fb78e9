//! Consistency alert constants.
//!
//! Alerts are recorded by hand; nothing in the system computes them.
//! `severity` is free text and only conventionally one of
//! [`EXPECTED_SEVERITIES`]. `resolved` is a plain integer flag.

pub const SEVERITY_LOW: &str = "low";
pub const SEVERITY_MEDIUM: &str = "medium";
pub const SEVERITY_HIGH: &str = "high";

/// Severities the dashboard renders with a dedicated style. Not enforced.
pub const EXPECTED_SEVERITIES: &[&str] = &[SEVERITY_LOW, SEVERITY_MEDIUM, SEVERITY_HIGH];

pub const UNRESOLVED: i32 = 0;
pub const RESOLVED: i32 = 1;

/// Whether a severity string is one the dashboard knows how to style.
pub fn is_expected_severity(severity: &str) -> bool {
    EXPECTED_SEVERITIES.contains(&severity)
}
