use std::collections::BTreeMap;
use std::fmt;

use serde::Serialize;

use crate::types::DbId;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: DbId },

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Validation failed: {0}")]
    InvalidFields(FieldErrors),

    #[error("Internal error: {0}")]
    Internal(String),
}

/// Per-field validation failures keyed by the payload (camelCase) field name.
///
/// Collects every violation of a payload so the caller can report them all
/// at once instead of stopping at the first.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FieldErrors(BTreeMap<String, Vec<String>>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a failure reason against `field`.
    pub fn add(&mut self, field: impl Into<String>, reason: impl Into<String>) {
        self.0.entry(field.into()).or_default().push(reason.into());
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Reasons recorded for `field`, if any.
    pub fn get(&self, field: &str) -> Option<&[String]> {
        self.0.get(field).map(Vec::as_slice)
    }

    pub fn contains(&self, field: &str) -> bool {
        self.0.contains_key(field)
    }

    /// Fold `validator` errors in under their payload names: the `renamed`
    /// key for fields serde renames, the camelCase field name otherwise.
    pub fn merge_validator(
        &mut self,
        errors: &validator::ValidationErrors,
        renamed: &[(&str, &str)],
    ) {
        for (field, field_errors) in errors.field_errors() {
            let name = renamed
                .iter()
                .find(|(rust_name, _)| *rust_name == &*field)
                .map(|(_, payload_key)| (*payload_key).to_string())
                .unwrap_or_else(|| snake_to_camel(&field));
            for err in field_errors.iter() {
                let reason = err
                    .message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| format!("failed '{}' check", err.code));
                self.add(name.clone(), reason);
            }
        }
    }

    /// Take over `other`'s reasons for fields that have none recorded here.
    pub fn merge_unreported(&mut self, other: FieldErrors) {
        for (field, reasons) in other.0 {
            self.0.entry(field).or_insert(reasons);
        }
    }

    /// `Ok(())` when nothing was recorded, otherwise [`CoreError::InvalidFields`].
    pub fn into_result(self) -> Result<(), CoreError> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(CoreError::InvalidFields(self))
        }
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (field, reasons) in &self.0 {
            for reason in reasons {
                if !first {
                    f.write_str("; ")?;
                }
                write!(f, "{field}: {reason}")?;
                first = false;
            }
        }
        Ok(())
    }
}

fn snake_to_camel(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut upper_next = false;
    for c in name.chars() {
        if c == '_' {
            upper_next = true;
        } else if upper_next {
            out.extend(c.to_uppercase());
            upper_next = false;
        } else {
            out.push(c);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_joins_every_reason_in_field_order() {
        let mut errors = FieldErrors::new();
        errors.add("title", "is required");
        errors.add("status", "must be one of: a, b");
        errors.add("status", "is too long");

        assert_eq!(
            errors.to_string(),
            "status: must be one of: a, b; status: is too long; title: is required"
        );
        assert_eq!(errors.len(), 2);
    }

    #[test]
    fn empty_errors_are_ok() {
        assert!(FieldErrors::new().into_result().is_ok());
    }

    #[test]
    fn snake_case_is_converted_for_payload_names() {
        assert_eq!(snake_to_camel("content_type"), "contentType");
        assert_eq!(snake_to_camel("from_node_id"), "fromNodeId");
        assert_eq!(snake_to_camel("name"), "name");
    }

    #[test]
    fn validator_messages_are_merged_under_camel_case_names() {
        let mut raw = validator::ValidationErrors::new();
        let mut err = validator::ValidationError::new("range");
        err.message = Some("must be zero or greater".into());
        raw.add("follower_count", err);

        let mut errors = FieldErrors::new();
        errors.merge_validator(&raw, &[]);

        assert_eq!(
            errors.get("followerCount"),
            Some(&["must be zero or greater".to_string()][..])
        );
    }

    #[test]
    fn renamed_validator_fields_use_the_payload_key() {
        let mut raw = validator::ValidationErrors::new();
        raw.add("node_type", validator::ValidationError::new("one_of"));

        let mut errors = FieldErrors::new();
        errors.merge_validator(&raw, &[("node_type", "type")]);

        assert!(errors.contains("type"));
        assert!(!errors.contains("nodeType"));
    }

    #[test]
    fn merge_unreported_keeps_existing_reasons() {
        let mut errors = FieldErrors::new();
        errors.add("name", "invalid type: integer `7`, expected a string");

        let mut rules = FieldErrors::new();
        rules.add("name", "must not be empty");
        rules.add("status", "invalid value");
        errors.merge_unreported(rules);

        assert_eq!(errors.get("name").unwrap().len(), 1);
        assert!(errors.contains("status"));
    }
}
