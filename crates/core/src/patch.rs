//! Helpers for partial-update DTOs.
//!
//! Non-nullable columns use `Option<T>` fields with [`not_null`]: an absent
//! key leaves the column unchanged and an explicit `null` is rejected.
//! Nullable columns use `Option<Option<T>>` with [`nullable`], so that an
//! absent key keeps the current value while an explicit `null` clears it.

use serde::de::Error as _;
use serde::{Deserialize, Deserializer};

/// `deserialize_with` target for a non-nullable field in an update DTO. Pair
/// with `#[serde(default)]` so that a missing key stays `None`.
pub fn not_null<'de, T, D>(deserializer: D) -> Result<Option<T>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    match Option::<T>::deserialize(deserializer)? {
        Some(value) => Ok(Some(value)),
        None => Err(D::Error::custom("must not be null")),
    }
}

/// `deserialize_with` target for a nullable field in an update DTO. Pair
/// with `#[serde(default)]` so that a missing key stays `None`.
pub fn nullable<'de, T, D>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

/// Split a nullable patch field into the `(provided, value)` pair bound by
/// `CASE WHEN $n THEN $m ELSE column END` update statements.
pub fn split<T>(field: &Option<Option<T>>) -> (bool, Option<&T>) {
    (field.is_some(), field.as_ref().and_then(Option::as_ref))
}
