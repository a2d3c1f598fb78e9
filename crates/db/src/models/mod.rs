//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - A `Deserialize` + `Validate` create DTO for inserts, with its required
//!   payload keys declared through [`ecv_core::schema::PayloadFields`]
//! - A `Deserialize` update DTO (all `Option` fields) for patches
//!
//! Everything serializes with camelCase keys, matching the dashboard client.

pub mod archetype;
pub mod artist;
pub mod calendar_slot;
pub mod consistency_alert;
pub mod curated_image;
pub mod marketplace_listing;
pub mod project;
pub mod reality_node;
pub mod reality_relationship;
pub mod timeline_event;
