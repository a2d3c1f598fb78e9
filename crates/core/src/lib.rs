//! Domain types, constants and payload validation shared by the ECV Studio
//! backend crates.

pub mod alert;
pub mod artist;
pub mod calendar;
pub mod curation;
pub mod dates;
pub mod error;
pub mod patch;
pub mod reality;
pub mod schema;
pub mod types;
