pub mod ai;
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
