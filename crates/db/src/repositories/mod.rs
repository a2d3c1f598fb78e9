//! Repository layer: one zero-sized struct per table with async CRUD methods.
//!
//! Lookups return `Ok(None)` for a missing id; deletes report whether a row
//! was removed. Translating absence into a response is the caller's job.

pub mod archetype_repo;
pub mod artist_repo;
pub mod calendar_slot_repo;
pub mod consistency_alert_repo;
pub mod curated_image_repo;
pub mod marketplace_listing_repo;
pub mod project_repo;
pub mod reality_node_repo;
pub mod reality_relationship_repo;
pub mod timeline_event_repo;

pub use archetype_repo::RealityArchetypeRepo;
pub use artist_repo::ArtistRepo;
pub use calendar_slot_repo::CalendarSlotRepo;
pub use consistency_alert_repo::ConsistencyAlertRepo;
pub use curated_image_repo::CuratedImageRepo;
pub use marketplace_listing_repo::MarketplaceListingRepo;
pub use project_repo::ProjectRepo;
pub use reality_node_repo::RealityNodeRepo;
pub use reality_relationship_repo::RealityRelationshipRepo;
pub use timeline_event_repo::TimelineEventRepo;
