//! Demo data for a fresh database.
//!
//! Inserts three artists with a small reality graph, timeline, projects,
//! content calendar, marketplace listings, curated images and alerts. Rows
//! go through the repositories so defaults match what the API produces.

use ecv_core::types::{AttributeMap, Position, Timestamp};
use ecv_core::{calendar, curation, dates};
use serde_json::{json, Value};

use crate::models::artist::{Artist, CreateArtist};
use crate::models::calendar_slot::CreateCalendarSlot;
use crate::models::consistency_alert::CreateConsistencyAlert;
use crate::models::curated_image::CreateCuratedImage;
use crate::models::marketplace_listing::CreateMarketplaceListing;
use crate::models::project::{CreateProject, Project};
use crate::models::reality_node::{CreateRealityNode, RealityNode};
use crate::models::reality_relationship::CreateRealityRelationship;
use crate::models::timeline_event::CreateTimelineEvent;
use crate::repositories::{
    ArtistRepo, CalendarSlotRepo, ConsistencyAlertRepo, CuratedImageRepo, MarketplaceListingRepo,
    ProjectRepo, RealityNodeRepo, RealityRelationshipRepo, TimelineEventRepo,
};
use crate::DbPool;

#[derive(Debug, thiserror::Error)]
pub enum SeedError {
    #[error(transparent)]
    Database(#[from] sqlx::Error),

    #[error("invalid seed date: {0}")]
    InvalidDate(&'static str),
}

/// Row counts written by [`seed_demo_data`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SeedSummary {
    pub artists: usize,
    pub reality_nodes: usize,
    pub reality_relationships: usize,
    pub timeline_events: usize,
    pub projects: usize,
    pub calendar_slots: usize,
    pub marketplace_listings: usize,
    pub curated_images: usize,
    pub consistency_alerts: usize,
}

/// Insert the demo dataset. Not idempotent: running twice duplicates it.
pub async fn seed_demo_data(pool: &DbPool) -> Result<SeedSummary, SeedError> {
    let mut summary = SeedSummary::default();

    let artists = seed_artists(pool).await?;
    summary.artists = artists.len();
    let [luna, nexus, echo] = &artists;

    let nodes = seed_nodes(pool, luna, nexus).await?;
    summary.reality_nodes = nodes.len();

    for (to, relationship_type, strength) in [(1, "performs_at", 9), (2, "uses", 10)] {
        RealityRelationshipRepo::create(
            pool,
            &CreateRealityRelationship {
                from_node_id: nodes[0].id.clone(),
                to_node_id: nodes[to].id.clone(),
                relationship_type: relationship_type.to_string(),
                strength: Some(strength),
            },
        )
        .await?;
        summary.reality_relationships += 1;
    }

    let events = [
        (luna, "First Major Performance", "Breakthrough show at Coachella", "2024-04-15", &nodes[0]),
        (nexus, "Album Release", "Debut album drop", "2024-06-01", &nodes[3]),
    ];
    for (artist, title, description, date, node) in events {
        TimelineEventRepo::create(
            pool,
            &CreateTimelineEvent {
                artist_id: artist.id.clone(),
                title: title.to_string(),
                description: Some(description.to_string()),
                event_date: at(date)?,
                event_type: None,
                related_nodes: Some(vec![node.id.clone()]),
            },
        )
        .await?;
        summary.timeline_events += 1;
    }

    let projects = seed_projects(pool, luna, nexus, echo).await?;
    summary.projects = projects.len();

    let slots = [
        (luna, "Instagram Reel", "Social", calendar::STATUS_PLANNED, "2024-07-01T09:00:00Z"),
        (luna, "TikTok Dance", "Viral", calendar::STATUS_PUBLISHED, "2024-07-03T15:00:00Z"),
        (nexus, "YouTube Short", "Teaser", calendar::STATUS_IN_PRODUCTION, "2024-07-05T21:00:00Z"),
    ];
    for (artist, title, content_type, status, scheduled_at) in slots {
        CalendarSlotRepo::create(
            pool,
            &CreateCalendarSlot {
                artist_id: artist.id.clone(),
                title: title.to_string(),
                content_type: content_type.to_string(),
                status: Some(status.to_string()),
                scheduled_at: at(scheduled_at)?,
                brief: None,
            },
        )
        .await?;
        summary.calendar_slots += 1;
    }

    let listings = [
        (
            luna,
            "Instagram Content Package - Q1 2024",
            "social_media",
            2500,
            Some("3 months"),
            342,
            "https://images.unsplash.com/photo-1611162617474-5b21e879e113?w=400&h=300&fit=crop",
            "active",
        ),
        (
            nexus,
            "Exclusive Brand Campaign Rights",
            "exclusive",
            15000,
            None,
            156,
            "https://images.unsplash.com/photo-1598488035139-bdbb2231ce04?w=400&h=300&fit=crop",
            "active",
        ),
        (
            echo,
            "TikTok Viral Challenge License",
            "advertising",
            5000,
            Some("6 months"),
            523,
            "https://images.unsplash.com/photo-1571330735066-03aaa9429d89?w=400&h=300&fit=crop",
            "sold",
        ),
    ];
    for (artist, title, listing_type, price, duration, views, image_url, status) in listings {
        MarketplaceListingRepo::create(
            pool,
            &CreateMarketplaceListing {
                artist_id: artist.id.clone(),
                title: title.to_string(),
                listing_type: listing_type.to_string(),
                price,
                duration: duration.map(str::to_string),
                views: Some(views),
                image_url: Some(image_url.to_string()),
                status: Some(status.to_string()),
            },
        )
        .await?;
        summary.marketplace_listings += 1;
    }

    let images = [
        (
            luna,
            &projects[0],
            "https://images.unsplash.com/photo-1571330735066-03aaa9429d89?w=600&h=600&fit=crop",
            "Cyberpunk neon cityscape",
            5,
            ["neon", "cyberpunk", "city"],
        ),
        (
            nexus,
            &projects[1],
            "https://images.unsplash.com/photo-1514525253161-7a46d19cd819?w=600&h=600&fit=crop",
            "DJ performing at underground club",
            4,
            ["dj", "club", "performance"],
        ),
    ];
    for (artist, project, image_url, prompt, rating, tags) in images {
        CuratedImageRepo::create(
            pool,
            &CreateCuratedImage {
                artist_id: artist.id.clone(),
                project_id: Some(project.id.clone()),
                image_url: image_url.to_string(),
                prompt: Some(prompt.to_string()),
                rating: Some(rating),
                tags: Some(tags.iter().map(|t| t.to_string()).collect()),
                approved: Some(curation::APPROVAL_APPROVED),
            },
        )
        .await?;
        summary.curated_images += 1;
    }

    let alerts = [
        (
            luna,
            "medium",
            "Timeline Conflict",
            "Character appearance differs from established lore",
            &nodes[0],
        ),
        (
            nexus,
            "high",
            "Location Mismatch",
            "Venue capacity inconsistent with previous events",
            &nodes[4],
        ),
    ];
    for (artist, severity, title, description, node) in alerts {
        ConsistencyAlertRepo::create(
            pool,
            &CreateConsistencyAlert {
                artist_id: artist.id.clone(),
                severity: severity.to_string(),
                title: title.to_string(),
                description: description.to_string(),
                affected_nodes: Some(vec![node.id.clone()]),
                resolved: None,
            },
        )
        .await?;
        summary.consistency_alerts += 1;
    }

    tracing::info!(?summary, "Demo data seeded");
    Ok(summary)
}

async fn seed_artists(pool: &DbPool) -> Result<[Artist; 3], SeedError> {
    let luna = ArtistRepo::create(
        pool,
        &artist("Luna Rivera", "Electronic", "Instagram", 125_000, [85, 92, 78]),
    )
    .await?;
    let nexus = ArtistRepo::create(
        pool,
        &artist("DJ Nexus", "Tech House", "TikTok", 280_000, [95, 88, 90]),
    )
    .await?;
    let echo = ArtistRepo::create(
        pool,
        &artist("Echo Waves", "Ambient", "YouTube", 450_000, [70, 96, 85]),
    )
    .await?;
    Ok([luna, nexus, echo])
}

async fn seed_nodes(
    pool: &DbPool,
    luna: &Artist,
    nexus: &Artist,
) -> Result<Vec<RealityNode>, SeedError> {
    let specs = [
        (
            luna,
            "character",
            "Luna Stage Persona",
            "Main performance character with neon aesthetic",
            json!({ "appearance": "neon hair, futuristic outfit" }),
            (100.0, 100.0),
        ),
        (
            luna,
            "location",
            "Downtown LA Studio",
            "Recording and production space",
            json!({ "vibe": "industrial-chic" }),
            (200.0, 150.0),
        ),
        (
            luna,
            "possession",
            "Custom Synthesizer",
            "Signature instrument",
            json!({ "brand": "Moog" }),
            (150.0, 200.0),
        ),
        (
            nexus,
            "character",
            "DJ Nexus",
            "Cyberpunk DJ persona",
            json!({ "style": "tech-noir" }),
            (300.0, 100.0),
        ),
        (
            nexus,
            "location",
            "Berlin Underground Club",
            "Signature venue",
            json!({ "capacity": 500 }),
            (400.0, 150.0),
        ),
    ];

    let mut nodes = Vec::with_capacity(specs.len());
    for (artist, node_type, name, description, attributes, (x, y)) in specs {
        let node = RealityNodeRepo::create(
            pool,
            &CreateRealityNode {
                artist_id: artist.id.clone(),
                node_type: node_type.to_string(),
                name: name.to_string(),
                description: Some(description.to_string()),
                attributes: Some(object(attributes)),
                position: Some(Position { x, y }),
            },
        )
        .await?;
        nodes.push(node);
    }
    Ok(nodes)
}

async fn seed_projects(
    pool: &DbPool,
    luna: &Artist,
    nexus: &Artist,
    echo: &Artist,
) -> Result<Vec<Project>, SeedError> {
    let specs = [
        (luna, "Summer Vibes 2024", "Seasonal content campaign", "in_progress", "high", "2024-08-01", "Creative Team"),
        (nexus, "Neon Dreams", "Music video series", "review", "high", "2024-07-15", "Video Team"),
        (echo, "Ambient Sessions", "Live stream series", "planning", "medium", "2024-09-01", "Production"),
    ];

    let mut projects = Vec::with_capacity(specs.len());
    for (artist, title, description, status, priority, due, assignee) in specs {
        let project = ProjectRepo::create(
            pool,
            &CreateProject {
                artist_id: artist.id.clone(),
                title: title.to_string(),
                description: Some(description.to_string()),
                status: Some(status.to_string()),
                priority: Some(priority.to_string()),
                due_date: Some(at(due)?),
                assignee: Some(assignee.to_string()),
            },
        )
        .await?;
        projects.push(project);
    }
    Ok(projects)
}

fn artist(name: &str, genre: &str, platform: &str, followers: i32, ecv: [u8; 3]) -> CreateArtist {
    let [energy, creativity, vibe] = ecv;
    CreateArtist {
        name: name.to_string(),
        genre: genre.to_string(),
        platform: platform.to_string(),
        followers: Some(followers),
        ecv_dna: Some(object(
            json!({ "energy": energy, "creativity": creativity, "vibe": vibe }),
        )),
        dna: None,
        status: None,
    }
}

fn object(value: Value) -> AttributeMap {
    match value {
        Value::Object(map) => map,
        _ => AttributeMap::new(),
    }
}

fn at(raw: &'static str) -> Result<Timestamp, SeedError> {
    dates::parse_timestamp(raw).ok_or(SeedError::InvalidDate(raw))
}
