//! HTTP-level integration tests for the resource endpoints.
//!
//! Uses Axum's tower::ServiceExt to send requests directly to the router
//! without an actual TCP listener.

mod common;

use axum::http::StatusCode;
use common::{body_json, create_artist, create_node, delete, get, patch_json, post_json};
use serde_json::{json, Value};
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Artist lifecycle
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_artist_lifecycle(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let response = post_json(
        app,
        "/api/artists",
        json!({
            "name": "Luna Rivera",
            "genre": "Electronic",
            "platform": "Instagram",
            "ecvDna": { "energy": 85, "creativity": 92, "vibe": 78 }
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let created = body_json(response).await;
    let id = created["id"].as_str().unwrap().to_string();
    assert_eq!(created["followers"], 0);
    assert_eq!(created["status"], "active");
    assert_eq!(created["ecvDna"]["creativity"], 92);
    assert!(created["createdAt"].is_string());
    assert!(created["dna"].is_null());

    let app = common::build_test_app(pool.clone());
    let response = get(app, &format!("/api/artists/{id}")).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, created);

    let app = common::build_test_app(pool.clone());
    let response = delete(app, &format!("/api/artists/{id}")).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let app = common::build_test_app(pool);
    let response = get(app, &format!("/api/artists/{id}")).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let json = body_json(response).await;
    assert_eq!(json["error"], "Artist not found");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_patch_changes_only_supplied_fields(pool: PgPool) {
    let id = create_artist(&pool, "Echo Waves").await;

    let app = common::build_test_app(pool.clone());
    let response = patch_json(
        app,
        &format!("/api/artists/{id}"),
        json!({ "followers": 450000, "dna": { "cabelo": "prateado" } }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["followers"], 450000);
    assert_eq!(json["dna"]["cabelo"], "prateado");
    assert_eq!(json["name"], "Echo Waves");
    assert_eq!(json["genre"], "Electronic");
    assert_eq!(json["status"], "active");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_patch_unknown_id_returns_404(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = patch_json(app, "/api/projects/missing", json!({ "title": "x" })).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_delete_nonexistent_returns_204(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = delete(app, "/api/timeline-events/does-not-exist").await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);
}

// ---------------------------------------------------------------------------
// Cascades
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_artist_delete_empties_scoped_lists(pool: PgPool) {
    let artist_id = create_artist(&pool, "Luna").await;
    create_node(&pool, &artist_id, "Persona").await;

    let app = common::build_test_app(pool.clone());
    let response = post_json(
        app,
        "/api/timeline-events",
        json!({ "artistId": artist_id, "title": "Debut", "eventDate": "2024-04-15" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let app = common::build_test_app(pool.clone());
    delete(app, &format!("/api/artists/{artist_id}")).await;

    for resource in ["reality-nodes", "timeline-events", "curated-images", "consistency-alerts"] {
        let app = common::build_test_app(pool.clone());
        let response = get(app, &format!("/api/{resource}?artistId={artist_id}")).await;
        assert_eq!(response.status(), StatusCode::OK, "{resource}");
        assert_eq!(body_json(response).await, json!([]), "{resource}");
    }
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_node_delete_removes_relationships(pool: PgPool) {
    let artist_id = create_artist(&pool, "Luna").await;
    let a = create_node(&pool, &artist_id, "A").await;
    let b = create_node(&pool, &artist_id, "B").await;

    let app = common::build_test_app(pool.clone());
    let response = post_json(
        app,
        "/api/reality-relationships",
        json!({ "fromNodeId": a, "toNodeId": b, "relationshipType": "performs_at" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let relationship = body_json(response).await;
    assert_eq!(relationship["strength"], 5);
    let rel_id = relationship["id"].as_str().unwrap().to_string();

    let app = common::build_test_app(pool.clone());
    let response = get(app, &format!("/api/reality-relationships?artistId={artist_id}")).await;
    assert_eq!(body_json(response).await.as_array().unwrap().len(), 1);

    let app = common::build_test_app(pool.clone());
    delete(app, &format!("/api/reality-nodes/{b}")).await;

    let app = common::build_test_app(pool);
    let response = get(app, &format!("/api/reality-relationships/{rel_id}")).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// ---------------------------------------------------------------------------
// Calendar
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_calendar_range_returns_exact_slot(pool: PgPool) {
    let artist_id = create_artist(&pool, "Luna").await;
    for (title, at) in [
        ("before", "2024-07-01T11:59:59Z"),
        ("at", "2024-07-01T12:00:00Z"),
        ("after", "2024-07-01T12:00:01Z"),
    ] {
        let app = common::build_test_app(pool.clone());
        let response = post_json(
            app,
            "/api/calendar-slots",
            json!({
                "artistId": artist_id,
                "title": title,
                "contentType": "Social",
                "scheduledAt": at
            }),
        )
        .await;
        assert_eq!(response.status(), StatusCode::CREATED);
    }

    let t = "2024-07-01T12:00:00Z";
    let app = common::build_test_app(pool);
    let response = get(
        app,
        &format!("/api/calendar-slots?artistId={artist_id}&dateStart={t}&dateEnd={t}"),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let slots = body_json(response).await;
    let slots = slots.as_array().unwrap();
    assert_eq!(slots.len(), 1);
    assert_eq!(slots[0]["title"], "at");
    assert_eq!(slots[0]["status"], "Planejado");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_calendar_accepts_accented_status(pool: PgPool) {
    let artist_id = create_artist(&pool, "Luna").await;
    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/api/calendar-slots",
        json!({
            "artistId": artist_id,
            "title": "Reel",
            "contentType": "Social",
            "status": "Em Produção",
            "scheduledAt": 1719835200000i64
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert_eq!(json["status"], "Em Produção");
}

// ---------------------------------------------------------------------------
// Other kinds
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_project_patch_refreshes_updated_at(pool: PgPool) {
    let artist_id = create_artist(&pool, "Luna").await;
    let app = common::build_test_app(pool.clone());
    let response = post_json(
        app,
        "/api/projects",
        json!({ "artistId": artist_id, "title": "Summer Vibes", "dueDate": "2024-08-01" }),
    )
    .await;
    let created = body_json(response).await;
    assert_eq!(created["status"], "planning");
    assert_eq!(created["priority"], "medium");
    let id = created["id"].as_str().unwrap().to_string();

    let app = common::build_test_app(pool.clone());
    let response = patch_json(app, &format!("/api/projects/{id}"), json!({ "dueDate": null })).await;
    assert_eq!(response.status(), StatusCode::OK);
    let updated = body_json(response).await;
    assert!(updated["dueDate"].is_null());
    assert_eq!(updated["title"], "Summer Vibes");
    assert_ne!(updated["updatedAt"], created["updatedAt"]);

    let app = common::build_test_app(pool);
    let response = get(app, &format!("/api/projects?artistId={artist_id}")).await;
    assert_eq!(body_json(response).await.as_array().unwrap().len(), 1);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_marketplace_and_images_defaults(pool: PgPool) {
    let artist_id = create_artist(&pool, "Luna").await;

    let app = common::build_test_app(pool.clone());
    let response = post_json(
        app,
        "/api/marketplace-listings",
        json!({ "artistId": artist_id, "title": "Pack", "type": "social_media", "price": 2500 }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let listing = body_json(response).await;
    assert_eq!(listing["views"], 0);
    assert_eq!(listing["status"], "active");
    assert_eq!(listing["type"], "social_media");

    let app = common::build_test_app(pool.clone());
    let response = post_json(
        app,
        "/api/curated-images",
        json!({ "artistId": artist_id, "imageUrl": "https://example.com/x.png" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let image = body_json(response).await;
    assert_eq!(image["approved"], 0);
    assert_eq!(image["tags"], json!([]));
    assert!(image["projectId"].is_null());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_archetype_crud(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let response = post_json(
        app,
        "/api/admin/archetypes",
        json!({ "name": "Mentor", "entityType": "character", "icon": "user" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let id = body_json(response).await["id"].as_str().unwrap().to_string();

    let app = common::build_test_app(pool.clone());
    let response = patch_json(
        app,
        &format!("/api/admin/archetypes/{id}"),
        json!({ "icon": null }),
    )
    .await;
    let json = body_json(response).await;
    assert!(json["icon"].is_null());
    assert_eq!(json["name"], "Mentor");

    let app = common::build_test_app(pool);
    let response = get(app, "/api/admin/archetypes").await;
    assert_eq!(body_json(response).await.as_array().unwrap().len(), 1);
}

// ---------------------------------------------------------------------------
// Every resource: create-then-get, and rejection of a missing required key
// ---------------------------------------------------------------------------

struct ResourceCase {
    path: &'static str,
    list_uri: String,
    payload: Value,
    required_key: &'static str,
}

fn resource_cases(artist_id: &str, from: &str, to: &str) -> Vec<ResourceCase> {
    let scoped = |path: &str| format!("/api/{path}?artistId={artist_id}");
    vec![
        ResourceCase {
            path: "artists",
            list_uri: "/api/artists".to_string(),
            payload: json!({
                "name": "Nova",
                "genre": "Pop",
                "platform": "TikTok",
                "followers": 1200,
                "ecvDna": { "energy": 80 },
                "dna": { "cabelo": "preto" },
                "status": "paused"
            }),
            required_key: "name",
        },
        ResourceCase {
            path: "reality-nodes",
            list_uri: scoped("reality-nodes"),
            payload: json!({
                "artistId": artist_id,
                "type": "location",
                "name": "Neo-Tóquio",
                "description": "Cidade chuvosa",
                "attributes": { "clima": "chuvoso" },
                "position": { "x": 10.5, "y": 20.25 }
            }),
            required_key: "name",
        },
        ResourceCase {
            path: "reality-relationships",
            list_uri: scoped("reality-relationships"),
            payload: json!({
                "fromNodeId": from,
                "toNodeId": to,
                "relationshipType": "lives_in",
                "strength": 8
            }),
            required_key: "relationshipType",
        },
        ResourceCase {
            path: "timeline-events",
            list_uri: scoped("timeline-events"),
            payload: json!({
                "artistId": artist_id,
                "title": "Debut",
                "description": "Primeiro show",
                "eventDate": "2024-04-15T20:00:00Z",
                "type": "show",
                "relatedNodes": [from]
            }),
            required_key: "eventDate",
        },
        ResourceCase {
            path: "projects",
            list_uri: scoped("projects"),
            payload: json!({
                "artistId": artist_id,
                "title": "EP",
                "description": "Five tracks",
                "status": "in_progress",
                "priority": "high",
                "dueDate": "2024-09-01T00:00:00Z",
                "assignee": "Ana"
            }),
            required_key: "title",
        },
        ResourceCase {
            path: "calendar-slots",
            list_uri: scoped("calendar-slots"),
            payload: json!({
                "artistId": artist_id,
                "title": "Reel",
                "contentType": "Video",
                "status": "Publicado",
                "scheduledAt": "2024-07-01T12:00:00Z",
                "brief": "Teaser"
            }),
            required_key: "contentType",
        },
        ResourceCase {
            path: "marketplace-listings",
            list_uri: scoped("marketplace-listings"),
            payload: json!({
                "artistId": artist_id,
                "title": "Pack",
                "type": "social_media",
                "price": 2500,
                "duration": "30 dias",
                "views": 12,
                "imageUrl": "https://example.com/pack.png",
                "status": "sold"
            }),
            required_key: "price",
        },
        ResourceCase {
            path: "curated-images",
            list_uri: scoped("curated-images"),
            payload: json!({
                "artistId": artist_id,
                "imageUrl": "https://example.com/neon.png",
                "prompt": "neon portrait",
                "rating": 4,
                "tags": ["neon", "portrait"],
                "approved": 1
            }),
            required_key: "imageUrl",
        },
        ResourceCase {
            path: "consistency-alerts",
            list_uri: scoped("consistency-alerts"),
            payload: json!({
                "artistId": artist_id,
                "severity": "high",
                "title": "Cabelo",
                "description": "Cor do cabelo mudou",
                "affectedNodes": [from],
                "resolved": 0
            }),
            required_key: "severity",
        },
        ResourceCase {
            path: "admin/archetypes",
            list_uri: "/api/admin/archetypes".to_string(),
            payload: json!({
                "name": "Mentor",
                "entityType": "character",
                "description": "Guia",
                "icon": "user"
            }),
            required_key: "entityType",
        },
    ]
}

async fn list_len(pool: &PgPool, uri: &str) -> usize {
    let response = get(common::build_test_app(pool.clone()), uri).await;
    assert_eq!(response.status(), StatusCode::OK, "{uri}");
    body_json(response).await.as_array().unwrap().len()
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_every_resource_round_trips_through_get(pool: PgPool) {
    let artist_id = create_artist(&pool, "Luna").await;
    let from = create_node(&pool, &artist_id, "A").await;
    let to = create_node(&pool, &artist_id, "B").await;

    for case in resource_cases(&artist_id, &from, &to) {
        let app = common::build_test_app(pool.clone());
        let response = post_json(app, &format!("/api/{}", case.path), case.payload.clone()).await;
        assert_eq!(response.status(), StatusCode::CREATED, "{}", case.path);
        let created = body_json(response).await;

        for (key, value) in case.payload.as_object().unwrap() {
            assert_eq!(&created[key], value, "{} {key}", case.path);
        }
        let id = created["id"].as_str().unwrap();
        assert!(created["createdAt"].is_string(), "{}", case.path);

        let app = common::build_test_app(pool.clone());
        let response = get(app, &format!("/api/{}/{id}", case.path)).await;
        assert_eq!(response.status(), StatusCode::OK, "{}", case.path);
        assert_eq!(body_json(response).await, created, "{}", case.path);
    }
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_every_resource_rejects_a_missing_required_key(pool: PgPool) {
    let artist_id = create_artist(&pool, "Luna").await;
    let from = create_node(&pool, &artist_id, "A").await;
    let to = create_node(&pool, &artist_id, "B").await;

    for case in resource_cases(&artist_id, &from, &to) {
        let before = list_len(&pool, &case.list_uri).await;

        let mut payload = case.payload.clone();
        payload.as_object_mut().unwrap().remove(case.required_key);

        let app = common::build_test_app(pool.clone());
        let response = post_json(app, &format!("/api/{}", case.path), payload).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST, "{}", case.path);
        let json = body_json(response).await;
        assert_eq!(
            json["fields"],
            json!({ case.required_key: ["is required"] }),
            "{}",
            case.path
        );

        assert_eq!(list_len(&pool, &case.list_uri).await, before, "{}", case.path);
    }
}
