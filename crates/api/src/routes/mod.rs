pub mod ai;
pub mod health;

use axum::routing::get;
use axum::Router;

use crate::handlers::{
    archetype, artist, calendar_slot, consistency_alert, curated_image, marketplace_listing,
    project, reality_node, reality_relationship, timeline_event,
};
use crate::state::AppState;

/// Build the `/api` route tree.
///
/// Every resource follows the same shape:
///
/// ```text
/// GET    /{resource}          list (artist-scoped kinds need ?artistId=)
/// POST   /{resource}          create
/// GET    /{resource}/{id}     get_by_id
/// PATCH  /{resource}/{id}     update
/// DELETE /{resource}/{id}     delete (always 204)
/// ```
///
/// ```text
/// /artists
/// /reality-nodes                    ?artistId= required
/// /reality-relationships            ?artistId= optional (source node owner)
/// /timeline-events                  ?artistId= required
/// /projects                         ?artistId= optional
/// /calendar-slots                   ?artistId= required, ?dateStart= ?dateEnd=
/// /marketplace-listings             ?artistId= optional
/// /curated-images                   ?artistId= required
/// /consistency-alerts               ?artistId= required
/// /admin/archetypes
///
/// /ai/generate-lore                 POST {concept}
/// /ai/analyze-image                 POST multipart `image`
/// ```
pub fn api_routes(max_upload_bytes: usize) -> Router<AppState> {
    Router::new()
        .route("/artists", get(artist::list).post(artist::create))
        .route(
            "/artists/{id}",
            get(artist::get_by_id)
                .patch(artist::update)
                .delete(artist::delete),
        )
        .route("/reality-nodes", get(reality_node::list).post(reality_node::create))
        .route(
            "/reality-nodes/{id}",
            get(reality_node::get_by_id)
                .patch(reality_node::update)
                .delete(reality_node::delete),
        )
        .route(
            "/reality-relationships",
            get(reality_relationship::list).post(reality_relationship::create),
        )
        .route(
            "/reality-relationships/{id}",
            get(reality_relationship::get_by_id)
                .patch(reality_relationship::update)
                .delete(reality_relationship::delete),
        )
        .route("/timeline-events", get(timeline_event::list).post(timeline_event::create))
        .route(
            "/timeline-events/{id}",
            get(timeline_event::get_by_id)
                .patch(timeline_event::update)
                .delete(timeline_event::delete),
        )
        .route("/projects", get(project::list).post(project::create))
        .route(
            "/projects/{id}",
            get(project::get_by_id)
                .patch(project::update)
                .delete(project::delete),
        )
        .route("/calendar-slots", get(calendar_slot::list).post(calendar_slot::create))
        .route(
            "/calendar-slots/{id}",
            get(calendar_slot::get_by_id)
                .patch(calendar_slot::update)
                .delete(calendar_slot::delete),
        )
        .route(
            "/marketplace-listings",
            get(marketplace_listing::list).post(marketplace_listing::create),
        )
        .route(
            "/marketplace-listings/{id}",
            get(marketplace_listing::get_by_id)
                .patch(marketplace_listing::update)
                .delete(marketplace_listing::delete),
        )
        .route("/curated-images", get(curated_image::list).post(curated_image::create))
        .route(
            "/curated-images/{id}",
            get(curated_image::get_by_id)
                .patch(curated_image::update)
                .delete(curated_image::delete),
        )
        .route("/consistency-alerts", get(consistency_alert::list).post(consistency_alert::create))
        .route(
            "/consistency-alerts/{id}",
            get(consistency_alert::get_by_id)
                .patch(consistency_alert::update)
                .delete(consistency_alert::delete),
        )
        .route("/admin/archetypes", get(archetype::list).post(archetype::create))
        .route(
            "/admin/archetypes/{id}",
            get(archetype::get_by_id)
                .patch(archetype::update)
                .delete(archetype::delete),
        )
        .nest("/ai", ai::router(max_upload_bytes))
}
