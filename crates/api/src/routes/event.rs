//! Route definitions for events and their nested photos.

use axum::extract::DefaultBodyLimit;
use axum::routing::get;
use axum::Router;

use crate::handlers::{event, photo};
use crate::state::AppState;

/// Routes mounted at `/events`.
///
/// The photo upload route carries its own body limit so large multipart
/// bodies are cut off at the configured maximum instead of axum's
/// default.
///
/// ```text
/// GET    /                     -> list (?event_type_id=)
/// POST   /                     -> create
/// GET    /{id}                 -> get_by_id
/// PUT    /{id}                 -> update
/// DELETE /{id}                 -> delete
/// GET    /{event_id}/photos    -> list_by_event
/// POST   /{event_id}/photos    -> upload (multipart)
/// ```
pub fn router(max_upload_bytes: usize) -> Router<AppState> {
    Router::new()
        .route("/", get(event::list).post(event::create))
        .route(
            "/{id}",
            get(event::get_by_id)
                .put(event::update)
                .delete(event::delete),
        )
        .route(
            "/{event_id}/photos",
            get(photo::list_by_event)
                .post(photo::upload)
                .layer(DefaultBodyLimit::max(max_upload_bytes)),
        )
}
