//! Route definitions for event types.

use axum::routing::get;
use axum::Router;

use crate::handlers::event_type;
use crate::state::AppState;

/// Routes mounted at `/event-types`.
///
/// ```text
/// GET    /      -> list
/// POST   /      -> create
/// GET    /{id}  -> get_by_id
/// PUT    /{id}  -> update
/// DELETE /{id}  -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(event_type::list).post(event_type::create))
        .route(
            "/{id}",
            get(event_type::get_by_id)
                .put(event_type::update)
                .delete(event_type::delete),
        )
}
