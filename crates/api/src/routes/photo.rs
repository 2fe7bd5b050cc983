//! Route definitions for photo metadata and signed downloads.

use axum::routing::{get, put};
use axum::Router;

use crate::handlers::photo;
use crate::state::AppState;

/// Routes mounted at `/photos`.
///
/// `/{id}/file` is public: access is gated by the HMAC signature in the
/// query string, not by a session.
///
/// ```text
/// PUT    /{id}       -> update (sort order)
/// DELETE /{id}       -> delete
/// GET    /{id}/file  -> file (signed)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/{id}", put(photo::update).delete(photo::delete))
        .route("/{id}/file", get(photo::file))
}
