pub mod auth;
pub mod event;
pub mod event_type;
pub mod health;
pub mod photo;
pub mod timeline;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /auth/register                       register (public)
/// /auth/login                          login (public)
/// /auth/refresh                        refresh (public, cookie or body)
/// /auth/logout                         logout (requires auth)
/// /auth/me                             current user (requires auth)
///
/// /event-types                         list, create
/// /event-types/{id}                    get, update, delete
///
/// /events                              list (?event_type_id=), create
/// /events/{id}                         get, update, delete (cascades photos)
/// /events/{event_id}/photos            list, upload (multipart)
///
/// /photos/{id}                         update sort order, delete
/// /photos/{id}/file                    signed download (public, HMAC-checked)
///
/// /timeline                            assembled layout (requires auth)
/// ```
pub fn api_routes(max_upload_bytes: usize) -> Router<AppState> {
    Router::new()
        // Authentication routes.
        .nest("/auth", auth::router())
        // Event type catalog (defaults + per-user custom types).
        .nest("/event-types", event_type::router())
        // Events, including nested photo upload/list.
        .nest("/events", event::router(max_upload_bytes))
        // Photo metadata updates and signed downloads.
        .nest("/photos", photo::router())
        // Assembled timeline view.
        .nest("/timeline", timeline::router())
}
