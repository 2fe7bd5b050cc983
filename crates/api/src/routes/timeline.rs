//! Route definition for the assembled timeline.

use axum::routing::get;
use axum::Router;

use crate::handlers::timeline;
use crate::state::AppState;

/// Routes mounted at `/timeline`.
///
/// ```text
/// GET / -> get_timeline
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/", get(timeline::get_timeline))
}
