//! Health check route, mounted at the root (outside `/api/v1`).

use axum::routing::get;
use axum::Router;

use crate::handlers::health;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health::health))
}
