//! Health check handler.

use axum::extract::State;
use axum::Json;
use serde_json::json;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// GET /health
///
/// Liveness plus a database round trip.
pub async fn health(State(state): State<AppState>) -> AppResult<Json<serde_json::Value>> {
    lifeline_db::health_check(&state.pool)
        .await
        .map_err(|e| AppError::InternalError(format!("Database unreachable: {e}")))?;

    Ok(Json(json!({ "status": "ok", "database": "ok" })))
}
