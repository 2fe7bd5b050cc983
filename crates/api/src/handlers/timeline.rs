//! Handler for the assembled timeline view.

use axum::extract::State;
use axum::Json;
use chrono::Utc;
use lifeline_core::error::CoreError;
use lifeline_core::timeline::{layout, TimelinePoint};
use serde::Serialize;

use lifeline_db::models::event::Event;
use lifeline_db::repositories::EventRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

/// One event decorated with its layout result.
#[derive(Debug, Serialize)]
pub struct TimelineEntry {
    #[serde(flatten)]
    pub event: Event,
    /// Normalized axis position in `[0, 100]`.
    pub position: f64,
    pub cluster: usize,
    /// Marker height in pixels.
    pub height: i32,
    /// True when the event's date fell outside the origin-to-today span.
    pub clamped: bool,
}

/// The full timeline payload.
#[derive(Debug, Serialize)]
pub struct TimelineView {
    /// Date of the origin ("birth") event, day zero of the axis.
    pub origin_date: lifeline_core::types::EventDate,
    pub entries: Vec<TimelineEntry>,
}

/// GET /api/v1/timeline
///
/// Loads the caller's events, requires exactly one origin event, and runs
/// the layout pass over them. 409 when no origin event exists yet.
pub async fn get_timeline(
    State(state): State<AppState>,
    auth: AuthUser,
) -> AppResult<Json<DataResponse<TimelineView>>> {
    let origin = EventRepo::find_origin(&state.pool, auth.user_id)
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::Conflict(
                "Timeline has no origin event yet. Create a birth event first.".into(),
            ))
        })?;

    let events = EventRepo::list_for_user(&state.pool, auth.user_id, None).await?;

    let points: Vec<TimelinePoint> = events
        .iter()
        .map(|e| TimelinePoint {
            id: e.id,
            date: e.event_date,
        })
        .collect();

    let placed = layout(&points, origin.event_date, Utc::now().date_naive());

    // The layout pass returns points in date order; re-join them with
    // their events by id.
    let mut by_id: std::collections::HashMap<i64, Event> =
        events.into_iter().map(|e| (e.id, e)).collect();

    let entries: Vec<TimelineEntry> = placed
        .into_iter()
        .filter_map(|p| {
            by_id.remove(&p.id).map(|event| TimelineEntry {
                event,
                position: p.position,
                cluster: p.cluster,
                height: p.height,
                clamped: p.clamped,
            })
        })
        .collect();

    Ok(Json(DataResponse {
        data: TimelineView {
            origin_date: origin.event_date,
            entries,
        },
    }))
}
