//! Handlers for the `/events` resource.
//!
//! Every operation is scoped to the authenticated owner. An event carries
//! either a type reference or a legacy free-form label, never both. The
//! event flagged as origin ("birth") anchors the timeline; there is at
//! most one per user and it cannot be removed while other events remain.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use lifeline_core::error::CoreError;
use lifeline_core::types::DbId;
use serde::Deserialize;

use lifeline_db::models::event::{CreateEvent, Event, UpdateEvent};
use lifeline_db::repositories::{EventRepo, EventTypeRepo, PhotoRepo};

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

/// Query parameters for `GET /events`.
#[derive(Debug, Deserialize)]
pub struct ListEventsParams {
    pub event_type_id: Option<DbId>,
}

/// POST /api/v1/events
pub async fn create(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(input): Json<CreateEvent>,
) -> AppResult<(StatusCode, Json<DataResponse<Event>>)> {
    if input.name.trim().is_empty() {
        return Err(AppError::Core(CoreError::Validation(
            "Event name must not be empty".into(),
        )));
    }

    match (input.event_type_id, &input.legacy_type) {
        (Some(_), Some(_)) => {
            return Err(AppError::Core(CoreError::Validation(
                "Provide either event_type_id or legacy_type, not both".into(),
            )));
        }
        (None, None) => {
            return Err(AppError::Core(CoreError::Validation(
                "Either event_type_id or legacy_type is required".into(),
            )));
        }
        _ => {}
    }

    if let Some(type_id) = input.event_type_id {
        ensure_type_visible(&state, auth.user_id, type_id).await?;
    }

    if input.is_origin {
        if let Some(origin) = EventRepo::find_origin(&state.pool, auth.user_id).await? {
            return Err(AppError::Core(CoreError::Conflict(format!(
                "Timeline already has an origin event (id {})",
                origin.id
            ))));
        }
    }

    let event = EventRepo::create(&state.pool, auth.user_id, &input).await?;

    tracing::info!(
        user_id = auth.user_id,
        event_id = event.id,
        is_origin = event.is_origin,
        "Created event"
    );

    Ok((StatusCode::CREATED, Json(DataResponse { data: event })))
}

/// GET /api/v1/events?event_type_id=N
pub async fn list(
    State(state): State<AppState>,
    auth: AuthUser,
    Query(params): Query<ListEventsParams>,
) -> AppResult<Json<DataResponse<Vec<Event>>>> {
    let events = EventRepo::list_for_user(&state.pool, auth.user_id, params.event_type_id).await?;
    Ok(Json(DataResponse { data: events }))
}

/// GET /api/v1/events/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<Event>>> {
    let event = EventRepo::find_for_user(&state.pool, auth.user_id, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Event", id }))?;
    Ok(Json(DataResponse { data: event }))
}

/// PUT /api/v1/events/{id}
pub async fn update(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateEvent>,
) -> AppResult<Json<DataResponse<Event>>> {
    if input.name.as_deref().is_some_and(|n| n.trim().is_empty()) {
        return Err(AppError::Core(CoreError::Validation(
            "Event name must not be empty".into(),
        )));
    }

    if let Some(type_id) = input.event_type_id {
        ensure_type_visible(&state, auth.user_id, type_id).await?;
    }

    let event = EventRepo::update(&state.pool, auth.user_id, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Event", id }))?;
    Ok(Json(DataResponse { data: event }))
}

/// DELETE /api/v1/events/{id}
///
/// Hard-deletes the event and its photos: rows cascade in the database,
/// stored files are removed afterwards so no orphaned blobs remain. The
/// origin event is protected while other events exist.
pub async fn delete(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let event = EventRepo::find_for_user(&state.pool, auth.user_id, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Event", id }))?;

    if event.is_origin {
        let others = EventRepo::count_others(&state.pool, auth.user_id, id).await?;
        if others > 0 {
            return Err(AppError::Core(CoreError::Conflict(
                "Cannot delete the origin event while other events exist".into(),
            )));
        }
    }

    // Collect file paths before the rows cascade away.
    let photo_paths = PhotoRepo::paths_by_event(&state.pool, id).await?;

    EventRepo::delete(&state.pool, auth.user_id, id).await?;

    for path in &photo_paths {
        if let Err(e) = state.photo_store.remove(path).await {
            tracing::warn!(event_id = id, path = %path, error = %e, "Failed to remove photo file");
        }
    }

    tracing::info!(
        user_id = auth.user_id,
        event_id = id,
        photos = photo_paths.len(),
        "Deleted event"
    );

    Ok(StatusCode::NO_CONTENT)
}

/// Ensure the referenced event type is a default or owned by the caller.
async fn ensure_type_visible(state: &AppState, user_id: DbId, type_id: DbId) -> AppResult<()> {
    EventTypeRepo::find_visible(&state.pool, user_id, type_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "EventType",
            id: type_id,
        }))?;
    Ok(())
}
