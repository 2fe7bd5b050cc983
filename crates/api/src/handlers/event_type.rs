//! Handlers for the `/event-types` resource.
//!
//! Event types come in two flavors: built-in defaults visible to every
//! user, and custom types owned by a single user. Defaults are immutable
//! through the API; a type referenced by any event cannot be deleted.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use lifeline_core::color::validate_hex_color;
use lifeline_core::error::CoreError;
use lifeline_core::types::DbId;

use lifeline_db::models::event_type::{CreateEventType, EventType, UpdateEventType};
use lifeline_db::repositories::EventTypeRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/event-types
///
/// Built-in defaults followed by the caller's custom types.
pub async fn list(
    State(state): State<AppState>,
    auth: AuthUser,
) -> AppResult<Json<DataResponse<Vec<EventType>>>> {
    let types = EventTypeRepo::list_visible(&state.pool, auth.user_id).await?;
    Ok(Json(DataResponse { data: types }))
}

/// POST /api/v1/event-types
pub async fn create(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(input): Json<CreateEventType>,
) -> AppResult<(StatusCode, Json<DataResponse<EventType>>)> {
    if input.name.trim().is_empty() {
        return Err(AppError::Core(CoreError::Validation(
            "Event type name must not be empty".into(),
        )));
    }
    validate_hex_color(&input.color)?;

    // Duplicate names surface as 409 via the uq_ index mapping.
    let event_type = EventTypeRepo::create(&state.pool, auth.user_id, &input).await?;

    tracing::info!(
        user_id = auth.user_id,
        event_type_id = event_type.id,
        name = %event_type.name,
        "Created event type"
    );

    Ok((StatusCode::CREATED, Json(DataResponse { data: event_type })))
}

/// GET /api/v1/event-types/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<EventType>>> {
    let event_type = EventTypeRepo::find_visible(&state.pool, auth.user_id, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "EventType",
            id,
        }))?;
    Ok(Json(DataResponse { data: event_type }))
}

/// PUT /api/v1/event-types/{id}
///
/// Updates one of the caller's custom types. Built-in defaults are
/// immutable and return 403.
pub async fn update(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateEventType>,
) -> AppResult<Json<DataResponse<EventType>>> {
    let existing = EventTypeRepo::find_visible(&state.pool, auth.user_id, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "EventType",
            id,
        }))?;

    if existing.is_default {
        return Err(AppError::Core(CoreError::Forbidden(
            "Built-in event types cannot be modified".into(),
        )));
    }

    if let Some(color) = &input.color {
        validate_hex_color(color)?;
    }
    if input.name.as_deref().is_some_and(|n| n.trim().is_empty()) {
        return Err(AppError::Core(CoreError::Validation(
            "Event type name must not be empty".into(),
        )));
    }

    let event_type = EventTypeRepo::update(&state.pool, auth.user_id, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "EventType",
            id,
        }))?;
    Ok(Json(DataResponse { data: event_type }))
}

/// DELETE /api/v1/event-types/{id}
///
/// Rejected with 409 while any event still references the type, and with
/// 403 for built-in defaults.
pub async fn delete(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let existing = EventTypeRepo::find_visible(&state.pool, auth.user_id, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "EventType",
            id,
        }))?;

    if existing.is_default {
        return Err(AppError::Core(CoreError::Forbidden(
            "Built-in event types cannot be deleted".into(),
        )));
    }

    let in_use = EventTypeRepo::usage_count(&state.pool, id).await?;
    if in_use > 0 {
        return Err(AppError::Core(CoreError::Conflict(format!(
            "Event type is used by {in_use} event(s). Reassign them first."
        ))));
    }

    let deleted = EventTypeRepo::delete(&state.pool, auth.user_id, id).await?;
    if deleted {
        tracing::info!(user_id = auth.user_id, event_type_id = id, "Deleted event type");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "EventType",
            id,
        }))
    }
}
