//! Event entity model and DTOs.

use lifeline_core::types::{DbId, EventDate, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A life event on a user's timeline.
///
/// Exactly one of `event_type_id` / `legacy_type` is set (enforced by a
/// database check constraint). The event flagged `is_origin` defines
/// day zero of the timeline; each user has at most one.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Event {
    pub id: DbId,
    pub user_id: DbId,
    pub name: String,
    pub description: Option<String>,
    pub event_date: EventDate,
    pub event_type_id: Option<DbId>,
    /// Free-form label carried over from pre-typed imports.
    pub legacy_type: Option<String>,
    pub is_origin: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new event.
#[derive(Debug, Deserialize)]
pub struct CreateEvent {
    pub name: String,
    pub description: Option<String>,
    pub event_date: EventDate,
    pub event_type_id: Option<DbId>,
    pub legacy_type: Option<String>,
    #[serde(default)]
    pub is_origin: bool,
}

/// DTO for updating an event. All fields are optional; the type
/// reference can only be switched, not cleared.
#[derive(Debug, Deserialize)]
pub struct UpdateEvent {
    pub name: Option<String>,
    pub description: Option<String>,
    pub event_date: Option<EventDate>,
    pub event_type_id: Option<DbId>,
}
