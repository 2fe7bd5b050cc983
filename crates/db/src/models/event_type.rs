//! Event type entity model and DTOs.

use lifeline_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A category for events: display name, color, optional icon.
///
/// Built-in defaults have `user_id = NULL` and `is_default = true`;
/// user-defined types carry the owning user's id.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct EventType {
    pub id: DbId,
    pub user_id: Option<DbId>,
    /// Internal name, unique within its scope (defaults vs. per user).
    pub name: String,
    pub display_name: String,
    /// Hex color, `#rrggbb`.
    pub color: String,
    pub icon: Option<String>,
    pub is_default: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a user-defined event type.
#[derive(Debug, Deserialize)]
pub struct CreateEventType {
    pub name: String,
    pub display_name: String,
    pub color: String,
    pub icon: Option<String>,
}

/// DTO for updating an event type. All fields are optional.
#[derive(Debug, Deserialize)]
pub struct UpdateEventType {
    pub name: Option<String>,
    pub display_name: Option<String>,
    pub color: Option<String>,
    pub icon: Option<String>,
}
