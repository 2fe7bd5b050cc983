//! Repository for the `event_types` table.

use lifeline_core::types::DbId;
use sqlx::PgPool;

use crate::models::event_type::{CreateEventType, EventType, UpdateEventType};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str =
    "id, user_id, name, display_name, color, icon, is_default, created_at, updated_at";

/// Provides CRUD operations for event types.
pub struct EventTypeRepo;

impl EventTypeRepo {
    /// Insert a user-defined event type, returning the created row.
    pub async fn create(
        pool: &PgPool,
        user_id: DbId,
        input: &CreateEventType,
    ) -> Result<EventType, sqlx::Error> {
        let query = format!(
            "INSERT INTO event_types (user_id, name, display_name, color, icon)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, EventType>(&query)
            .bind(user_id)
            .bind(&input.name)
            .bind(&input.display_name)
            .bind(&input.color)
            .bind(&input.icon)
            .fetch_one(pool)
            .await
    }

    /// Find an event type visible to `user_id`: a built-in default or one
    /// of the user's own.
    pub async fn find_visible(
        pool: &PgPool,
        user_id: DbId,
        id: DbId,
    ) -> Result<Option<EventType>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM event_types
             WHERE id = $1 AND (user_id IS NULL OR user_id = $2)"
        );
        sqlx::query_as::<_, EventType>(&query)
            .bind(id)
            .bind(user_id)
            .fetch_optional(pool)
            .await
    }

    /// List the built-in defaults followed by the user's custom types.
    pub async fn list_visible(pool: &PgPool, user_id: DbId) -> Result<Vec<EventType>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM event_types
             WHERE user_id IS NULL OR user_id = $1
             ORDER BY is_default DESC, name ASC"
        );
        sqlx::query_as::<_, EventType>(&query)
            .bind(user_id)
            .fetch_all(pool)
            .await
    }

    /// Update one of the user's own event types. Only non-`None` fields in
    /// `input` are applied. Returns `None` if the user owns no such row.
    pub async fn update(
        pool: &PgPool,
        user_id: DbId,
        id: DbId,
        input: &UpdateEventType,
    ) -> Result<Option<EventType>, sqlx::Error> {
        let query = format!(
            "UPDATE event_types SET
                name = COALESCE($3, name),
                display_name = COALESCE($4, display_name),
                color = COALESCE($5, color),
                icon = COALESCE($6, icon)
             WHERE id = $1 AND user_id = $2
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, EventType>(&query)
            .bind(id)
            .bind(user_id)
            .bind(&input.name)
            .bind(&input.display_name)
            .bind(&input.color)
            .bind(&input.icon)
            .fetch_optional(pool)
            .await
    }

    /// Delete one of the user's own event types. Returns `true` if a row
    /// was removed.
    pub async fn delete(pool: &PgPool, user_id: DbId, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM event_types WHERE id = $1 AND user_id = $2")
            .bind(id)
            .bind(user_id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Count events that reference this type.
    pub async fn usage_count(pool: &PgPool, id: DbId) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar("SELECT COUNT(*) FROM events WHERE event_type_id = $1")
            .bind(id)
            .fetch_one(pool)
            .await
    }
}
