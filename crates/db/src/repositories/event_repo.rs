//! Repository for the `events` table.
//!
//! All queries are scoped to the owning user; there is no cross-user
//! visibility for events.

use lifeline_core::types::DbId;
use sqlx::PgPool;

use crate::models::event::{CreateEvent, Event, UpdateEvent};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, user_id, name, description, event_date, event_type_id, \
                        legacy_type, is_origin, created_at, updated_at";

/// Provides CRUD operations for events.
pub struct EventRepo;

impl EventRepo {
    /// Insert a new event, returning the created row.
    pub async fn create(
        pool: &PgPool,
        user_id: DbId,
        input: &CreateEvent,
    ) -> Result<Event, sqlx::Error> {
        let query = format!(
            "INSERT INTO events
                (user_id, name, description, event_date, event_type_id, legacy_type, is_origin)
             VALUES ($1, $2, $3, $4, $5, $6, $7)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Event>(&query)
            .bind(user_id)
            .bind(&input.name)
            .bind(&input.description)
            .bind(input.event_date)
            .bind(input.event_type_id)
            .bind(&input.legacy_type)
            .bind(input.is_origin)
            .fetch_one(pool)
            .await
    }

    /// Find one of the user's events by ID.
    pub async fn find_for_user(
        pool: &PgPool,
        user_id: DbId,
        id: DbId,
    ) -> Result<Option<Event>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM events WHERE id = $1 AND user_id = $2");
        sqlx::query_as::<_, Event>(&query)
            .bind(id)
            .bind(user_id)
            .fetch_optional(pool)
            .await
    }

    /// List the user's events in date order, optionally filtered by type.
    pub async fn list_for_user(
        pool: &PgPool,
        user_id: DbId,
        event_type_id: Option<DbId>,
    ) -> Result<Vec<Event>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM events
             WHERE user_id = $1 AND ($2::BIGINT IS NULL OR event_type_id = $2)
             ORDER BY event_date ASC, id ASC"
        );
        sqlx::query_as::<_, Event>(&query)
            .bind(user_id)
            .bind(event_type_id)
            .fetch_all(pool)
            .await
    }

    /// Find the user's origin ("birth") event, if one exists.
    pub async fn find_origin(pool: &PgPool, user_id: DbId) -> Result<Option<Event>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM events WHERE user_id = $1 AND is_origin");
        sqlx::query_as::<_, Event>(&query)
            .bind(user_id)
            .fetch_optional(pool)
            .await
    }

    /// Count the user's events other than the given one.
    pub async fn count_others(pool: &PgPool, user_id: DbId, id: DbId) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar("SELECT COUNT(*) FROM events WHERE user_id = $1 AND id <> $2")
            .bind(user_id)
            .bind(id)
            .fetch_one(pool)
            .await
    }

    /// Update one of the user's events. Only non-`None` fields in `input`
    /// are applied; switching to a type reference clears any legacy label.
    ///
    /// Returns `None` if the user owns no such row.
    pub async fn update(
        pool: &PgPool,
        user_id: DbId,
        id: DbId,
        input: &UpdateEvent,
    ) -> Result<Option<Event>, sqlx::Error> {
        let query = format!(
            "UPDATE events SET
                name = COALESCE($3, name),
                description = COALESCE($4, description),
                event_date = COALESCE($5, event_date),
                event_type_id = COALESCE($6, event_type_id),
                legacy_type = CASE WHEN $6::BIGINT IS NULL THEN legacy_type ELSE NULL END
             WHERE id = $1 AND user_id = $2
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Event>(&query)
            .bind(id)
            .bind(user_id)
            .bind(&input.name)
            .bind(&input.description)
            .bind(input.event_date)
            .bind(input.event_type_id)
            .fetch_optional(pool)
            .await
    }

    /// Hard-delete one of the user's events. Photo rows cascade at the
    /// database level; the caller removes the stored files.
    ///
    /// Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, user_id: DbId, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM events WHERE id = $1 AND user_id = $2")
            .bind(id)
            .bind(user_id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
