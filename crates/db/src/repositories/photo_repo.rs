//! Repository for the `photos` table.

use lifeline_core::types::DbId;
use sqlx::PgPool;

use crate::models::photo::{CreatePhoto, Photo, UpdatePhoto};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, event_id, file_path, file_size_bytes, mime_type, \
                        width, height, sort_order, created_at";

/// Prefixed column list for queries that join through `events`.
const JOINED_COLUMNS: &str = "p.id, p.event_id, p.file_path, p.file_size_bytes, p.mime_type, \
                        p.width, p.height, p.sort_order, p.created_at";

/// Provides CRUD operations for photos.
pub struct PhotoRepo;

impl PhotoRepo {
    /// Insert a photo row, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreatePhoto) -> Result<Photo, sqlx::Error> {
        let query = format!(
            "INSERT INTO photos
                (event_id, file_path, file_size_bytes, mime_type, width, height, sort_order)
             VALUES ($1, $2, $3, $4, $5, $6, $7)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Photo>(&query)
            .bind(input.event_id)
            .bind(&input.file_path)
            .bind(input.file_size_bytes)
            .bind(&input.mime_type)
            .bind(input.width)
            .bind(input.height)
            .bind(input.sort_order)
            .fetch_one(pool)
            .await
    }

    /// Find a photo by ID without ownership scoping.
    ///
    /// Used by the signed-URL file endpoint, where the HMAC signature is
    /// the access check.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Photo>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM photos WHERE id = $1");
        sqlx::query_as::<_, Photo>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find a photo by ID, restricted to events owned by `user_id`.
    pub async fn find_for_user(
        pool: &PgPool,
        user_id: DbId,
        id: DbId,
    ) -> Result<Option<Photo>, sqlx::Error> {
        let query = format!(
            "SELECT {JOINED_COLUMNS} FROM photos p
             JOIN events e ON e.id = p.event_id
             WHERE p.id = $1 AND e.user_id = $2"
        );
        sqlx::query_as::<_, Photo>(&query)
            .bind(id)
            .bind(user_id)
            .fetch_optional(pool)
            .await
    }

    /// List an event's photos in sort order.
    pub async fn list_by_event(pool: &PgPool, event_id: DbId) -> Result<Vec<Photo>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM photos
             WHERE event_id = $1
             ORDER BY sort_order ASC, id ASC"
        );
        sqlx::query_as::<_, Photo>(&query)
            .bind(event_id)
            .fetch_all(pool)
            .await
    }

    /// File paths of all photos attached to an event.
    ///
    /// Collected before an event delete so the stored files can be removed
    /// after the rows cascade.
    pub async fn paths_by_event(
        pool: &PgPool,
        event_id: DbId,
    ) -> Result<Vec<String>, sqlx::Error> {
        sqlx::query_scalar("SELECT file_path FROM photos WHERE event_id = $1")
            .bind(event_id)
            .fetch_all(pool)
            .await
    }

    /// Update photo metadata. Only non-`None` fields in `input` are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdatePhoto,
    ) -> Result<Option<Photo>, sqlx::Error> {
        let query = format!(
            "UPDATE photos SET sort_order = COALESCE($2, sort_order)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Photo>(&query)
            .bind(id)
            .bind(input.sort_order)
            .fetch_optional(pool)
            .await
    }

    /// Delete a photo row. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM photos WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
