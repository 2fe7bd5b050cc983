//! Photo entity model and DTOs.

use lifeline_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A photo attached to an event. The blob lives on the photo store under
/// `file_path`; this row is the metadata.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Photo {
    pub id: DbId,
    pub event_id: DbId,
    pub file_path: String,
    pub file_size_bytes: i64,
    pub mime_type: String,
    pub width: Option<i32>,
    pub height: Option<i32>,
    pub sort_order: i32,
    pub created_at: Timestamp,
}

/// DTO for inserting a photo row after the file has been stored.
#[derive(Debug)]
pub struct CreatePhoto {
    pub event_id: DbId,
    pub file_path: String,
    pub file_size_bytes: i64,
    pub mime_type: String,
    pub width: Option<i32>,
    pub height: Option<i32>,
    pub sort_order: i32,
}

/// DTO for updating photo metadata.
#[derive(Debug, Deserialize)]
pub struct UpdatePhoto {
    pub sort_order: Option<i32>,
}
