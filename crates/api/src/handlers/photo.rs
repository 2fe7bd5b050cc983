//! Handlers for event photos.
//!
//! Uploads arrive as multipart forms and land on the local photo store
//! under a server-generated UUID filename. Retrieval runs through
//! short-lived HMAC-signed URLs so `<img>` tags can load photos without a
//! session; everything else requires the owning user.

use std::io::Cursor;

use axum::extract::multipart::MultipartError;
use axum::extract::{Multipart, Path, Query, State};
use axum::http::header::CONTENT_TYPE;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use chrono::Utc;
use lifeline_core::error::CoreError;
use lifeline_core::media::{mime_for_extension, validate_photo_extension};
use lifeline_core::signing::{sign_photo_url, verify_photo_url};
use lifeline_core::types::DbId;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use lifeline_db::models::photo::{CreatePhoto, Photo, UpdatePhoto};
use lifeline_db::repositories::{EventRepo, PhotoRepo};

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Response types
// ---------------------------------------------------------------------------

/// Photo metadata decorated with a freshly signed retrieval URL.
#[derive(Debug, Serialize)]
pub struct PhotoWithUrl {
    #[serde(flatten)]
    pub photo: Photo,
    pub url: String,
}

/// Query parameters for the signed file endpoint.
#[derive(Debug, Deserialize)]
pub struct SignedUrlParams {
    pub expires: i64,
    pub sig: String,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// POST /api/v1/events/{event_id}/photos
///
/// Multipart form with a required `file` field and an optional
/// `sort_order` field. Image dimensions are read from the file header.
pub async fn upload(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(event_id): Path<DbId>,
    mut multipart: Multipart,
) -> AppResult<(StatusCode, Json<DataResponse<PhotoWithUrl>>)> {
    ensure_event_owned(&state, auth.user_id, event_id).await?;

    let mut file_data: Option<(String, Vec<u8>)> = None;
    let mut sort_order: i32 = 0;

    while let Some(field) = multipart.next_field().await.map_err(multipart_error)? {
        let name = field.name().unwrap_or("").to_string();
        match name.as_str() {
            "file" => {
                let filename = field.file_name().unwrap_or("photo").to_string();
                let data = field.bytes().await.map_err(multipart_error)?;
                file_data = Some((filename, data.to_vec()));
            }
            "sort_order" => {
                let text = field.text().await.map_err(multipart_error)?;
                sort_order = text
                    .parse()
                    .map_err(|_| AppError::BadRequest("sort_order must be an integer".into()))?;
            }
            _ => {} // ignore unknown fields
        }
    }

    let (filename, data) =
        file_data.ok_or_else(|| AppError::BadRequest("Missing required 'file' field".into()))?;

    let ext = validate_photo_extension(&filename)?;
    let mime_type = mime_for_extension(&ext);

    // Header-only dimension extraction; also rejects files that merely
    // wear an image extension.
    let dimensions = image::ImageReader::new(Cursor::new(&data))
        .with_guessed_format()
        .map_err(|e| AppError::InternalError(e.to_string()))?
        .into_dimensions()
        .map_err(|_| AppError::BadRequest("File is not a readable image".into()))?;
    let (width, height) = checked_dimensions(dimensions)?;

    let stored_filename = format!("{}.{ext}", Uuid::new_v4());
    state
        .photo_store
        .save(&stored_filename, &data)
        .await
        .map_err(|e| AppError::InternalError(e.to_string()))?;

    let input = CreatePhoto {
        event_id,
        file_path: stored_filename,
        file_size_bytes: data.len() as i64,
        mime_type: mime_type.to_string(),
        width: Some(width),
        height: Some(height),
        sort_order,
    };
    let photo = PhotoRepo::create(&state.pool, &input).await?;

    tracing::info!(
        user_id = auth.user_id,
        event_id,
        photo_id = photo.id,
        bytes = photo.file_size_bytes,
        "Uploaded photo"
    );

    let url = build_signed_url(&state, photo.id);
    Ok((
        StatusCode::CREATED,
        Json(DataResponse {
            data: PhotoWithUrl { photo, url },
        }),
    ))
}

/// GET /api/v1/events/{event_id}/photos
///
/// Metadata for the event's photos, each with a signed retrieval URL.
pub async fn list_by_event(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(event_id): Path<DbId>,
) -> AppResult<Json<DataResponse<Vec<PhotoWithUrl>>>> {
    ensure_event_owned(&state, auth.user_id, event_id).await?;

    let photos = PhotoRepo::list_by_event(&state.pool, event_id).await?;
    let data = photos
        .into_iter()
        .map(|photo| {
            let url = build_signed_url(&state, photo.id);
            PhotoWithUrl { photo, url }
        })
        .collect();

    Ok(Json(DataResponse { data }))
}

/// PUT /api/v1/photos/{id}
pub async fn update(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<DbId>,
    Json(input): Json<UpdatePhoto>,
) -> AppResult<Json<DataResponse<Photo>>> {
    PhotoRepo::find_for_user(&state.pool, auth.user_id, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Photo", id }))?;

    let photo = PhotoRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Photo", id }))?;
    Ok(Json(DataResponse { data: photo }))
}

/// DELETE /api/v1/photos/{id}
///
/// Removes the metadata row and the stored file.
pub async fn delete(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let photo = PhotoRepo::find_for_user(&state.pool, auth.user_id, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Photo", id }))?;

    PhotoRepo::delete(&state.pool, id).await?;

    if let Err(e) = state.photo_store.remove(&photo.file_path).await {
        tracing::warn!(photo_id = id, error = %e, "Failed to remove photo file");
    }

    Ok(StatusCode::NO_CONTENT)
}

/// GET /api/v1/photos/{id}/file?expires=..&sig=..
///
/// Signature-checked download. No session required: the HMAC signature
/// over `(photo id, expiry)` is the access check.
pub async fn file(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Query(params): Query<SignedUrlParams>,
) -> AppResult<impl IntoResponse> {
    verify_photo_url(
        &state.config.url_signing_secret,
        id,
        params.expires,
        &params.sig,
        Utc::now().timestamp(),
    )?;

    let photo = PhotoRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Photo", id }))?;

    let bytes = state
        .photo_store
        .read(&photo.file_path)
        .await
        .map_err(|e| AppError::InternalError(format!("Photo file missing: {e}")))?;

    Ok(([(CONTENT_TYPE, photo.mime_type)], bytes))
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Map a multipart read error, surfacing body-limit overruns as 413.
fn multipart_error(e: MultipartError) -> AppError {
    if e.status() == StatusCode::PAYLOAD_TOO_LARGE {
        AppError::PayloadTooLarge("Uploaded file exceeds the configured size limit".into())
    } else {
        AppError::BadRequest(e.to_string())
    }
}

/// Convert header-declared dimensions to the stored column type, rejecting
/// values that do not fit.
fn checked_dimensions((width, height): (u32, u32)) -> Result<(i32, i32), AppError> {
    match (i32::try_from(width), i32::try_from(height)) {
        (Ok(w), Ok(h)) => Ok((w, h)),
        _ => Err(AppError::BadRequest(
            "Image dimensions are out of range".into(),
        )),
    }
}

/// Build a signed retrieval URL for a photo using the configured TTL.
fn build_signed_url(state: &AppState, photo_id: DbId) -> String {
    let expires = Utc::now().timestamp() + state.config.signed_url_ttl_secs;
    let sig = sign_photo_url(&state.config.url_signing_secret, photo_id, expires);
    format!("/api/v1/photos/{photo_id}/file?expires={expires}&sig={sig}")
}

/// Ensure the event exists and belongs to the caller.
async fn ensure_event_owned(state: &AppState, user_id: DbId, event_id: DbId) -> AppResult<()> {
    EventRepo::find_for_user(&state.pool, user_id, event_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Event",
            id: event_id,
        }))?;
    Ok(())
}
