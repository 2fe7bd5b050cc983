//! Photo upload constraints: formats, mime types, and name validation.

use crate::error::CoreError;

/// File extensions accepted for photo uploads.
pub const SUPPORTED_PHOTO_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "webp"];

/// Default maximum upload size (10 MiB), overridable via config.
pub const DEFAULT_MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;

/// Lowercased extension of a filename, or an empty string.
pub fn file_extension(filename: &str) -> String {
    match filename.rsplit_once('.') {
        Some((stem, ext)) if !stem.is_empty() => ext.to_lowercase(),
        _ => String::new(),
    }
}

/// Validate the extension of an uploaded photo and return it lowercased.
pub fn validate_photo_extension(filename: &str) -> Result<String, CoreError> {
    let ext = file_extension(filename);
    if SUPPORTED_PHOTO_EXTENSIONS.contains(&ext.as_str()) {
        Ok(ext)
    } else {
        Err(CoreError::Validation(format!(
            "Unsupported photo format '.{ext}'. Supported: .png, .jpg, .jpeg, .webp"
        )))
    }
}

/// Mime type for a (validated) photo extension.
pub fn mime_for_extension(ext: &str) -> &'static str {
    match ext {
        "png" => "image/png",
        "jpg" | "jpeg" => "image/jpeg",
        "webp" => "image/webp",
        _ => "application/octet-stream",
    }
}
