//! HMAC-SHA256 signing for short-lived photo retrieval URLs.
//!
//! The file endpoint is reachable without a session so that `<img>` tags
//! can load photos directly. Instead, every URL carries an expiry and a
//! signature over `(photo id, expiry)` keyed with a server-side secret.

use hmac::{Hmac, Mac};
use sha2::Sha256;

use crate::error::CoreError;
use crate::types::DbId;

type HmacSha256 = Hmac<Sha256>;

/// Default lifetime of a signed photo URL in seconds (15 minutes).
pub const DEFAULT_SIGNED_URL_TTL_SECS: i64 = 15 * 60;

/// Compute the hex-encoded signature for a photo id and expiry timestamp.
pub fn sign_photo_url(secret: &str, photo_id: DbId, expires_unix: i64) -> String {
    let mut mac =
        HmacSha256::new_from_slice(secret.as_bytes()).expect("HMAC accepts any key length");
    mac.update(message(photo_id, expires_unix).as_bytes());
    hex_encode(&mac.finalize().into_bytes())
}

/// Verify a signed photo URL.
///
/// Checks the expiry first, then the signature (in constant time via the
/// underlying MAC). Returns `Unauthorized` on either failure so callers
/// cannot distinguish a tampered signature from a stale one.
pub fn verify_photo_url(
    secret: &str,
    photo_id: DbId,
    expires_unix: i64,
    signature: &str,
    now_unix: i64,
) -> Result<(), CoreError> {
    if now_unix > expires_unix {
        return Err(CoreError::Unauthorized("Signed URL has expired".into()));
    }

    let sig_bytes = hex_decode(signature)
        .ok_or_else(|| CoreError::Unauthorized("Invalid URL signature".into()))?;

    let mut mac =
        HmacSha256::new_from_slice(secret.as_bytes()).expect("HMAC accepts any key length");
    mac.update(message(photo_id, expires_unix).as_bytes());
    mac.verify_slice(&sig_bytes)
        .map_err(|_| CoreError::Unauthorized("Invalid URL signature".into()))
}

fn message(photo_id: DbId, expires_unix: i64) -> String {
    format!("photo:{photo_id}:{expires_unix}")
}

/// Encode bytes as a lowercase hex string.
fn hex_encode(bytes: &[u8]) -> String {
    bytes.iter().map(|b| format!("{b:02x}")).collect()
}

/// Decode a hex string, returning `None` on malformed input.
fn hex_decode(s: &str) -> Option<Vec<u8>> {
    if s.len() % 2 != 0 {
        return None;
    }
    (0..s.len())
        .step_by(2)
        .map(|i| u8::from_str_radix(&s[i..i + 2], 16).ok())
        .collect()
}
