use std::path::PathBuf;

use lifeline_core::media::DEFAULT_MAX_UPLOAD_BYTES;
use lifeline_core::signing::DEFAULT_SIGNED_URL_TTL_SECS;

use crate::auth::jwt::JwtConfig;

/// Server configuration loaded from environment variables.
///
/// All fields except the JWT secret have sensible defaults suitable for
/// local development. In production, override via environment variables.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3000`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS` env var.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// JWT token configuration (secret, expiry durations).
    pub jwt: JwtConfig,
    /// Root directory for stored photo files (default: `storage/photos`).
    pub photo_storage_dir: PathBuf,
    /// Maximum photo upload size in bytes (default: 10 MiB).
    pub max_upload_bytes: usize,
    /// Secret for HMAC-signed photo URLs (defaults to the JWT secret).
    pub url_signing_secret: String,
    /// Signed photo URL lifetime in seconds (default: 900).
    pub signed_url_ttl_secs: i64,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default                    |
    /// |------------------------|----------------------------|
    /// | `HOST`                 | `0.0.0.0`                  |
    /// | `PORT`                 | `3000`                     |
    /// | `CORS_ORIGINS`         | `http://localhost:5173`    |
    /// | `REQUEST_TIMEOUT_SECS` | `30`                       |
    /// | `PHOTO_STORAGE_DIR`    | `storage/photos`           |
    /// | `MAX_UPLOAD_BYTES`     | `10485760`                 |
    /// | `PHOTO_URL_SECRET`     | value of `JWT_SECRET`      |
    /// | `SIGNED_URL_TTL_SECS`  | `900`                      |
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "3000".into())
            .parse()
            .expect("PORT must be a valid u16");

        let cors_origins: Vec<String> = std::env::var("CORS_ORIGINS")
            .unwrap_or_else(|_| "http://localhost:5173".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        let jwt = JwtConfig::from_env();

        let photo_storage_dir =
            PathBuf::from(std::env::var("PHOTO_STORAGE_DIR").unwrap_or_else(|_| "storage/photos".into()));

        let max_upload_bytes: usize = std::env::var("MAX_UPLOAD_BYTES")
            .unwrap_or_else(|_| DEFAULT_MAX_UPLOAD_BYTES.to_string())
            .parse()
            .expect("MAX_UPLOAD_BYTES must be a valid usize");

        let url_signing_secret =
            std::env::var("PHOTO_URL_SECRET").unwrap_or_else(|_| jwt.secret.clone());

        let signed_url_ttl_secs: i64 = std::env::var("SIGNED_URL_TTL_SECS")
            .unwrap_or_else(|_| DEFAULT_SIGNED_URL_TTL_SECS.to_string())
            .parse()
            .expect("SIGNED_URL_TTL_SECS must be a valid i64");

        Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            jwt,
            photo_storage_dir,
            max_upload_bytes,
            url_signing_secret,
            signed_url_ttl_secs,
        }
    }
}
