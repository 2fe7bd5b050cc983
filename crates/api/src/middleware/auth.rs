//! JWT-based authentication extractor for Axum handlers.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use lifeline_core::error::CoreError;
use lifeline_core::types::DbId;

use crate::auth::cookies::{cookie_value, ACCESS_COOKIE};
use crate::auth::jwt::validate_token;
use crate::error::AppError;
use crate::state::AppState;

/// Authenticated user extracted from a JWT access token.
///
/// The token is read from the `Authorization: Bearer <token>` header if
/// present, falling back to the access cookie set at login. Use this as
/// an extractor parameter in any handler that requires authentication:
///
/// ```ignore
/// async fn my_handler(user: AuthUser) -> AppResult<Json<()>> {
///     tracing::info!(user_id = user.user_id, "handling request");
///     Ok(Json(()))
/// }
/// ```
#[derive(Debug, Clone)]
pub struct AuthUser {
    /// The user's internal database id (from `claims.sub`).
    pub user_id: DbId,
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let bearer = parts
            .headers
            .get("authorization")
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.strip_prefix("Bearer "))
            .map(str::to_string);

        let token = match bearer {
            Some(token) => token,
            None => cookie_value(&parts.headers, ACCESS_COOKIE).ok_or_else(|| {
                AppError::Core(CoreError::Unauthorized(
                    "Missing credentials. Expected a Bearer token or session cookie".into(),
                ))
            })?,
        };

        let claims = validate_token(&token, &state.config.jwt).map_err(|_| {
            AppError::Core(CoreError::Unauthorized("Invalid or expired token".into()))
        })?;

        Ok(AuthUser {
            user_id: claims.sub,
        })
    }
}
