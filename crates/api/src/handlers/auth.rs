//! Handlers for the `/auth` resource (register, login, refresh, logout, me).

use axum::extract::State;
use axum::http::header::SET_COOKIE;
use axum::http::{HeaderMap, StatusCode};
use axum::response::{AppendHeaders, IntoResponse};
use axum::Json;
use chrono::Utc;
use lifeline_core::error::CoreError;
use lifeline_core::types::DbId;
use serde::{Deserialize, Serialize};

use lifeline_db::models::session::CreateSession;
use lifeline_db::models::user::CreateUser;
use lifeline_db::repositories::{SessionRepo, UserRepo};

use crate::auth::cookies;
use crate::auth::jwt::{generate_access_token, generate_refresh_token, hash_refresh_token};
use crate::auth::password::{hash_password, validate_password_strength, verify_password};
use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

/// Maximum consecutive failed login attempts before locking the account.
const MAX_FAILED_ATTEMPTS: i32 = 5;

/// Duration in minutes to lock an account after exceeding failed attempts.
const LOCK_DURATION_MINS: i64 = 15;

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

/// Request body for `POST /auth/register`.
#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    pub username: String,
    pub email: String,
    pub password: String,
}

/// Request body for `POST /auth/login`.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Request body for `POST /auth/refresh`. The token may instead arrive
/// via the refresh cookie.
#[derive(Debug, Deserialize, Default)]
pub struct RefreshRequest {
    pub refresh_token: Option<String>,
}

/// Successful authentication response returned by register, login, and refresh.
#[derive(Debug, Serialize)]
pub struct AuthResponse {
    pub access_token: String,
    pub refresh_token: String,
    /// Access token lifetime in seconds.
    pub expires_in: i64,
    pub user: UserInfo,
}

/// Public user info embedded in [`AuthResponse`] and returned by `/auth/me`.
#[derive(Debug, Serialize)]
pub struct UserInfo {
    pub id: DbId,
    pub username: String,
    pub email: String,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// POST /api/v1/auth/register
///
/// Create an account and log the new user straight in.
pub async fn register(
    State(state): State<AppState>,
    Json(input): Json<RegisterRequest>,
) -> AppResult<impl IntoResponse> {
    let username = input.username.trim();
    if username.is_empty() {
        return Err(AppError::Core(CoreError::Validation(
            "Username must not be empty".into(),
        )));
    }
    if !input.email.contains('@') {
        return Err(AppError::Core(CoreError::Validation(format!(
            "Invalid email address '{}'",
            input.email
        ))));
    }
    validate_password_strength(&input.password)?;

    let password_hash = hash_password(&input.password)
        .map_err(|e| AppError::InternalError(format!("Password hashing error: {e}")))?;

    // Unique violations on username/email surface as 409 via uq_ mapping.
    let user = UserRepo::create(
        &state.pool,
        &CreateUser {
            username: username.to_string(),
            email: input.email.clone(),
            password_hash,
        },
    )
    .await?;

    tracing::info!(user_id = user.id, "Registered new user");

    let (response, cookie_headers) =
        create_auth_response(&state, user.id, &user.username, &user.email).await?;
    Ok((StatusCode::CREATED, cookie_headers, Json(response)))
}

/// POST /api/v1/auth/login
///
/// Authenticate with username + password. Returns access and refresh
/// tokens and mirrors them into session cookies.
pub async fn login(
    State(state): State<AppState>,
    Json(input): Json<LoginRequest>,
) -> AppResult<impl IntoResponse> {
    // 1. Find user by username.
    let user = UserRepo::find_by_username(&state.pool, &input.username)
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::Unauthorized(
                "Invalid username or password".into(),
            ))
        })?;

    // 2. Check if the account is active.
    if !user.is_active {
        return Err(AppError::Core(CoreError::Forbidden(
            "Account is deactivated".into(),
        )));
    }

    // 3. Check if the account is temporarily locked.
    if let Some(locked_until) = user.locked_until {
        if locked_until > Utc::now() {
            return Err(AppError::Core(CoreError::Forbidden(
                "Account is temporarily locked. Try again later.".into(),
            )));
        }
    }

    // 4. Verify password.
    let password_valid = verify_password(&input.password, &user.password_hash)
        .map_err(|e| AppError::InternalError(format!("Password verification error: {e}")))?;

    if !password_valid {
        // 5. On failure: increment counter, lock if threshold exceeded.
        UserRepo::increment_failed_login(&state.pool, user.id).await?;

        let new_count = user.failed_login_count + 1;
        if new_count >= MAX_FAILED_ATTEMPTS {
            let lock_until = Utc::now() + chrono::Duration::minutes(LOCK_DURATION_MINS);
            UserRepo::lock_account(&state.pool, user.id, lock_until).await?;
        }

        return Err(AppError::Core(CoreError::Unauthorized(
            "Invalid username or password".into(),
        )));
    }

    // 6. On success: reset failed count, set last_login_at.
    UserRepo::record_successful_login(&state.pool, user.id).await?;

    // 7. Generate tokens, create session, set cookies.
    let (response, cookie_headers) =
        create_auth_response(&state, user.id, &user.username, &user.email).await?;
    Ok((cookie_headers, Json(response)))
}

/// POST /api/v1/auth/refresh
///
/// Exchange a valid refresh token (cookie or JSON body) for new access +
/// refresh tokens. The old session is revoked (token rotation).
pub async fn refresh(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Option<Json<RefreshRequest>>,
) -> AppResult<impl IntoResponse> {
    // 1. Token from the refresh cookie, else the request body.
    let token = cookies::cookie_value(&headers, cookies::REFRESH_COOKIE)
        .or_else(|| body.and_then(|Json(b)| b.refresh_token))
        .ok_or_else(|| {
            AppError::Core(CoreError::Unauthorized("Missing refresh token".into()))
        })?;

    // 2. Find matching active session by token hash.
    let token_hash = hash_refresh_token(&token);
    let session = SessionRepo::find_by_refresh_token_hash(&state.pool, &token_hash)
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::Unauthorized(
                "Invalid or expired refresh token".into(),
            ))
        })?;

    // 3. Revoke old session (token rotation).
    SessionRepo::revoke(&state.pool, session.id).await?;

    // 4. Find user.
    let user = UserRepo::find_by_id(&state.pool, session.user_id)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::Unauthorized("User no longer exists".into())))?;

    if !user.is_active {
        return Err(AppError::Core(CoreError::Forbidden(
            "Account is deactivated".into(),
        )));
    }

    // 5. Generate new tokens and create new session.
    let (response, cookie_headers) =
        create_auth_response(&state, user.id, &user.username, &user.email).await?;
    Ok((cookie_headers, Json(response)))
}

/// POST /api/v1/auth/logout
///
/// Revoke all sessions for the authenticated user and clear the session
/// cookies. Returns 204 No Content.
pub async fn logout(
    State(state): State<AppState>,
    auth_user: AuthUser,
) -> AppResult<impl IntoResponse> {
    let revoked = SessionRepo::revoke_all_for_user(&state.pool, auth_user.user_id).await?;
    tracing::info!(user_id = auth_user.user_id, revoked, "Logged out");

    let [clear_access, clear_refresh] = cookies::clear_cookies();
    Ok((
        StatusCode::NO_CONTENT,
        AppendHeaders([(SET_COOKIE, clear_access), (SET_COOKIE, clear_refresh)]),
    ))
}

/// GET /api/v1/auth/me
pub async fn me(
    State(state): State<AppState>,
    auth_user: AuthUser,
) -> AppResult<Json<UserInfo>> {
    let user = UserRepo::find_by_id(&state.pool, auth_user.user_id)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::Unauthorized("User no longer exists".into())))?;

    Ok(Json(UserInfo {
        id: user.id,
        username: user.username,
        email: user.email,
    }))
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Generate access + refresh tokens, persist a session row, and build the
/// response body plus the `Set-Cookie` headers mirroring both tokens.
async fn create_auth_response(
    state: &AppState,
    user_id: DbId,
    username: &str,
    email: &str,
) -> AppResult<(AuthResponse, AppendHeaders<[(axum::http::HeaderName, String); 2]>)> {
    let access_token = generate_access_token(user_id, &state.config.jwt)
        .map_err(|e| AppError::InternalError(format!("Token generation error: {e}")))?;

    let (refresh_plaintext, refresh_hash) = generate_refresh_token();

    let refresh_expiry_days = state.config.jwt.refresh_token_expiry_days;
    let expires_at = Utc::now() + chrono::Duration::days(refresh_expiry_days);

    let session_input = CreateSession {
        user_id,
        refresh_token_hash: refresh_hash,
        expires_at,
        user_agent: None,
    };
    SessionRepo::create(&state.pool, &session_input).await?;

    let expires_in = state.config.jwt.access_token_expiry_mins * 60;

    let cookie_headers = AppendHeaders([
        (
            SET_COOKIE,
            cookies::access_cookie(&access_token, expires_in),
        ),
        (
            SET_COOKIE,
            cookies::refresh_cookie(&refresh_plaintext, refresh_expiry_days * 24 * 3600),
        ),
    ]);

    let response = AuthResponse {
        access_token,
        refresh_token: refresh_plaintext,
        expires_in,
        user: UserInfo {
            id: user_id,
            username: username.to_string(),
            email: email.to_string(),
        },
    };

    Ok((response, cookie_headers))
}
