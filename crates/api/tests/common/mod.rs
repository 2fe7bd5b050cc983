//! Shared helpers for HTTP-level integration tests.
//!
//! Uses Axum's `tower::ServiceExt` to send requests directly to the
//! router without an actual TCP listener.

#![allow(dead_code)]

use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use axum::body::Body;
use axum::http::header::{AUTHORIZATION, CONTENT_TYPE};
use axum::http::{HeaderName, Method, Request, Response, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use sqlx::PgPool;
use tower::ServiceExt;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::CorsLayer;
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

use lifeline_api::auth::jwt::JwtConfig;
use lifeline_api::config::ServerConfig;
use lifeline_api::routes;
use lifeline_api::state::AppState;
use lifeline_api::storage::PhotoStore;

/// Build a test `ServerConfig` with safe defaults and a known secret.
pub fn test_config(photo_dir: &Path) -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        jwt: JwtConfig {
            secret: "integration-test-secret-long-enough".to_string(),
            access_token_expiry_mins: 15,
            refresh_token_expiry_days: 7,
        },
        photo_storage_dir: photo_dir.to_path_buf(),
        max_upload_bytes: 10 * 1024 * 1024,
        url_signing_secret: "integration-test-url-secret".to_string(),
        signed_url_ttl_secs: 900,
    }
}

/// Build the full application router with all middleware layers, using
/// the given database pool and photo storage directory.
///
/// This mirrors the router construction in `main.rs` so integration
/// tests exercise the same middleware stack (CORS, request ID, timeout,
/// tracing, panic recovery) that production uses.
pub fn build_test_app(pool: PgPool, photo_dir: &Path) -> Router {
    build_test_app_with_limit(pool, photo_dir, 10 * 1024 * 1024)
}

/// Like [`build_test_app`] but with a custom upload size cap, so tests can
/// trip the body limit without multi-megabyte request bodies.
pub fn build_test_app_with_limit(
    pool: PgPool,
    photo_dir: &Path,
    max_upload_bytes: usize,
) -> Router {
    let mut config = test_config(photo_dir);
    config.max_upload_bytes = max_upload_bytes;
    let photo_store = PhotoStore::new(config.photo_storage_dir.clone());
    let max_upload_bytes = config.max_upload_bytes;

    let state = AppState {
        pool,
        config: Arc::new(config),
        photo_store,
    };

    let cors = CorsLayer::new()
        .allow_origin(["http://localhost:5173".parse().unwrap()])
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::PATCH,
        ])
        .allow_headers([CONTENT_TYPE, AUTHORIZATION])
        .allow_credentials(true)
        .max_age(Duration::from_secs(3600));

    let request_id_header = HeaderName::from_static("x-request-id");

    Router::new()
        .merge(routes::health::router())
        .nest("/api/v1", routes::api_routes(max_upload_bytes))
        .layer(CatchPanicLayer::new())
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            Duration::from_secs(30),
        ))
        .layer(PropagateRequestIdLayer::new(request_id_header.clone()))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .layer(SetRequestIdLayer::new(request_id_header, MakeRequestUuid))
        .layer(cors)
        .with_state(state)
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

/// Send a request with an optional bearer token and optional JSON body.
pub async fn send(
    app: Router,
    method: Method,
    uri: &str,
    token: Option<&str>,
    body: Option<serde_json::Value>,
) -> Response<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header(AUTHORIZATION, format!("Bearer {token}"));
    }
    let request = match body {
        Some(json) => builder
            .header(CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };
    app.oneshot(request).await.unwrap()
}

pub async fn get(app: Router, uri: &str, token: &str) -> Response<Body> {
    send(app, Method::GET, uri, Some(token), None).await
}

pub async fn get_public(app: Router, uri: &str) -> Response<Body> {
    send(app, Method::GET, uri, None, None).await
}

pub async fn post_json(
    app: Router,
    uri: &str,
    token: &str,
    body: serde_json::Value,
) -> Response<Body> {
    send(app, Method::POST, uri, Some(token), Some(body)).await
}

pub async fn post_json_public(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    send(app, Method::POST, uri, None, Some(body)).await
}

pub async fn put_json(
    app: Router,
    uri: &str,
    token: &str,
    body: serde_json::Value,
) -> Response<Body> {
    send(app, Method::PUT, uri, Some(token), Some(body)).await
}

pub async fn delete(app: Router, uri: &str, token: &str) -> Response<Body> {
    send(app, Method::DELETE, uri, Some(token), None).await
}

/// Collect a response body as JSON.
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

/// Collect a response body as raw bytes.
pub async fn body_bytes(response: Response<Body>) -> Vec<u8> {
    response
        .into_body()
        .collect()
        .await
        .unwrap()
        .to_bytes()
        .to_vec()
}

// ---------------------------------------------------------------------------
// Auth helpers
// ---------------------------------------------------------------------------

/// Register a fresh user and return their access token.
pub async fn signup(pool: PgPool, photo_dir: &Path, username: &str) -> String {
    let app = build_test_app(pool, photo_dir);
    let response = post_json_public(
        app,
        "/api/v1/auth/register",
        serde_json::json!({
            "username": username,
            "email": format!("{username}@example.com"),
            "password": "a-perfectly-fine-password",
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED, "signup failed");

    let json = body_json(response).await;
    json["access_token"].as_str().unwrap().to_string()
}

// ---------------------------------------------------------------------------
// Multipart helpers
// ---------------------------------------------------------------------------

/// Boundary used by [`multipart_photo_body`].
pub const MULTIPART_BOUNDARY: &str = "test-boundary-7MA4YWxkTrZu0gW";

/// Encode a 1x1 PNG entirely in memory for upload tests.
pub fn tiny_png() -> Vec<u8> {
    let img = image::RgbaImage::from_pixel(1, 1, image::Rgba([10, 20, 30, 255]));
    let mut bytes = Vec::new();
    img.write_to(
        &mut std::io::Cursor::new(&mut bytes),
        image::ImageFormat::Png,
    )
    .unwrap();
    bytes
}

/// Build a multipart body with a single `file` field.
pub fn multipart_photo_body(filename: &str, data: &[u8]) -> Vec<u8> {
    let mut body = Vec::new();
    body.extend_from_slice(format!("--{MULTIPART_BOUNDARY}\r\n").as_bytes());
    body.extend_from_slice(
        format!("Content-Disposition: form-data; name=\"file\"; filename=\"{filename}\"\r\n")
            .as_bytes(),
    );
    body.extend_from_slice(b"Content-Type: application/octet-stream\r\n\r\n");
    body.extend_from_slice(data);
    body.extend_from_slice(format!("\r\n--{MULTIPART_BOUNDARY}--\r\n").as_bytes());
    body
}

/// Upload a photo via multipart and return the response.
pub async fn upload_photo(
    app: Router,
    uri: &str,
    token: &str,
    filename: &str,
    data: &[u8],
) -> Response<Body> {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(AUTHORIZATION, format!("Bearer {token}"))
        .header(
            CONTENT_TYPE,
            format!("multipart/form-data; boundary={MULTIPART_BOUNDARY}"),
        )
        .body(Body::from(multipart_photo_body(filename, data)))
        .unwrap();
    app.oneshot(request).await.unwrap()
}
