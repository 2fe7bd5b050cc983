//! Shared response envelope types for API handlers.
//!
//! All resource responses use a `{ "data": ... }` envelope per project
//! conventions (auth token responses and the health check are bare). Use
//! [`DataResponse`] instead of ad-hoc `serde_json::json!({ "data": ... })`
//! to get compile-time type safety and consistent serialization.

use serde::Serialize;

/// Standard `{ "data": T }` response envelope.
#[derive(Debug, Serialize)]
pub struct DataResponse<T: Serialize> {
    pub data: T,
}
