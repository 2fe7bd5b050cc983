//! Integration tests for the event endpoints.

mod common;

use axum::http::StatusCode;
use serde_json::json;
use sqlx::PgPool;

/// Create an event with a legacy label and return its id.
async fn create_legacy_event(
    pool: &PgPool,
    dir: &std::path::Path,
    token: &str,
    name: &str,
    date: &str,
    is_origin: bool,
) -> i64 {
    let app = common::build_test_app(pool.clone(), dir);
    let response = common::post_json(
        app,
        "/api/v1/events",
        token,
        json!({
            "name": name,
            "event_date": date,
            "legacy_type": "imported",
            "is_origin": is_origin,
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    common::body_json(response).await["data"]["id"]
        .as_i64()
        .unwrap()
}

#[sqlx::test(migrations = "../db/migrations")]
async fn create_event_with_legacy_type(pool: PgPool) {
    let dir = tempfile::tempdir().unwrap();
    let token = common::signup(pool.clone(), dir.path(), "alice").await;

    let app = common::build_test_app(pool, dir.path());
    let response = common::post_json(
        app,
        "/api/v1/events",
        &token,
        json!({
            "name": "Moved to Berlin",
            "description": "New city, new flat",
            "event_date": "2018-09-15",
            "legacy_type": "relocation",
        }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let body = common::body_json(response).await;
    let event = &body["data"];
    assert_eq!(event["name"], "Moved to Berlin");
    assert_eq!(event["legacy_type"], "relocation");
    assert!(event["event_type_id"].is_null());
    assert_eq!(event["is_origin"], false);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn create_requires_exactly_one_type_reference(pool: PgPool) {
    let dir = tempfile::tempdir().unwrap();
    let token = common::signup(pool.clone(), dir.path(), "alice").await;

    // Neither.
    let app = common::build_test_app(pool.clone(), dir.path());
    let response = common::post_json(
        app,
        "/api/v1/events",
        &token,
        json!({ "name": "Something", "event_date": "2020-01-01" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    // Both.
    let app = common::build_test_app(pool, dir.path());
    let response = common::post_json(
        app,
        "/api/v1/events",
        &token,
        json!({
            "name": "Something",
            "event_date": "2020-01-01",
            "event_type_id": 1,
            "legacy_type": "misc",
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn create_rejects_unknown_event_type(pool: PgPool) {
    let dir = tempfile::tempdir().unwrap();
    let token = common::signup(pool.clone(), dir.path(), "alice").await;

    let app = common::build_test_app(pool, dir.path());
    let response = common::post_json(
        app,
        "/api/v1/events",
        &token,
        json!({
            "name": "Something",
            "event_date": "2020-01-01",
            "event_type_id": 999_999,
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn only_one_origin_event_per_user(pool: PgPool) {
    let dir = tempfile::tempdir().unwrap();
    let token = common::signup(pool.clone(), dir.path(), "alice").await;

    create_legacy_event(&pool, dir.path(), &token, "Born", "1990-01-01", true).await;

    let app = common::build_test_app(pool.clone(), dir.path());
    let response = common::post_json(
        app,
        "/api/v1/events",
        &token,
        json!({
            "name": "Born again",
            "event_date": "1991-01-01",
            "legacy_type": "birth",
            "is_origin": true,
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CONFLICT);

    // A different user is free to have their own origin.
    let bob = common::signup(pool.clone(), dir.path(), "bob").await;
    create_legacy_event(&pool, dir.path(), &bob, "Born", "1985-06-01", true).await;
}

#[sqlx::test(migrations = "../db/migrations")]
async fn list_filters_by_event_type(pool: PgPool) {
    let dir = tempfile::tempdir().unwrap();
    let token = common::signup(pool.clone(), dir.path(), "alice").await;

    let app = common::build_test_app(pool.clone(), dir.path());
    let response = common::post_json(
        app,
        "/api/v1/event-types",
        &token,
        json!({ "name": "hobby", "display_name": "Hobby", "color": "#ff8800" }),
    )
    .await;
    let type_id = common::body_json(response).await["data"]["id"]
        .as_i64()
        .unwrap();

    let app = common::build_test_app(pool.clone(), dir.path());
    let response = common::post_json(
        app,
        "/api/v1/events",
        &token,
        json!({
            "name": "Started painting",
            "event_date": "2020-05-01",
            "event_type_id": type_id,
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    create_legacy_event(&pool, dir.path(), &token, "Moved", "2019-03-01", false).await;

    let app = common::build_test_app(pool.clone(), dir.path());
    let response = common::get(app, "/api/v1/events", &token).await;
    let all = common::body_json(response).await;
    assert_eq!(all["data"].as_array().unwrap().len(), 2);

    let app = common::build_test_app(pool, dir.path());
    let response =
        common::get(app, &format!("/api/v1/events?event_type_id={type_id}"), &token).await;
    let filtered = common::body_json(response).await;
    assert_eq!(filtered["data"].as_array().unwrap().len(), 1);
    assert_eq!(filtered["data"][0]["name"], "Started painting");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn update_event_fields(pool: PgPool) {
    let dir = tempfile::tempdir().unwrap();
    let token = common::signup(pool.clone(), dir.path(), "alice").await;
    let id = create_legacy_event(&pool, dir.path(), &token, "Moved", "2019-03-01", false).await;

    let app = common::build_test_app(pool.clone(), dir.path());
    let response = common::put_json(
        app,
        &format!("/api/v1/events/{id}"),
        &token,
        json!({ "name": "Moved abroad", "event_date": "2019-04-01" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = common::body_json(response).await;
    assert_eq!(body["data"]["name"], "Moved abroad");
    assert_eq!(body["data"]["event_date"], "2019-04-01");

    // Switching to a real type clears the legacy label.
    let app = common::build_test_app(pool.clone(), dir.path());
    let response = common::put_json(
        app,
        &format!("/api/v1/events/{id}"),
        &token,
        json!({ "event_type_id": 1 }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = common::body_json(response).await;
    assert_eq!(body["data"]["event_type_id"], 1);
    assert!(body["data"]["legacy_type"].is_null());

    // Blank name is rejected.
    let app = common::build_test_app(pool, dir.path());
    let response = common::put_json(
        app,
        &format!("/api/v1/events/{id}"),
        &token,
        json!({ "name": "   " }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn origin_event_protected_while_others_exist(pool: PgPool) {
    let dir = tempfile::tempdir().unwrap();
    let token = common::signup(pool.clone(), dir.path(), "alice").await;

    let origin = create_legacy_event(&pool, dir.path(), &token, "Born", "1990-01-01", true).await;
    let other = create_legacy_event(&pool, dir.path(), &token, "Moved", "2019-03-01", false).await;

    let app = common::build_test_app(pool.clone(), dir.path());
    let response = common::delete(app, &format!("/api/v1/events/{origin}"), &token).await;
    assert_eq!(response.status(), StatusCode::CONFLICT);

    let app = common::build_test_app(pool.clone(), dir.path());
    let response = common::delete(app, &format!("/api/v1/events/{other}"), &token).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    // Last event standing, the origin may go.
    let app = common::build_test_app(pool, dir.path());
    let response = common::delete(app, &format!("/api/v1/events/{origin}"), &token).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn events_are_scoped_to_their_owner(pool: PgPool) {
    let dir = tempfile::tempdir().unwrap();
    let alice = common::signup(pool.clone(), dir.path(), "alice").await;
    let bob = common::signup(pool.clone(), dir.path(), "bob").await;

    let id = create_legacy_event(&pool, dir.path(), &alice, "Moved", "2019-03-01", false).await;

    let app = common::build_test_app(pool.clone(), dir.path());
    let response = common::get(app, &format!("/api/v1/events/{id}"), &bob).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let app = common::build_test_app(pool.clone(), dir.path());
    let response = common::delete(app, &format!("/api/v1/events/{id}"), &bob).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let app = common::build_test_app(pool, dir.path());
    let response = common::get(app, "/api/v1/events", &bob).await;
    let body = common::body_json(response).await;
    assert!(body["data"].as_array().unwrap().is_empty());
}
