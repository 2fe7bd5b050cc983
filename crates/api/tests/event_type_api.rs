//! Integration tests for the event-type endpoints.

mod common;

use axum::http::StatusCode;
use serde_json::json;
use sqlx::PgPool;

#[sqlx::test(migrations = "../db/migrations")]
async fn list_includes_seeded_defaults(pool: PgPool) {
    let dir = tempfile::tempdir().unwrap();
    let token = common::signup(pool.clone(), dir.path(), "alice").await;

    let app = common::build_test_app(pool, dir.path());
    let response = common::get(app, "/api/v1/event-types", &token).await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = common::body_json(response).await;
    let types = body["data"].as_array().unwrap();
    assert!(types.len() >= 7);
    assert!(types.iter().all(|t| t["is_default"] == true));
    assert!(types.iter().any(|t| t["name"] == "birth"));
}

#[sqlx::test(migrations = "../db/migrations")]
async fn create_and_fetch_custom_type(pool: PgPool) {
    let dir = tempfile::tempdir().unwrap();
    let token = common::signup(pool.clone(), dir.path(), "alice").await;

    let app = common::build_test_app(pool.clone(), dir.path());
    let response = common::post_json(
        app,
        "/api/v1/event-types",
        &token,
        json!({
            "name": "hobby",
            "display_name": "Hobby",
            "color": "#ff8800",
            "icon": "puzzle",
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let body = common::body_json(response).await;
    let created = &body["data"];
    assert_eq!(created["name"], "hobby");
    assert_eq!(created["is_default"], false);
    let id = created["id"].as_i64().unwrap();

    let app = common::build_test_app(pool, dir.path());
    let response = common::get(app, &format!("/api/v1/event-types/{id}"), &token).await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = common::body_json(response).await;
    assert_eq!(body["data"]["color"], "#ff8800");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn create_rejects_bad_color_and_empty_name(pool: PgPool) {
    let dir = tempfile::tempdir().unwrap();
    let token = common::signup(pool.clone(), dir.path(), "alice").await;

    let app = common::build_test_app(pool.clone(), dir.path());
    let response = common::post_json(
        app,
        "/api/v1/event-types",
        &token,
        json!({ "name": "hobby", "display_name": "Hobby", "color": "orange" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let app = common::build_test_app(pool, dir.path());
    let response = common::post_json(
        app,
        "/api/v1/event-types",
        &token,
        json!({ "name": "  ", "display_name": "Hobby", "color": "#ff8800" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn create_rejects_duplicate_name(pool: PgPool) {
    let dir = tempfile::tempdir().unwrap();
    let token = common::signup(pool.clone(), dir.path(), "alice").await;

    for expected in [StatusCode::CREATED, StatusCode::CONFLICT] {
        let app = common::build_test_app(pool.clone(), dir.path());
        let response = common::post_json(
            app,
            "/api/v1/event-types",
            &token,
            json!({ "name": "hobby", "display_name": "Hobby", "color": "#ff8800" }),
        )
        .await;
        assert_eq!(response.status(), expected);
    }
}

#[sqlx::test(migrations = "../db/migrations")]
async fn defaults_are_immutable(pool: PgPool) {
    let dir = tempfile::tempdir().unwrap();
    let token = common::signup(pool.clone(), dir.path(), "alice").await;

    let app = common::build_test_app(pool.clone(), dir.path());
    let response = common::get(app, "/api/v1/event-types", &token).await;
    let body = common::body_json(response).await;
    let default_id = body["data"].as_array().unwrap()[0]["id"].as_i64().unwrap();

    let app = common::build_test_app(pool.clone(), dir.path());
    let response = common::put_json(
        app,
        &format!("/api/v1/event-types/{default_id}"),
        &token,
        json!({ "display_name": "Renamed" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);

    let app = common::build_test_app(pool, dir.path());
    let response = common::delete(app, &format!("/api/v1/event-types/{default_id}"), &token).await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn update_and_delete_custom_type(pool: PgPool) {
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
    let id = common::body_json(response).await["data"]["id"]
        .as_i64()
        .unwrap();

    let app = common::build_test_app(pool.clone(), dir.path());
    let response = common::put_json(
        app,
        &format!("/api/v1/event-types/{id}"),
        &token,
        json!({ "display_name": "Hobbies", "color": "#00ff00" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = common::body_json(response).await;
    assert_eq!(body["data"]["display_name"], "Hobbies");
    assert_eq!(body["data"]["color"], "#00ff00");

    let app = common::build_test_app(pool.clone(), dir.path());
    let response = common::delete(app, &format!("/api/v1/event-types/{id}"), &token).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let app = common::build_test_app(pool, dir.path());
    let response = common::get(app, &format!("/api/v1/event-types/{id}"), &token).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn delete_rejected_while_type_is_in_use(pool: PgPool) {
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

    let app = common::build_test_app(pool, dir.path());
    let response = common::delete(app, &format!("/api/v1/event-types/{type_id}"), &token).await;
    assert_eq!(response.status(), StatusCode::CONFLICT);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn custom_types_are_private_to_their_owner(pool: PgPool) {
    let dir = tempfile::tempdir().unwrap();
    let alice = common::signup(pool.clone(), dir.path(), "alice").await;
    let bob = common::signup(pool.clone(), dir.path(), "bob").await;

    let app = common::build_test_app(pool.clone(), dir.path());
    let response = common::post_json(
        app,
        "/api/v1/event-types",
        &alice,
        json!({ "name": "hobby", "display_name": "Hobby", "color": "#ff8800" }),
    )
    .await;
    let id = common::body_json(response).await["data"]["id"]
        .as_i64()
        .unwrap();

    let app = common::build_test_app(pool, dir.path());
    let response = common::get(app, &format!("/api/v1/event-types/{id}"), &bob).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
