//! HTTP-level integration tests for the `/projects` endpoints.
//!
//! Uses Axum's tower::ServiceExt to send requests directly to the router
//! without an actual TCP listener.

mod common;

use axum::http::StatusCode;
use common::{body_json, build_test_app, create_project, delete, get, post_json};
use sqlx::PgPool;

#[sqlx::test(migrations = "../db/migrations")]
async fn test_root_says_hello(pool: PgPool) {
    let app = build_test_app(pool);
    let response = get(app, "/").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["message"], "hello world");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_create_project_returns_slug(pool: PgPool) {
    let app = build_test_app(pool);
    let response = post_json(app, "/projects", serde_json::json!({"name": "Awesome"})).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(
        json["project"],
        serde_json::json!({"slug": "awesome", "boards": []})
    );
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_create_project_with_same_slug_returns_400(pool: PgPool) {
    create_project(&pool, "Awesome").await;

    let app = build_test_app(pool);
    let response = post_json(app, "/projects", serde_json::json!({"name": "AWESOME"})).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = body_json(response).await;
    assert_eq!(json["error"], "project \"awesome\" already exists");
    assert_eq!(json["code"], "CONFLICT");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_create_project_without_name_is_rejected(pool: PgPool) {
    let app = build_test_app(pool);
    let response = post_json(app, "/projects", serde_json::json!({})).await;
    assert!(response.status().is_client_error());
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_get_project_returns_empty_boards(pool: PgPool) {
    create_project(&pool, "Awesome").await;

    let app = build_test_app(pool);
    let response = get(app, "/projects/awesome").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["project"]["slug"], "awesome");
    assert_eq!(json["project"]["boards"], serde_json::json!([]));
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_get_missing_project_returns_400(pool: PgPool) {
    let app = build_test_app(pool);
    let response = get(app, "/projects/nope").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = body_json(response).await;
    assert_eq!(json["error"], "project \"nope\" does not exist");
    assert_eq!(json["code"], "NOT_FOUND");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_delete_project_returns_it_then_404s(pool: PgPool) {
    create_project(&pool, "Awesome").await;

    let app = build_test_app(pool.clone());
    let response = delete(app, "/projects/awesome").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["project"]["slug"], "awesome");

    let app = build_test_app(pool);
    let response = get(app, "/projects/awesome").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_delete_missing_project_returns_400(pool: PgPool) {
    let app = build_test_app(pool);
    let response = delete(app, "/projects/nope").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_project_can_be_recreated_after_delete(pool: PgPool) {
    create_project(&pool, "Awesome").await;

    let app = build_test_app(pool.clone());
    delete(app, "/projects/awesome").await;

    let json = create_project(&pool, "Awesome").await;
    assert_eq!(json["project"]["slug"], "awesome");
}
