#![allow(dead_code)]

use axum::body::Body;
use axum::http::{Method, Request};
use axum::response::Response;
use axum::Router;
use http_body_util::BodyExt;
use sqlx::PgPool;
use tower::ServiceExt;

use taskboard_api::config::ServerConfig;
use taskboard_api::router::build_app_router;
use taskboard_api::state::AppState;

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
    }
}

/// Build the full application router, with the production middleware
/// stack, over the given database pool.
pub fn build_test_app(pool: PgPool) -> Router {
    build_app_router(AppState { pool }, &test_config())
}

pub async fn get(app: Router, uri: &str) -> Response {
    send(app, Method::GET, uri, Body::empty()).await
}

pub async fn delete(app: Router, uri: &str) -> Response {
    send(app, Method::DELETE, uri, Body::empty()).await
}

pub async fn post_json(app: Router, uri: &str, json: serde_json::Value) -> Response {
    send(app, Method::POST, uri, Body::from(json.to_string())).await
}

async fn send(app: Router, method: Method, uri: &str, body: Body) -> Response {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(body)
        .unwrap();
    app.oneshot(request).await.unwrap()
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

// ---------------------------------------------------------------------------
// Fixtures over HTTP
// ---------------------------------------------------------------------------

/// POST /projects and return the response body.
pub async fn create_project(pool: &PgPool, name: &str) -> serde_json::Value {
    let app = build_test_app(pool.clone());
    body_json(post_json(app, "/projects", serde_json::json!({ "name": name })).await).await
}

/// POST /projects/{slug}/boards and return the response body.
pub async fn create_board(pool: &PgPool, slug: &str, name: &str) -> serde_json::Value {
    let app = build_test_app(pool.clone());
    let uri = format!("/projects/{slug}/boards");
    body_json(post_json(app, &uri, serde_json::json!({ "name": name })).await).await
}

/// POST /projects/{slug}/boards/{name}/tasks and return the response body.
pub async fn create_task(
    pool: &PgPool,
    slug: &str,
    board: &str,
    description: &str,
) -> serde_json::Value {
    let app = build_test_app(pool.clone());
    let uri = format!("/projects/{slug}/boards/{board}/tasks");
    body_json(post_json(app, &uri, serde_json::json!({ "description": description })).await).await
}
