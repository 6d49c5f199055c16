pub mod health;
pub mod project;

use axum::routing::get;
use axum::Router;

use crate::handlers;
use crate::state::AppState;

/// Build the API route tree.
///
/// Route hierarchy:
///
/// ```text
/// /                                                hello world
///
/// /projects                                        create
/// /projects/{slug}                                 get, delete
/// /projects/{slug}/boards                          create board
/// /projects/{slug}/boards/{name}                   delete board
/// /projects/{slug}/boards/{name}/tasks             create task
/// /projects/{slug}/boards/{name}/tasks/{id}        delete task
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(handlers::root::hello))
        .nest("/projects", project::router())
}
