//! Route definitions for the `/projects` resource.
//!
//! Also nests board and task routes under `/projects/{slug}/...`.

use axum::routing::{delete, get, post};
use axum::Router;

use crate::handlers::{board, project, task};
use crate::state::AppState;

/// Routes mounted at `/projects`.
///
/// ```text
/// POST   /                                   -> project::create
/// GET    /{slug}                             -> project::get_by_slug
/// DELETE /{slug}                             -> project::delete
///
/// POST   /{slug}/boards                      -> board::create
/// DELETE /{slug}/boards/{name}               -> board::delete
///
/// POST   /{slug}/boards/{name}/tasks         -> task::create
/// DELETE /{slug}/boards/{name}/tasks/{id}    -> task::delete
/// ```
pub fn router() -> Router<AppState> {
    let task_routes = Router::new()
        .route("/", post(task::create))
        .route("/{id}", delete(task::delete));

    let board_routes = Router::new()
        .route("/", post(board::create))
        .route("/{name}", delete(board::delete))
        .nest("/{name}/tasks", task_routes);

    Router::new()
        .route("/", post(project::create))
        .route("/{slug}", get(project::get_by_slug).delete(project::delete))
        .nest("/{slug}/boards", board_routes)
}
