//! Response envelope types for API handlers.
//!
//! Every success body wraps its payload in a single key named after the
//! entity: `{ "project": ... }`, `{ "board": ... }`, `{ "task": ... }`.

use serde::Serialize;
use taskboard_db::models::board::Board;
use taskboard_db::models::project::Project;
use taskboard_db::models::task::Task;

/// `{ "message": ... }`, returned by `GET /`.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}

/// `{ "project": { "slug": ..., "boards": [...] } }`
#[derive(Debug, Serialize)]
pub struct ProjectResponse {
    pub project: Project,
}

/// `{ "board": { "name": ..., "tasks": [...], "_id_counter": ... } }`
#[derive(Debug, Serialize)]
pub struct BoardResponse {
    pub board: Board,
}

/// `{ "task": { "id_task": ..., "description": ... } }`
#[derive(Debug, Serialize)]
pub struct TaskResponse {
    pub task: Task,
}
