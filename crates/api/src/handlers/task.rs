//! Handlers for tasks, nested under `/projects/{slug}/boards/{name}/tasks`.

use axum::extract::State;
use axum::Json;
use taskboard_db::models::task::CreateTask;
use taskboard_db::services::HierarchyService;

use crate::error::{AppError, AppResult};
use crate::middleware::lookup::{FoundBoard, FoundTask};
use crate::response::TaskResponse;
use crate::state::AppState;

/// POST /projects/{slug}/boards/{name}/tasks
pub async fn create(
    State(state): State<AppState>,
    FoundBoard { project, board }: FoundBoard,
    Json(input): Json<CreateTask>,
) -> AppResult<Json<TaskResponse>> {
    let task =
        HierarchyService::create_task(&state.pool, &project.slug, &board.name, &input.description)
            .await
            .map_err(|e| {
                AppError::dual_write(
                    e,
                    format!(
                        "couldn't create task \"{}\" in board \"{}\" from project \"{}\"",
                        input.description, board.name, project.slug
                    ),
                )
            })?;

    Ok(Json(TaskResponse { task }))
}

/// DELETE /projects/{slug}/boards/{name}/tasks/{id}
///
/// Responds with the task as it was before deletion.
pub async fn delete(
    State(state): State<AppState>,
    FoundTask {
        project,
        board,
        task,
    }: FoundTask,
) -> AppResult<Json<TaskResponse>> {
    HierarchyService::delete_task(&state.pool, &project.slug, &board.name, task.id_task)
        .await
        .map_err(|e| {
            AppError::dual_write(
                e,
                format!(
                    "couldn't delete task with id \"{}\" inside board \"{}\" from project \"{}\"",
                    task.id_task, board.name, project.slug
                ),
            )
        })?;

    Ok(Json(TaskResponse { task }))
}
