//! Handlers for boards, nested under `/projects/{slug}/boards`.

use axum::extract::State;
use axum::Json;
use taskboard_core::entity::EntityRef;
use taskboard_core::error::CoreError;
use taskboard_db::models::board::{Board, CreateBoard};
use taskboard_db::repositories::ProjectRepo;
use taskboard_db::services::HierarchyService;

use crate::error::{AppError, AppResult};
use crate::middleware::lookup::{FoundBoard, FoundProject};
use crate::response::BoardResponse;
use crate::state::AppState;

/// POST /projects/{slug}/boards
///
/// The name check and the append are one statement, so a name taken by a
/// concurrent request is still reported as a conflict.
pub async fn create(
    State(state): State<AppState>,
    FoundProject(project): FoundProject,
    Json(input): Json<CreateBoard>,
) -> AppResult<Json<BoardResponse>> {
    let board = Board::new(input.name);

    let added = ProjectRepo::add_board(&state.pool, &project.slug, &board).await?;
    if !added {
        return Err(AppError::Core(CoreError::Conflict(EntityRef::board(
            project.slug,
            board.name,
        ))));
    }

    tracing::info!(project = %project.slug, board = %board.name, "Board created");
    Ok(Json(BoardResponse { board }))
}

/// DELETE /projects/{slug}/boards/{name}
///
/// Responds with the board as it was before deletion.
pub async fn delete(
    State(state): State<AppState>,
    FoundBoard { project, board }: FoundBoard,
) -> AppResult<Json<BoardResponse>> {
    HierarchyService::delete_board(&state.pool, &project.slug, &board.name)
        .await
        .map_err(|e| {
            AppError::dual_write(
                e,
                format!(
                    "couldn't delete board \"{}\" from project \"{}\"",
                    board.name, project.slug
                ),
            )
        })?;

    Ok(Json(BoardResponse { board }))
}
