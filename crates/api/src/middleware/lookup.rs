//! Existence gates for the project → board → task hierarchy.
//!
//! Each gate is an extractor that resolves an entity from the path
//! parameters or rejects the request with a not-found error. Gates chain:
//! [`FoundBoard`] runs [`FoundProject`] first and [`FoundTask`] runs
//! [`FoundBoard`] first, so a handler taking a deeper gate never runs unless
//! every parent exists.
//!
//! ```ignore
//! async fn delete(State(state): State<AppState>, found: FoundTask) -> AppResult<Json<TaskResponse>> {
//!     // project, board and task are all guaranteed to exist here
//! }
//! ```

use axum::extract::{FromRequestParts, Path};
use axum::http::request::Parts;
use serde::Deserialize;
use taskboard_core::entity::EntityRef;
use taskboard_core::error::CoreError;
use taskboard_core::types::TaskId;
use taskboard_db::models::board::Board;
use taskboard_db::models::project::Project;
use taskboard_db::models::task::Task;
use taskboard_db::repositories::{ProjectRepo, TaskRepo};

use crate::error::AppError;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
struct ProjectParams {
    slug: String,
}

#[derive(Debug, Deserialize)]
struct BoardParams {
    slug: String,
    name: String,
}

#[derive(Debug, Deserialize)]
struct TaskParams {
    slug: String,
    name: String,
    id: String,
}

/// The project named by the `{slug}` path parameter.
#[derive(Debug, Clone)]
pub struct FoundProject(pub Project);

/// The board named by `{slug}`/`{name}`, along with its project.
#[derive(Debug, Clone)]
pub struct FoundBoard {
    pub project: Project,
    pub board: Board,
}

/// The task named by `{slug}`/`{name}`/`{id}`, in minimal form, along with
/// its project and board.
#[derive(Debug, Clone)]
pub struct FoundTask {
    pub project: Project,
    pub board: Board,
    pub task: Task,
}

impl FromRequestParts<AppState> for FoundProject {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let ProjectParams { slug } = path_params(parts, state).await?;

        let project = ProjectRepo::find_by_slug(&state.pool, &slug)
            .await?
            .ok_or_else(|| not_found(EntityRef::project(slug)))?;

        Ok(FoundProject(project))
    }
}

impl FromRequestParts<AppState> for FoundBoard {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        FoundProject::from_request_parts(parts, state).await?;
        let BoardParams { slug, name } = path_params(parts, state).await?;

        let project = ProjectRepo::find_with_board(&state.pool, &slug, &name).await?;
        let board = project.as_ref().and_then(|p| p.board(&name)).cloned();

        match (project, board) {
            (Some(project), Some(board)) => Ok(FoundBoard { project, board }),
            _ => Err(not_found(EntityRef::board(slug, name))),
        }
    }
}

impl FromRequestParts<AppState> for FoundTask {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let FoundBoard { project, board } = FoundBoard::from_request_parts(parts, state).await?;
        let TaskParams { slug, name, id } = path_params(parts, state).await?;

        // An id that is not an integer cannot name an existing task.
        let Ok(id_task) = id.trim().parse::<TaskId>() else {
            return Err(not_found(EntityRef::task(slug, name, id)));
        };

        let task = TaskRepo::find(&state.pool, &slug, &name, id_task)
            .await?
            .ok_or_else(|| not_found(EntityRef::task(slug, name, id_task)))?;

        Ok(FoundTask {
            project,
            board,
            task: task.into(),
        })
    }
}

async fn path_params<T>(parts: &mut Parts, state: &AppState) -> Result<T, AppError>
where
    T: serde::de::DeserializeOwned + Send,
{
    let Path(params) = Path::<T>::from_request_parts(parts, state)
        .await
        .map_err(|rejection| AppError::BadRequest(rejection.body_text()))?;
    Ok(params)
}

fn not_found(entity: EntityRef) -> AppError {
    tracing::debug!(entity = entity.kind(), %entity, "Lookup gate rejected request");
    AppError::Core(CoreError::NotFound(entity))
}
