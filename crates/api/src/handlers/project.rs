//! Handlers for the `/projects` resource.

use axum::extract::State;
use axum::Json;
use taskboard_core::entity::EntityRef;
use taskboard_core::error::CoreError;
use taskboard_core::slug::project_slug;
use taskboard_db::models::project::CreateProject;
use taskboard_db::repositories::ProjectRepo;
use taskboard_db::services::HierarchyService;

use crate::error::{AppError, AppResult};
use crate::middleware::lookup::FoundProject;
use crate::response::ProjectResponse;
use crate::state::AppState;

/// POST /projects
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateProject>,
) -> AppResult<Json<ProjectResponse>> {
    let slug = project_slug(&input.name);

    let project = ProjectRepo::create(&state.pool, &slug)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::Conflict(EntityRef::project(&slug))))?;

    tracing::info!(project = %project.slug, "Project created");
    Ok(Json(ProjectResponse { project }))
}

/// GET /projects/{slug}
pub async fn get_by_slug(FoundProject(project): FoundProject) -> Json<ProjectResponse> {
    Json(ProjectResponse { project })
}

/// DELETE /projects/{slug}
///
/// Responds with the project as it was before deletion.
pub async fn delete(
    State(state): State<AppState>,
    FoundProject(project): FoundProject,
) -> AppResult<Json<ProjectResponse>> {
    HierarchyService::delete_project(&state.pool, &project.slug)
        .await
        .map_err(|e| {
            AppError::dual_write(e, format!("couldn't delete project \"{}\"", project.slug))
        })?;

    Ok(Json(ProjectResponse { project }))
}
