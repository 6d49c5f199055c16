//! Operations that write both task views.
//!
//! The project document (`projects.boards[].tasks[]`) is the authoritative
//! record; the `tasks` table is a denormalized index of it. Each operation
//! here issues the document write first and the index write second, as two
//! independent statements. There is no transaction spanning them and no
//! compensation: if the second write fails, the first stays applied and the
//! two views disagree until repaired by hand. [`DualWriteError`] reports
//! which side failed so callers can tell a clean failure from a partial one.

use sqlx::PgPool;
use taskboard_core::types::TaskId;

use crate::models::task::{IndexedTask, Task};
use crate::repositories::{ProjectRepo, TaskRepo};

/// Failure of a single write.
#[derive(Debug, thiserror::Error)]
pub enum WriteError {
    #[error(transparent)]
    Database(#[from] sqlx::Error),

    /// The statement ran but matched nothing.
    #[error("no rows affected")]
    NoEffect,
}

/// Failure of a two-step write across the project document and the task index.
#[derive(Debug, thiserror::Error)]
pub enum DualWriteError {
    /// The project document write failed. Nothing was written.
    #[error("project document write failed: {0}")]
    Document(#[source] WriteError),

    /// The project document was written but the task index was not.
    #[error("task index write failed after the project document was written: {0}")]
    Index(#[source] WriteError),
}

impl DualWriteError {
    /// `true` when the first write landed and the two views now disagree.
    pub fn is_partial(&self) -> bool {
        matches!(self, Self::Index(_))
    }
}

/// Issues the paired writes that keep the project documents and the task
/// index in sync.
pub struct HierarchyService;

impl HierarchyService {
    /// Create a task in board `board_name` of project `slug`.
    ///
    /// The id is taken from the board's `_id_counter` by the same statement
    /// that pushes the task and increments the counter.
    pub async fn create_task(
        pool: &PgPool,
        slug: &str,
        board_name: &str,
        description: &str,
    ) -> Result<Task, DualWriteError> {
        let id_task = ProjectRepo::push_task(pool, slug, board_name, description)
            .await
            .map_err(|e| DualWriteError::Document(e.into()))?
            .ok_or(DualWriteError::Document(WriteError::NoEffect))?;

        let task = Task {
            id_task,
            description: description.to_string(),
        };

        TaskRepo::insert(pool, &IndexedTask::new(&task, slug, board_name))
            .await
            .map_err(|e| DualWriteError::Index(e.into()))?;

        tracing::info!(project = %slug, board = %board_name, id_task, "Task created");
        Ok(task)
    }

    /// Delete task `id_task` from board `board_name` of project `slug`.
    pub async fn delete_task(
        pool: &PgPool,
        slug: &str,
        board_name: &str,
        id_task: TaskId,
    ) -> Result<(), DualWriteError> {
        let pulled = ProjectRepo::remove_task(pool, slug, board_name, id_task)
            .await
            .map_err(|e| DualWriteError::Document(e.into()))?;
        if !pulled {
            return Err(DualWriteError::Document(WriteError::NoEffect));
        }

        let removed = TaskRepo::delete(pool, slug, board_name, id_task)
            .await
            .map_err(|e| DualWriteError::Index(e.into()))?;
        if !removed {
            return Err(DualWriteError::Index(WriteError::NoEffect));
        }

        tracing::info!(project = %slug, board = %board_name, id_task, "Task deleted");
        Ok(())
    }

    /// Delete board `board_name` from project `slug`, then drop the board's
    /// indexed tasks. Returns the number of index rows removed.
    pub async fn delete_board(
        pool: &PgPool,
        slug: &str,
        board_name: &str,
    ) -> Result<u64, DualWriteError> {
        let pulled = ProjectRepo::remove_board(pool, slug, board_name)
            .await
            .map_err(|e| DualWriteError::Document(e.into()))?;
        if !pulled {
            return Err(DualWriteError::Document(WriteError::NoEffect));
        }

        let removed = TaskRepo::delete_by_board(pool, slug, board_name)
            .await
            .map_err(|e| DualWriteError::Index(e.into()))?;

        tracing::info!(project = %slug, board = %board_name, removed, "Board deleted");
        Ok(removed)
    }

    /// Delete project `slug`, then drop all of its indexed tasks. Returns the
    /// number of index rows removed.
    pub async fn delete_project(pool: &PgPool, slug: &str) -> Result<u64, DualWriteError> {
        let deleted = ProjectRepo::delete(pool, slug)
            .await
            .map_err(|e| DualWriteError::Document(e.into()))?;
        if !deleted {
            return Err(DualWriteError::Document(WriteError::NoEffect));
        }

        let removed = TaskRepo::delete_by_project(pool, slug)
            .await
            .map_err(|e| DualWriteError::Index(e.into()))?;

        tracing::info!(project = %slug, removed, "Project deleted");
        Ok(removed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn document_failure_is_not_partial() {
        let err = DualWriteError::Document(WriteError::NoEffect);
        assert!(!err.is_partial());
        assert_eq!(err.to_string(), "project document write failed: no rows affected");
    }

    #[test]
    fn index_failure_is_partial() {
        let err = DualWriteError::Index(WriteError::Database(sqlx::Error::RowNotFound));
        assert!(err.is_partial());
    }
}
