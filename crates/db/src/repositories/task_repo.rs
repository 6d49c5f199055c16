//! Repository for the flat `tasks` index.

use sqlx::PgPool;
use taskboard_core::types::TaskId;

use crate::models::task::IndexedTask;

const COLUMNS: &str = "id_task, description, project_slug, board_name";

/// Provides CRUD operations for indexed tasks.
pub struct TaskRepo;

impl TaskRepo {
    /// Insert the indexed form of a task, returning the stored row.
    pub async fn insert(pool: &PgPool, task: &IndexedTask) -> Result<IndexedTask, sqlx::Error> {
        let query = format!(
            "INSERT INTO tasks (id_task, description, project_slug, board_name)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, IndexedTask>(&query)
            .bind(task.id_task)
            .bind(&task.description)
            .bind(&task.project_slug)
            .bind(&task.board_name)
            .fetch_one(pool)
            .await
    }

    /// Find a task by its full key.
    pub async fn find(
        pool: &PgPool,
        project_slug: &str,
        board_name: &str,
        id_task: TaskId,
    ) -> Result<Option<IndexedTask>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM tasks
             WHERE id_task = $1 AND project_slug = $2 AND board_name = $3"
        );
        sqlx::query_as::<_, IndexedTask>(&query)
            .bind(id_task)
            .bind(project_slug)
            .bind(board_name)
            .fetch_optional(pool)
            .await
    }

    /// List a board's indexed tasks in id order.
    pub async fn list_by_board(
        pool: &PgPool,
        project_slug: &str,
        board_name: &str,
    ) -> Result<Vec<IndexedTask>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM tasks
             WHERE project_slug = $1 AND board_name = $2
             ORDER BY id_task"
        );
        sqlx::query_as::<_, IndexedTask>(&query)
            .bind(project_slug)
            .bind(board_name)
            .fetch_all(pool)
            .await
    }

    /// Delete a task by its full key. Returns `true` if a row was removed.
    pub async fn delete(
        pool: &PgPool,
        project_slug: &str,
        board_name: &str,
        id_task: TaskId,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "DELETE FROM tasks WHERE id_task = $1 AND project_slug = $2 AND board_name = $3",
        )
        .bind(id_task)
        .bind(project_slug)
        .bind(board_name)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Delete every indexed task of one board. Returns the number of rows removed.
    pub async fn delete_by_board(
        pool: &PgPool,
        project_slug: &str,
        board_name: &str,
    ) -> Result<u64, sqlx::Error> {
        let result = sqlx::query("DELETE FROM tasks WHERE project_slug = $1 AND board_name = $2")
            .bind(project_slug)
            .bind(board_name)
            .execute(pool)
            .await?;
        Ok(result.rows_affected())
    }

    /// Delete every indexed task of one project. Returns the number of rows removed.
    pub async fn delete_by_project(pool: &PgPool, project_slug: &str) -> Result<u64, sqlx::Error> {
        let result = sqlx::query("DELETE FROM tasks WHERE project_slug = $1")
            .bind(project_slug)
            .execute(pool)
            .await?;
        Ok(result.rows_affected())
    }
}
