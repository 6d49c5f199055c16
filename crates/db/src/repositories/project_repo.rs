//! Repository for the `projects` table and the board/task documents
//! embedded in it.
//!
//! Every mutation is a single filtered `UPDATE` (or `INSERT`) over one row,
//! so the existence/uniqueness check and the write happen atomically.

use sqlx::types::Json;
use sqlx::PgPool;
use taskboard_core::types::TaskId;

use crate::models::board::Board;
use crate::models::project::Project;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "slug, boards";

/// Filter matching rows whose `boards` array holds a board named `$2`.
const HAS_BOARD: &str = "boards @> jsonb_build_array(jsonb_build_object('name', $2::text))";

/// Provides operations over projects and their embedded boards and tasks.
pub struct ProjectRepo;

impl ProjectRepo {
    /// Insert a new project with no boards.
    ///
    /// Returns `None` if a project with the same slug already exists.
    pub async fn create(pool: &PgPool, slug: &str) -> Result<Option<Project>, sqlx::Error> {
        let query = format!(
            "INSERT INTO projects (slug, boards)
             VALUES ($1, '[]'::jsonb)
             ON CONFLICT (slug) DO NOTHING
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Project>(&query)
            .bind(slug)
            .fetch_optional(pool)
            .await
    }

    /// Find a project by its slug.
    pub async fn find_by_slug(pool: &PgPool, slug: &str) -> Result<Option<Project>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM projects WHERE slug = $1");
        sqlx::query_as::<_, Project>(&query)
            .bind(slug)
            .fetch_optional(pool)
            .await
    }

    /// Find a project by slug, only if it contains a board named `board_name`.
    pub async fn find_with_board(
        pool: &PgPool,
        slug: &str,
        board_name: &str,
    ) -> Result<Option<Project>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM projects WHERE slug = $1 AND {HAS_BOARD}");
        sqlx::query_as::<_, Project>(&query)
            .bind(slug)
            .bind(board_name)
            .fetch_optional(pool)
            .await
    }

    /// Delete a project and everything embedded in it. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, slug: &str) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM projects WHERE slug = $1")
            .bind(slug)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Append `board` to the project's boards unless a board with the same
    /// name is already there.
    ///
    /// Returns `false` if nothing was written: either the project does not
    /// exist or the board name is taken.
    pub async fn add_board(pool: &PgPool, slug: &str, board: &Board) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE projects
             SET boards = boards || jsonb_build_array($3::jsonb)
             WHERE slug = $1
               AND NOT boards @> jsonb_build_array(jsonb_build_object('name', $2::text))",
        )
        .bind(slug)
        .bind(&board.name)
        .bind(Json(board))
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Pull the board named `board_name` out of the project. Returns `true`
    /// if the project was modified.
    pub async fn remove_board(
        pool: &PgPool,
        slug: &str,
        board_name: &str,
    ) -> Result<bool, sqlx::Error> {
        let query = format!(
            "UPDATE projects
             SET boards = COALESCE(
                 (SELECT jsonb_agg(b ORDER BY ord)
                  FROM jsonb_array_elements(boards) WITH ORDINALITY AS e(b, ord)
                  WHERE b->>'name' <> $2),
                 '[]'::jsonb)
             WHERE slug = $1 AND {HAS_BOARD}"
        );
        let result = sqlx::query(&query)
            .bind(slug)
            .bind(board_name)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Push a new task into a board and bump the board's `_id_counter`.
    ///
    /// The task's id is the counter value before the increment, read inside
    /// the same statement. Returns the assigned id, or `None` if no project
    /// `slug` with a board `board_name` exists.
    pub async fn push_task(
        pool: &PgPool,
        slug: &str,
        board_name: &str,
        description: &str,
    ) -> Result<Option<TaskId>, sqlx::Error> {
        let query = format!(
            "UPDATE projects
             SET boards = (
                 SELECT jsonb_agg(
                     CASE WHEN b->>'name' = $2 THEN
                         jsonb_set(
                             jsonb_set(
                                 b,
                                 '{{tasks}}',
                                 (b->'tasks') || jsonb_build_array(jsonb_build_object(
                                     'id_task', (b->>'_id_counter')::bigint,
                                     'description', $3::text))),
                             '{{_id_counter}}',
                             to_jsonb((b->>'_id_counter')::bigint + 1))
                     ELSE b END
                     ORDER BY ord)
                 FROM jsonb_array_elements(boards) WITH ORDINALITY AS e(b, ord))
             WHERE slug = $1 AND {HAS_BOARD}
             RETURNING (
                 SELECT (b->>'_id_counter')::bigint - 1
                 FROM jsonb_array_elements(boards) AS e(b)
                 WHERE b->>'name' = $2)"
        );
        let row: Option<(TaskId,)> = sqlx::query_as(&query)
            .bind(slug)
            .bind(board_name)
            .bind(description)
            .fetch_optional(pool)
            .await?;
        Ok(row.map(|(id,)| id))
    }

    /// Pull the task `id_task` out of board `board_name`. Returns `true` if
    /// the project was modified.
    pub async fn remove_task(
        pool: &PgPool,
        slug: &str,
        board_name: &str,
        id_task: TaskId,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE projects
             SET boards = (
                 SELECT jsonb_agg(
                     CASE WHEN b->>'name' = $2 THEN
                         jsonb_set(b, '{tasks}', COALESCE(
                             (SELECT jsonb_agg(t ORDER BY task_ord)
                              FROM jsonb_array_elements(b->'tasks')
                                   WITH ORDINALITY AS te(t, task_ord)
                              WHERE (t->>'id_task')::bigint <> $3),
                             '[]'::jsonb))
                     ELSE b END
                     ORDER BY ord)
                 FROM jsonb_array_elements(boards) WITH ORDINALITY AS e(b, ord))
             WHERE slug = $1
               AND boards @> jsonb_build_array(jsonb_build_object(
                   'name', $2::text,
                   'tasks', jsonb_build_array(jsonb_build_object('id_task', $3::bigint))))",
        )
        .bind(slug)
        .bind(board_name)
        .bind(id_task)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }
}
