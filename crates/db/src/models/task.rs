//! Task models: the minimal form embedded in boards and the indexed form
//! stored one row per task in the `tasks` table.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use taskboard_core::types::TaskId;

/// Minimal task form, as embedded in `Board::tasks` and returned to clients.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    pub id_task: TaskId,
    pub description: String,
}

/// A row from the flat `tasks` index.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct IndexedTask {
    pub id_task: TaskId,
    pub description: String,
    pub project_slug: String,
    pub board_name: String,
}

impl IndexedTask {
    pub fn new(task: &Task, project_slug: &str, board_name: &str) -> Self {
        Self {
            id_task: task.id_task,
            description: task.description.clone(),
            project_slug: project_slug.to_string(),
            board_name: board_name.to_string(),
        }
    }
}

/// Strips the denormalized parent path.
impl From<IndexedTask> for Task {
    fn from(indexed: IndexedTask) -> Self {
        Self {
            id_task: indexed.id_task,
            description: indexed.description,
        }
    }
}

/// DTO for creating a task inside a board.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateTask {
    pub description: String,
}
