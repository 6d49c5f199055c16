//! Board model (embedded in a project document) and DTOs.

use serde::{Deserialize, Serialize};
use taskboard_core::types::TaskId;

use crate::models::task::Task;

/// A board embedded in `projects.boards`.
///
/// `id_counter` is the id the next task created in this board receives. It
/// only ever grows, so ids are never reused after a task is deleted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Board {
    pub name: String,
    pub tasks: Vec<Task>,
    #[serde(rename = "_id_counter")]
    pub id_counter: TaskId,
}

impl Board {
    /// A fresh board with no tasks and a counter at 0.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            tasks: Vec::new(),
            id_counter: 0,
        }
    }

    pub fn task(&self, id_task: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|task| task.id_task == id_task)
    }
}

/// DTO for creating a board inside a project.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateBoard {
    pub name: String,
}
