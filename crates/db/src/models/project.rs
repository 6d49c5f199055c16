//! Project entity model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::models::board::Board;

/// A project row from the `projects` table, with its boards decoded.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize, Deserialize)]
pub struct Project {
    pub slug: String,
    #[sqlx(json)]
    pub boards: Vec<Board>,
}

impl Project {
    /// Find an embedded board by name.
    pub fn board(&self, name: &str) -> Option<&Board> {
        self.boards.iter().find(|board| board.name == name)
    }
}

/// DTO for creating a new project. The slug is derived from `name`.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateProject {
    pub name: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn project_with_boards(names: &[&str]) -> Project {
        Project {
            slug: "awesome".into(),
            boards: names.iter().map(|name| Board::new(*name)).collect(),
        }
    }

    #[test]
    fn board_lookup_by_name() {
        let project = project_with_boards(&["todo", "doing", "done"]);
        assert_eq!(project.board("doing").map(|b| b.name.as_str()), Some("doing"));
    }

    #[test]
    fn board_lookup_is_case_sensitive() {
        let project = project_with_boards(&["todo"]);
        assert!(project.board("TODO").is_none());
    }

    #[test]
    fn serializes_with_empty_boards() {
        let project = project_with_boards(&[]);
        let json = serde_json::to_value(&project).unwrap();
        assert_eq!(json, serde_json::json!({"slug": "awesome", "boards": []}));
    }
}
