//! References to entities in the project → board → task hierarchy.
//!
//! An [`EntityRef`] names an entity together with its parent path. Its
//! `Display` output is the prefix of every not-found and conflict message
//! returned to clients, e.g. `board "todo" inside project "awesome"`.

use std::fmt;

/// A project, board or task identified by its full parent path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntityRef {
    Project {
        slug: String,
    },
    Board {
        slug: String,
        name: String,
    },
    /// `id` is kept as the raw path segment so that ids which do not parse
    /// as integers can still be reported.
    Task {
        slug: String,
        name: String,
        id: String,
    },
}

impl EntityRef {
    pub fn project(slug: impl Into<String>) -> Self {
        Self::Project { slug: slug.into() }
    }

    pub fn board(slug: impl Into<String>, name: impl Into<String>) -> Self {
        Self::Board {
            slug: slug.into(),
            name: name.into(),
        }
    }

    pub fn task(slug: impl Into<String>, name: impl Into<String>, id: impl ToString) -> Self {
        Self::Task {
            slug: slug.into(),
            name: name.into(),
            id: id.to_string(),
        }
    }

    /// Short entity kind, used as a structured logging field.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Project { .. } => "project",
            Self::Board { .. } => "board",
            Self::Task { .. } => "task",
        }
    }
}

impl fmt::Display for EntityRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Project { slug } => write!(f, "project \"{slug}\""),
            Self::Board { slug, name } => {
                write!(f, "board \"{name}\" inside project \"{slug}\"")
            }
            Self::Task { slug, name, id } => write!(
                f,
                "task id \"{id}\" from board \"{name}\" inside project \"{slug}\""
            ),
        }
    }
}
