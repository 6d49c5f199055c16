//! Domain model structs and DTOs.
//!
//! - [`project::Project`] is a row of `projects`; its boards are a JSONB document.
//! - [`board::Board`] and [`task::Task`] only exist embedded in that document.
//! - [`task::IndexedTask`] is a row of the flat `tasks` index.

pub mod board;
pub mod project;
pub mod task;
