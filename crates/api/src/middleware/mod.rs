//! Request extractors that act as precondition gates.
//!
//! - [`lookup::FoundProject`] -- Requires the `{slug}` project to exist.
//! - [`lookup::FoundBoard`] -- Requires the project and its `{name}` board to exist.
//! - [`lookup::FoundTask`] -- Requires the project, board and `{id}` task to exist.

pub mod lookup;
