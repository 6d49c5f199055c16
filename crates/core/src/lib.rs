//! Domain primitives shared by the database and HTTP layers.
//!
//! Nothing in this crate performs I/O.

pub mod entity;
pub mod error;
pub mod slug;
pub mod types;
