pub mod board;
pub mod project;
pub mod root;
pub mod task;
