/// Task ids are assigned per board from the board's `_id_counter`.
pub type TaskId = i64;
