pub mod entity_kind;
pub mod label;
pub mod task;
pub mod task_status;
pub mod user;
