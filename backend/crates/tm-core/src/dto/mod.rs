pub mod label_update;
pub mod task_status_update;
pub mod task_update;
pub mod user_update;
