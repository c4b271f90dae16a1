pub mod entity;
pub mod field_change;
pub mod merge;
