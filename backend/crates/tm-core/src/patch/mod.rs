pub mod field_kind;
pub mod field_spec;
pub mod field_state;
pub mod field_value;
pub mod reason_code;
pub mod update_request;
pub mod validation_issue;
