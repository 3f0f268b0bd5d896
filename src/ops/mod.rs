pub mod completed;
pub mod list_ops;
