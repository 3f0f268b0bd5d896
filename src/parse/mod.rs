pub mod todo_parser;
pub mod todo_serializer;

pub use todo_parser::{parse_record, parse_records};
pub use todo_serializer::{serialize_record, serialize_records};
