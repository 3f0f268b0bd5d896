use chrono::{DateTime, Local};
use serde::Serialize;

use crate::model::todo::{Todo, TodoId};

/// On-disk shape of a record. Field order is the order written.
#[derive(Serialize)]
struct RecordOut<'a> {
    text: &'a str,
    #[serde(skip_serializing_if = "no_notes")]
    updates: &'a [String],
    created_at: &'a DateTime<Local>,
    #[serde(skip_serializing_if = "Option::is_none")]
    completed_at: Option<&'a DateTime<Local>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    complete_note: Option<&'a str>,
    id: TodoId,
}

fn no_notes(notes: &&[String]) -> bool {
    notes.is_empty()
}

/// Encode a todo as a single JSON line (no trailing newline).
pub fn serialize_record(todo: &Todo) -> Result<String, serde_json::Error> {
    serde_json::to_string(&RecordOut {
        text: &todo.text,
        updates: &todo.notes,
        created_at: &todo.created_at,
        completed_at: todo.completed_at.as_ref(),
        complete_note: todo.complete_note.as_deref(),
        id: todo.id,
    })
}

/// Encode a whole list, one record per line, each line newline-terminated.
pub fn serialize_records(todos: &[Todo]) -> Result<String, serde_json::Error> {
    let mut out = String::new();
    for todo in todos {
        out.push_str(&serialize_record(todo)?);
        out.push('\n');
    }
    Ok(out)
}
