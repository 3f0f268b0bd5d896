use std::fmt;

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Opaque, immutable identity assigned when a todo is created.
///
/// Records written before ids existed get one on first load; it is persisted
/// on the next save of their list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TodoId(Uuid);

impl TodoId {
    pub fn new() -> Self {
        TodoId(Uuid::new_v4())
    }
}

impl Default for TodoId {
    fn default() -> Self {
        TodoId::new()
    }
}

impl fmt::Display for TodoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A single task
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Todo {
    pub id: TodoId,
    /// Display text, trimmed and capitalized on entry
    pub text: String,
    /// Notes, most recent first
    pub notes: Vec<String>,
    pub created_at: DateTime<Local>,
    /// Present iff the todo is completed
    pub completed_at: Option<DateTime<Local>>,
    /// Legacy completion note, carried through untouched
    pub complete_note: Option<String>,
}

impl Todo {
    pub fn new(text: String, created_at: DateTime<Local>) -> Self {
        Todo {
            id: TodoId::new(),
            text,
            notes: Vec::new(),
            created_at,
            completed_at: None,
            complete_note: None,
        }
    }

    pub fn is_completed(&self) -> bool {
        self.completed_at.is_some()
    }

    /// Structural identity used by stores that predate ids: same text and
    /// same creation instant.
    pub fn same_record(&self, other: &Todo) -> bool {
        self.text == other.text && self.created_at == other.created_at
    }
}
