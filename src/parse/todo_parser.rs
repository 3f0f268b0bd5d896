use chrono::{DateTime, Local};
use serde::Deserialize;
use serde_json::Value;

use crate::model::todo::{Todo, TodoId};

/// Every shape a stored record has had over time
#[derive(Deserialize)]
struct RawRecord {
    /// Any JSON value; one that is not a UUID is replaced with a fresh id
    #[serde(default)]
    id: Option<Value>,
    text: String,
    /// Current notes field: a list of strings, or a single legacy string
    #[serde(default)]
    updates: Option<Value>,
    /// Oldest notes field, same shapes as `updates`
    #[serde(default)]
    description: Option<Value>,
    #[serde(default)]
    created_at: Option<DateTime<Local>>,
    #[serde(default)]
    completed_at: Option<DateTime<Local>>,
    #[serde(default)]
    complete_note: Option<String>,
}

/// Normalize a legacy or current notes value into an ordered list.
fn notes_from_value(value: Value) -> Vec<String> {
    match value {
        Value::String(s) if s.is_empty() => Vec::new(),
        Value::String(s) => vec![s],
        Value::Array(items) => items
            .into_iter()
            .filter_map(|v| match v {
                Value::String(s) => Some(s),
                _ => None,
            })
            .collect(),
        _ => Vec::new(),
    }
}

/// Decode one structured record. Returns `None` if the line is not a JSON
/// object with at least a `text` string.
///
/// Records without a valid id get a fresh one; records without a creation time
/// are stamped with `now`.
pub fn parse_record(line: &str, now: DateTime<Local>) -> Option<Todo> {
    let raw: RawRecord = serde_json::from_str(line).ok()?;

    let notes = match (raw.updates, raw.description) {
        (Some(updates), _) if !updates.is_null() => notes_from_value(updates),
        (_, Some(description)) => notes_from_value(description),
        _ => Vec::new(),
    };

    Some(Todo {
        id: raw
            .id
            .and_then(|v| serde_json::from_value::<TodoId>(v).ok())
            .unwrap_or_default(),
        text: raw.text,
        notes,
        created_at: raw.created_at.unwrap_or(now),
        completed_at: raw.completed_at,
        complete_note: raw.complete_note.filter(|n| !n.is_empty()),
    })
}

/// Parse the full contents of a store.
///
/// Blank lines are skipped. Lines that do not decode as records become
/// plain-text todos (the whole trimmed line is the text). Returns the todos
/// in file order plus the 1-based line numbers that took the plain-text path.
pub fn parse_records(source: &str, now: DateTime<Local>) -> (Vec<Todo>, Vec<usize>) {
    let mut todos = Vec::new();
    let mut plain = Vec::new();

    for (i, line) in source.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        match parse_record(line, now) {
            Some(todo) => todos.push(todo),
            None => {
                plain.push(i + 1);
                todos.push(Todo::new(line.to_string(), now));
            }
        }
    }

    (todos, plain)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use pretty_assertions::assert_eq;

    fn now() -> DateTime<Local> {
        Local.with_ymd_and_hms(2025, 6, 1, 12, 0, 0).unwrap()
    }

    #[test]
    fn parse_current_shape() {
        let line = r#"{"text":"Ship it","updates":["second","first"],"created_at":"2025-05-14T09:30:00+00:00","completed_at":"2025-05-15T10:00:00+00:00","id":"6f1c5b0e-3a58-4c57-9a5e-1f0e6b7a9c21"}"#;
        let todo = parse_record(line, now()).unwrap();
        assert_eq!(todo.text, "Ship it");
        assert_eq!(todo.notes, vec!["second", "first"]);
        assert_eq!(
            todo.created_at,
            chrono::Utc.with_ymd_and_hms(2025, 5, 14, 9, 30, 0).unwrap()
        );
        assert!(todo.is_completed());
        assert_eq!(
            todo.id.to_string(),
            "6f1c5b0e-3a58-4c57-9a5e-1f0e6b7a9c21"
        );
    }

    #[test]
    fn legacy_single_string_note() {
        let line = r#"{"text":"Call Bob","updates":"left a voicemail","created_at":"2025-05-14T09:30:00Z"}"#;
        let todo = parse_record(line, now()).unwrap();
        assert_eq!(todo.notes, vec!["left a voicemail"]);
    }

    #[test]
    fn legacy_description_field() {
        let line = r#"{"text":"Call Bob","description":"old note","created_at":"2025-05-14T09:30:00Z"}"#;
        let todo = parse_record(line, now()).unwrap();
        assert_eq!(todo.notes, vec!["old note"]);

        let line = r#"{"text":"Call Bob","description":["a","b"],"created_at":"2025-05-14T09:30:00Z"}"#;
        let todo = parse_record(line, now()).unwrap();
        assert_eq!(todo.notes, vec!["a", "b"]);
    }

    #[test]
    fn updates_wins_over_description() {
        let line = r#"{"text":"x","updates":["new"],"description":"old","created_at":"2025-05-14T09:30:00Z"}"#;
        let todo = parse_record(line, now()).unwrap();
        assert_eq!(todo.notes, vec!["new"]);
    }

    #[test]
    fn empty_and_odd_notes_normalize() {
        let line = r#"{"text":"x","updates":"","created_at":"2025-05-14T09:30:00Z"}"#;
        assert!(parse_record(line, now()).unwrap().notes.is_empty());

        let line = r#"{"text":"x","updates":["a",3,null,"b"],"created_at":"2025-05-14T09:30:00Z"}"#;
        assert_eq!(parse_record(line, now()).unwrap().notes, vec!["a", "b"]);

        let line = r#"{"text":"x","updates":null,"created_at":"2025-05-14T09:30:00Z"}"#;
        assert!(parse_record(line, now()).unwrap().notes.is_empty());
    }

    #[test]
    fn null_completed_at_is_not_completed() {
        let line = r#"{"text":"x","created_at":"2025-05-14T09:30:00Z","completed_at":null}"#;
        assert!(!parse_record(line, now()).unwrap().is_completed());
    }

    #[test]
    fn missing_id_and_created_at_are_filled_in() {
        let a = parse_record(r#"{"text":"x"}"#, now()).unwrap();
        let b = parse_record(r#"{"text":"x"}"#, now()).unwrap();
        assert_eq!(a.created_at, now());
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn bad_id_is_replaced_without_losing_the_record() {
        let line = r#"{"id":"not-a-uuid","text":"Keep me","updates":["note"],"created_at":"2025-05-14T09:30:00Z"}"#;
        let todo = parse_record(line, now()).unwrap();
        assert_eq!(todo.text, "Keep me");
        assert_eq!(todo.notes, vec!["note"]);
        assert_eq!(
            todo.created_at,
            chrono::Utc.with_ymd_and_hms(2025, 5, 14, 9, 30, 0).unwrap()
        );

        let line = r#"{"id":42,"text":"Numbered"}"#;
        assert_eq!(parse_record(line, now()).unwrap().text, "Numbered");
    }

    #[test]
    fn non_record_lines_fall_back_to_plain_text() {
        assert!(parse_record("buy milk", now()).is_none());
        assert!(parse_record("[1,2,3]", now()).is_none());
        assert!(parse_record(r#"{"updates":["no text"]}"#, now()).is_none());
    }

    #[test]
    fn parse_records_mixes_shapes_and_skips_blanks() {
        let source = "\
{\"text\":\"Structured\",\"created_at\":\"2025-05-14T09:30:00Z\"}

  plain old line  
{broken json
";
        let (todos, plain) = parse_records(source, now());
        assert_eq!(todos.len(), 3);
        assert_eq!(todos[0].text, "Structured");
        assert_eq!(todos[1].text, "plain old line");
        assert_eq!(todos[1].created_at, now());
        assert!(todos[1].notes.is_empty());
        assert_eq!(todos[2].text, "{broken json");
        assert_eq!(plain, vec![3, 4]);
    }
}
