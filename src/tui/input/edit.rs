use chrono::{DateTime, Local};
use crossterm::event::{KeyCode, KeyEvent};

use crate::model::{ListKind, Todo};
use crate::ops::list_ops;
use crate::tui::app::{App, Mode, StatusKind};

/// Text modes (adding, renaming, editing a note)
pub(super) fn handle_text(app: &mut App, key: KeyEvent, now: DateTime<Local>) {
    match key.code {
        KeyCode::Enter => commit_text(app, now),
        KeyCode::Esc => {
            app.mode = mode_after_text(&app.mode);
            app.set_status(StatusKind::Error, "Cancelled");
        }
        _ => {
            if let Some(input) = app.mode.input_mut() {
                input.handle_key(key);
            }
        }
    }
}

/// Editing an existing note returns to note navigation on that note
fn mode_after_text(mode: &Mode) -> Mode {
    match mode {
        Mode::EditingNote {
            index: Some(index),
            ..
        } => Mode::NavigatingNotes { index: *index },
        _ => Mode::Idle,
    }
}

fn commit_text(app: &mut App, now: DateTime<Local>) {
    let next = mode_after_text(&app.mode);
    let mode = std::mem::replace(&mut app.mode, next);

    match mode {
        Mode::Adding { position, input } => {
            let kind = app.view;
            let Some(text) = input.committed_text() else {
                return;
            };
            if !kind.is_ordered() {
                return;
            }
            let todo = Todo::new(text, now);
            tracing::debug!(id = %todo.id, list = kind.store_suffix(), "added todo");
            list_ops::insert(app.lists.get_mut(kind), todo, position);
            if app.save(&[kind]) {
                app.set_status(StatusKind::Success, "Todo added!");
            }
        }
        Mode::Renaming { input } => {
            let Some(text) = input.committed_text() else {
                return;
            };
            let Some(todo) = app.cursor_todo_mut() else {
                return;
            };
            todo.text = text;
            finish_record_edit(app, "Todo renamed!", StatusKind::Success);
        }
        Mode::EditingNote { index, input } => {
            let Some(note) = input.trimmed().map(str::to_string) else {
                return;
            };
            let Some(todo) = app.cursor_todo_mut() else {
                return;
            };
            match index {
                Some(i) if i < todo.notes.len() => todo.notes[i] = note,
                _ => todo.notes.insert(0, note),
            }
            app.show_note = true;
            finish_record_edit(app, "Note saved!", StatusKind::Info);
        }
        other => app.mode = other,
    }
}

/// Refresh the projection if the edited record is a completed one, then save
/// the list the cursor points into.
pub(super) fn finish_record_edit(app: &mut App, message: &str, kind: StatusKind) {
    let list = app.view;
    if list == ListKind::Completed {
        app.recompute_displayed();
    }
    if app.save(&[list]) {
        app.set_status(kind, message);
    }
}
