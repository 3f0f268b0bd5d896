use crossterm::event::{KeyCode, KeyEvent};

use crate::model::ListKind;
use crate::ops::list_ops;
use crate::tui::app::{App, Mode, StatusKind};

use super::edit::finish_record_edit;

/// Confirm deletion of the todo under the cursor
pub(super) fn handle_confirm_delete(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('y') => {
            app.mode = Mode::Idle;
            delete_cursor_todo(app);
        }
        KeyCode::Char('n') | KeyCode::Esc => {
            app.mode = Mode::Idle;
            app.set_status(StatusKind::Error, "Deletion cancelled");
        }
        _ => {}
    }
}

fn delete_cursor_todo(app: &mut App) {
    let Some((kind, index)) = app.locate_cursor() else {
        return;
    };
    let Ok(todo) = list_ops::remove_at(app.lists.get_mut(kind), index) else {
        return;
    };
    tracing::info!(id = %todo.id, list = kind.store_suffix(), "deleted todo");
    if kind == ListKind::Completed {
        app.recompute_displayed();
    }
    app.clamp_cursor();
    app.reset_note_state();
    if app.save(&[kind]) {
        app.set_status(StatusKind::Info, "Todo deleted");
    }
}

/// Confirm deletion of the selected note
pub(super) fn handle_confirm_note_delete(app: &mut App, key: KeyEvent, index: usize) {
    match key.code {
        KeyCode::Char('y') => delete_note(app, index),
        KeyCode::Char('n') | KeyCode::Esc => {
            app.mode = Mode::NavigatingNotes { index };
            app.set_status(StatusKind::Error, "Deletion cancelled");
        }
        _ => {}
    }
}

fn delete_note(app: &mut App, index: usize) {
    let Some(todo) = app.cursor_todo_mut() else {
        app.mode = Mode::Idle;
        return;
    };
    if index < todo.notes.len() {
        todo.notes.remove(index);
    }
    let remaining = todo.notes.len();
    app.mode = if remaining == 0 {
        Mode::Idle
    } else {
        Mode::NavigatingNotes {
            index: list_ops::clamp_cursor(index, remaining),
        }
    };
    finish_record_edit(app, "Note deleted", StatusKind::Info);
}
