use chrono::{DateTime, Local};
use crossterm::event::{KeyCode, KeyEvent};

use crate::io::export::export_markdown;
use crate::model::ListKind;
use crate::ops::list_ops::{self, InsertPosition};
use crate::tui::app::{App, Mode, StatusKind};
use crate::tui::text_input::TextInput;

use super::common::{is_chord, move_cursor_to};

/// Idle mode: navigation, list operations and mode entry
pub(super) fn handle_idle(app: &mut App, key: KeyEvent, now: DateTime<Local>) {
    if is_chord(&key) {
        return;
    }

    match key.code {
        KeyCode::Char('q') => app.should_quit = true,

        // Cursor movement
        KeyCode::Char('j') | KeyCode::Down => {
            let target = app.cursor + 1;
            move_cursor_to(app, target);
        }
        KeyCode::Char('k') | KeyCode::Up => {
            let target = app.cursor.saturating_sub(1);
            move_cursor_to(app, target);
        }
        KeyCode::Char('g') => move_cursor_to(app, 0),
        KeyCode::Char('G') => {
            let last = app.current_list().len().saturating_sub(1);
            move_cursor_to(app, last);
        }

        // Reordering
        KeyCode::Char('J') => swap_with_neighbor(app, true),
        KeyCode::Char('K') => swap_with_neighbor(app, false),
        KeyCode::Char('t') => move_to_top(app),

        // Tabs
        KeyCode::Char('h') | KeyCode::Left => {
            if let Some(view) = app.view.left() {
                app.switch_view(view);
            }
        }
        KeyCode::Char('l') | KeyCode::Right => {
            if let Some(view) = app.view.right() {
                app.switch_view(view);
            }
        }

        // Mode entry
        KeyCode::Char('a') => start_adding(app, false),
        KeyCode::Char('A') => start_adding(app, true),
        KeyCode::Char('n') => start_renaming(app),
        KeyCode::Char('e') => start_new_note(app),
        KeyCode::Enter => open_notes(app),
        KeyCode::Char('d') => {
            if app.current_todo().is_some() {
                app.mode = Mode::ConfirmingDelete;
                app.clear_status();
            }
        }

        // Moves between lists
        KeyCode::Char('x') => complete(app, now),
        KeyCode::Char('r') => match app.view {
            ListKind::Backlog => promote(app),
            ListKind::Completed => uncomplete(app),
            ListKind::Ready => {}
        },
        KeyCode::Char('u') => uncomplete(app),
        KeyCode::Char('b') => demote(app),
        KeyCode::Char('B') => backup_and_clear(app, now),
        KeyCode::Char('P') => export(app, now),

        // View toggles
        KeyCode::Char('i') => {
            if app.current_todo().is_some() {
                app.show_note = !app.show_note;
                app.clear_status();
            }
        }
        KeyCode::Char('I') => {
            app.show_all_notes = !app.show_all_notes;
            app.clear_status();
        }
        KeyCode::Char('?') => {
            app.show_help = !app.show_help;
            app.clear_status();
        }
        KeyCode::Char('p') => {
            if app.view == ListKind::Completed {
                app.prettify = !app.prettify;
                app.clear_status();
                app.reset_note_state();
                let (total, shown) = (app.lists.completed.len(), app.displayed_completed.len());
                if app.prettify && total > shown {
                    app.set_status(
                        StatusKind::Info,
                        format!("Showing all {total} completed; j/k move through the latest {shown}"),
                    );
                }
            }
        }
        KeyCode::Esc => {
            if app.show_note || app.show_all_notes || app.show_help || app.prettify {
                app.show_note = false;
                app.show_all_notes = false;
                app.show_help = false;
                app.prettify = false;
                app.clear_status();
            }
        }
        _ => {}
    }
}

fn swap_with_neighbor(app: &mut App, down: bool) {
    let kind = app.view;
    if !kind.is_ordered() {
        return;
    }
    let Ok(target) = list_ops::swap_adjacent(app.lists.get_mut(kind), app.cursor, down) else {
        return;
    };
    app.cursor = target;
    if app.save(&[kind]) {
        let text = if down { "Todo moved down" } else { "Todo moved up" };
        app.set_status(StatusKind::Success, text);
    }
}

fn move_to_top(app: &mut App) {
    let kind = app.view;
    if !kind.is_ordered() || app.cursor == 0 {
        return;
    }
    if list_ops::move_to_top(app.lists.get_mut(kind), app.cursor).is_err() {
        return;
    }
    app.cursor = 0;
    if app.save(&[kind]) {
        app.set_status(StatusKind::Success, "Todo moved to top");
    }
}

fn start_adding(app: &mut App, alternate: bool) {
    if !app.view.is_ordered() {
        return;
    }
    app.mode = Mode::Adding {
        position: app.add_position(alternate),
        input: TextInput::new(),
    };
    app.clear_status();
}

fn start_renaming(app: &mut App) {
    let Some(todo) = app.current_todo() else {
        return;
    };
    app.mode = Mode::Renaming {
        input: TextInput::with_text(&todo.text),
    };
    app.clear_status();
}

fn start_new_note(app: &mut App) {
    if app.current_todo().is_none() {
        return;
    }
    app.mode = Mode::EditingNote {
        index: None,
        input: TextInput::new(),
    };
    app.clear_status();
}

fn open_notes(app: &mut App) {
    let Some(todo) = app.current_todo() else {
        return;
    };
    if todo.notes.is_empty() {
        app.set_status(StatusKind::Info, "No notes. Press 'e' to add one.");
        return;
    }
    app.mode = Mode::NavigatingNotes { index: 0 };
    app.show_note = true;
    app.set_status(
        StatusKind::Info,
        "Note navigation (j/k to move, e to edit, d to delete, esc to exit)",
    );
}

/// Ready -> Completed, stamping the completion time
fn complete(app: &mut App, now: DateTime<Local>) {
    if app.view != ListKind::Ready || app.cursor >= app.lists.ready.len() {
        return;
    }
    let mut todo = app.lists.ready.remove(app.cursor);
    todo.completed_at = Some(now);
    tracing::debug!(id = %todo.id, "completed todo");
    app.lists.completed.push(todo);
    app.recompute_displayed();
    app.clamp_cursor();
    app.reset_note_state();
    if app.save(&[ListKind::Ready, ListKind::Completed]) {
        app.set_status(StatusKind::Success, "Todo completed!");
    }
}

/// Completed -> Ready (appended), clearing the completion time
fn uncomplete(app: &mut App) {
    if app.view != ListKind::Completed {
        return;
    }
    let Some((_, index)) = app.locate_cursor() else {
        return;
    };
    let mut todo = app.lists.completed.remove(index);
    todo.completed_at = None;
    tracing::debug!(id = %todo.id, "reopened todo");
    app.lists.ready.push(todo);
    app.recompute_displayed();
    app.clamp_cursor();
    app.reset_note_state();
    if app.save(&[ListKind::Ready, ListKind::Completed]) {
        app.set_status(StatusKind::Success, "Todo moved back to ready!");
    }
}

/// Backlog -> Ready (appended)
fn promote(app: &mut App) {
    let (from, to) = (ListKind::Backlog, ListKind::Ready);
    if transfer_cursor(app, from, to, InsertPosition::Bottom) && app.save(&[from, to]) {
        app.set_status(StatusKind::Success, "Todo moved to ready!");
    }
}

/// Ready -> Backlog (prepended)
fn demote(app: &mut App) {
    if app.view != ListKind::Ready {
        return;
    }
    let (from, to) = (ListKind::Ready, ListKind::Backlog);
    if transfer_cursor(app, from, to, InsertPosition::Top) && app.save(&[from, to]) {
        app.set_status(StatusKind::Success, "Todo moved to backlog!");
    }
}

/// Move the todo under the cursor from `from` to `to`. Returns false when
/// nothing moved.
fn transfer_cursor(app: &mut App, from: ListKind, to: ListKind, position: InsertPosition) -> bool {
    if app.view != from {
        return false;
    }
    let Some((source, dest)) = app.lists.pair_mut(from, to) else {
        return false;
    };
    if list_ops::transfer(source, app.cursor, dest, position).is_err() {
        return false;
    }
    app.clamp_cursor();
    app.reset_note_state();
    true
}

/// Archive the completed list to a dated backup, then empty it
fn backup_and_clear(app: &mut App, now: DateTime<Local>) {
    if app.view != ListKind::Completed || app.lists.completed.is_empty() {
        return;
    }
    match app.store.backup(&app.lists.completed, now.date_naive()) {
        Err(e) => app.set_status(StatusKind::Error, format!("Backup failed: {e}")),
        Ok(path) => {
            app.lists.completed.clear();
            app.recompute_displayed();
            app.cursor = 0;
            app.reset_note_state();
            if app.save(&[ListKind::Completed]) {
                let name = path
                    .file_name()
                    .map(|n| n.to_string_lossy().into_owned())
                    .unwrap_or_else(|| path.display().to_string());
                app.set_status(
                    StatusKind::Success,
                    format!("Backed up to {name} and cleared completed todos!"),
                );
            }
        }
    }
}

fn export(app: &mut App, now: DateTime<Local>) {
    if app.view != ListKind::Completed {
        return;
    }
    match export_markdown(&app.store, &app.lists.completed, now) {
        Ok(path) => {
            let name = path
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_else(|| path.display().to_string());
            app.set_status(StatusKind::Success, format!("Exported to {name}!"));
        }
        Err(e) => app.set_status(
            StatusKind::Error,
            format!("Failed to export markdown: {e}"),
        ),
    }
}
