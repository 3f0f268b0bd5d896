mod common;
mod confirm;
mod edit;
mod navigate;
mod notes;

use chrono::{DateTime, Local};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::app::{App, Mode};

use common::normalize_key;
use confirm::{handle_confirm_delete, handle_confirm_note_delete};
use edit::handle_text;
use navigate::handle_idle;
use notes::handle_notes;

/// Handle a key event in the current mode
pub fn handle_key(app: &mut App, key: KeyEvent) {
    handle_key_at(app, key, Local::now());
}

/// Handle a key event with an explicit clock. Every timestamp a transition
/// stamps (creation, completion, backup date) is `now`.
pub fn handle_key_at(app: &mut App, key: KeyEvent, now: DateTime<Local>) {
    // Ignore bare modifier key presses (Shift, Ctrl, Alt, etc.)
    if matches!(key.code, KeyCode::Modifier(_)) {
        return;
    }

    // Interrupt quits from any mode; every change is already on disk
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        app.should_quit = true;
        return;
    }

    let key = normalize_key(key);
    match &app.mode {
        Mode::Idle => handle_idle(app, key, now),
        Mode::Adding { .. } | Mode::Renaming { .. } | Mode::EditingNote { .. } => {
            handle_text(app, key, now)
        }
        Mode::ConfirmingDelete => handle_confirm_delete(app, key),
        &Mode::ConfirmingNoteDelete { index } => handle_confirm_note_delete(app, key, index),
        &Mode::NavigatingNotes { index } => handle_notes(app, key, index),
    }
}

/// Handle a bracketed paste event (terminal sends pasted text as a single string).
/// Only text modes take it; newlines become spaces.
pub fn handle_paste(app: &mut App, text: &str) {
    if text.is_empty() {
        return;
    }
    if let Some(input) = app.mode.input_mut() {
        input.insert_str(text);
    }
}
