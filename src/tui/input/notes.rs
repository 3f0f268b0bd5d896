use crossterm::event::{KeyCode, KeyEvent};

use crate::tui::app::{App, Mode};
use crate::tui::text_input::TextInput;

/// Note navigation: a secondary cursor over the notes of the todo under the
/// primary cursor. Keys without a binding here are ignored.
pub(super) fn handle_notes(app: &mut App, key: KeyEvent, index: usize) {
    let note_count = app.current_todo().map_or(0, |t| t.notes.len());

    match key.code {
        KeyCode::Char('j') | KeyCode::Down => {
            if index + 1 < note_count {
                app.mode = Mode::NavigatingNotes { index: index + 1 };
            }
            app.clear_status();
        }
        KeyCode::Char('k') | KeyCode::Up => {
            app.mode = Mode::NavigatingNotes {
                index: index.saturating_sub(1),
            };
            app.clear_status();
        }
        KeyCode::Char('d') => {
            if index < note_count {
                app.mode = Mode::ConfirmingNoteDelete { index };
                app.clear_status();
            }
        }
        KeyCode::Char('e') => {
            let Some(note) = app.current_todo().and_then(|t| t.notes.get(index)) else {
                return;
            };
            app.mode = Mode::EditingNote {
                index: Some(index),
                input: TextInput::with_text(note),
            };
            app.clear_status();
        }
        KeyCode::Esc | KeyCode::Char('q') => {
            app.mode = Mode::Idle;
            app.show_note = false;
            app.clear_status();
        }
        _ => {}
    }
}
