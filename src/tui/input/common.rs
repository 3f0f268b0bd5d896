use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::tui::app::App;

/// Fold Shift+letter into the uppercase character.
///
/// Terminals using the kitty keyboard protocol report `Shift+j` as `j` with
/// SHIFT set, where legacy terminals send `J`. Shift+/ becomes `?`.
pub(super) fn normalize_key(mut key: KeyEvent) -> KeyEvent {
    if let KeyCode::Char(c) = key.code
        && key.modifiers.contains(KeyModifiers::SHIFT)
    {
        if c.is_ascii_lowercase() {
            key.code = KeyCode::Char(c.to_ascii_uppercase());
        } else if c == '/' {
            key.code = KeyCode::Char('?');
            key.modifiers.remove(KeyModifiers::SHIFT);
        }
    }
    key
}

/// True for Ctrl/Alt/Super chords, which no idle binding uses
pub(super) fn is_chord(key: &KeyEvent) -> bool {
    key.modifiers
        .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT | KeyModifiers::SUPER)
}

/// Move the primary cursor, clamped to the current list. Leaves note
/// navigation, hides the single note, and clears the status line.
pub(super) fn move_cursor_to(app: &mut App, target: usize) {
    app.cursor = target;
    app.clamp_cursor();
    app.clear_status();
    app.reset_note_state();
}
