use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::util::unicode;

/// Single-line edit buffer with a cursor.
///
/// The cursor is a byte offset that always sits on a grapheme boundary.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextInput {
    buffer: String,
    cursor: usize,
}

impl TextInput {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-filled buffer with the cursor at the end
    pub fn with_text(text: &str) -> Self {
        TextInput {
            buffer: text.to_string(),
            cursor: text.len(),
        }
    }

    pub fn text(&self) -> &str {
        &self.buffer
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Buffer split at the cursor, for rendering
    pub fn split_at_cursor(&self) -> (&str, &str) {
        self.buffer.split_at(self.cursor)
    }

    /// Insert text at the cursor. Line breaks become spaces.
    pub fn insert_str(&mut self, text: &str) {
        let clean = text.replace("\r\n", " ").replace(['\n', '\r'], " ");
        self.buffer.insert_str(self.cursor, &clean);
        self.cursor += clean.len();
    }

    /// Apply an editing key. Returns false for keys the buffer ignores.
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Left => {
                if let Some(prev) = unicode::prev_grapheme_boundary(&self.buffer, self.cursor) {
                    self.cursor = prev;
                }
            }
            KeyCode::Right => {
                if let Some(next) = unicode::next_grapheme_boundary(&self.buffer, self.cursor) {
                    self.cursor = next;
                }
            }
            KeyCode::Home => self.cursor = 0,
            KeyCode::End => self.cursor = self.buffer.len(),
            KeyCode::Char('a') if ctrl => self.cursor = 0,
            KeyCode::Char('e') if ctrl => self.cursor = self.buffer.len(),
            KeyCode::Char('u') if ctrl => {
                self.buffer.drain(..self.cursor);
                self.cursor = 0;
            }
            KeyCode::Char('w') if ctrl => {
                let start = unicode::word_boundary_left(&self.buffer, self.cursor);
                self.buffer.drain(start..self.cursor);
                self.cursor = start;
            }
            KeyCode::Backspace => {
                if let Some(prev) = unicode::prev_grapheme_boundary(&self.buffer, self.cursor) {
                    self.buffer.drain(prev..self.cursor);
                    self.cursor = prev;
                }
            }
            KeyCode::Delete => {
                if let Some(next) = unicode::next_grapheme_boundary(&self.buffer, self.cursor) {
                    self.buffer.drain(self.cursor..next);
                }
            }
            KeyCode::Char(c)
                if !key
                    .modifiers
                    .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT | KeyModifiers::SUPER) =>
            {
                self.buffer.insert(self.cursor, c);
                self.cursor += c.len_utf8();
            }
            _ => return false,
        }
        true
    }

    /// Trimmed contents, or None when only whitespace was typed
    pub fn trimmed(&self) -> Option<&str> {
        let t = self.buffer.trim();
        (!t.is_empty()).then_some(t)
    }

    /// Todo text to commit: trimmed with the first character capitalized
    pub fn committed_text(&self) -> Option<String> {
        self.trimmed().map(unicode::capitalize_first)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    fn typed(s: &str) -> TextInput {
        let mut input = TextInput::new();
        for c in s.chars() {
            input.handle_key(key(KeyCode::Char(c)));
        }
        input
    }

    #[test]
    fn typing_appends_at_cursor() {
        let mut input = typed("milk");
        input.handle_key(key(KeyCode::Home));
        for c in "buy ".chars() {
            input.handle_key(key(KeyCode::Char(c)));
        }
        assert_eq!(input.text(), "buy milk");
        assert_eq!(input.cursor(), 4);
    }

    #[test]
    fn prefilled_cursor_at_end() {
        let input = TextInput::with_text("Write report");
        assert_eq!(input.cursor(), 12);
        assert_eq!(input.split_at_cursor(), ("Write report", ""));
    }

    #[test]
    fn arrows_stop_at_the_ends() {
        let mut input = typed("ab");
        input.handle_key(key(KeyCode::Right));
        assert_eq!(input.cursor(), 2);
        input.handle_key(key(KeyCode::Left));
        input.handle_key(key(KeyCode::Left));
        input.handle_key(key(KeyCode::Left));
        assert_eq!(input.cursor(), 0);
    }

    #[test]
    fn backspace_and_delete_remove_whole_graphemes() {
        let mut input = TextInput::with_text("cafe\u{0301}s");
        input.handle_key(key(KeyCode::Left));
        input.handle_key(key(KeyCode::Backspace));
        assert_eq!(input.text(), "cafs");
        assert_eq!(input.cursor(), 3);

        input.handle_key(key(KeyCode::Delete));
        assert_eq!(input.text(), "caf");

        input.handle_key(key(KeyCode::Delete));
        assert_eq!(input.text(), "caf");
    }

    #[test]
    fn backspace_at_start_is_noop() {
        let mut input = TextInput::with_text("x");
        input.handle_key(key(KeyCode::Home));
        input.handle_key(key(KeyCode::Backspace));
        assert_eq!(input.text(), "x");
    }

    #[test]
    fn emacs_motions() {
        let mut input = TextInput::with_text("buy more milk");
        input.handle_key(ctrl('a'));
        assert_eq!(input.cursor(), 0);
        input.handle_key(ctrl('e'));
        assert_eq!(input.cursor(), 13);

        input.handle_key(ctrl('w'));
        assert_eq!(input.text(), "buy more ");

        input.handle_key(key(KeyCode::Left));
        input.handle_key(ctrl('u'));
        assert_eq!(input.text(), " ");
        assert_eq!(input.cursor(), 0);
    }

    #[test]
    fn special_keys_are_not_inserted() {
        let mut input = typed("ok");
        for k in [
            key(KeyCode::Up),
            key(KeyCode::Down),
            key(KeyCode::PageUp),
            key(KeyCode::PageDown),
            key(KeyCode::Insert),
            key(KeyCode::F(1)),
            ctrl('k'),
            KeyEvent::new(KeyCode::Char('x'), KeyModifiers::ALT),
        ] {
            assert!(!input.handle_key(k));
        }
        assert_eq!(input.text(), "ok");
    }

    #[test]
    fn shifted_characters_insert() {
        let mut input = TextInput::new();
        input.handle_key(KeyEvent::new(KeyCode::Char('A'), KeyModifiers::SHIFT));
        assert_eq!(input.text(), "A");
    }

    #[test]
    fn paste_flattens_newlines() {
        let mut input = TextInput::with_text("[]");
        input.handle_key(key(KeyCode::Left));
        input.insert_str("one\ntwo\r\nthree");
        assert_eq!(input.text(), "[one two three]");
        assert_eq!(input.cursor(), 14);
    }

    #[test]
    fn committed_text_trims_and_capitalizes() {
        assert_eq!(
            typed("  buy milk  ").committed_text(),
            Some("Buy milk".to_string())
        );
        assert_eq!(typed("   ").committed_text(), None);
        assert_eq!(typed("  note  ").trimmed(), Some("note"));
    }
}
