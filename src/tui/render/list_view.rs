use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::model::{ListKind, Todo};
use crate::tui::app::App;
use crate::tui::theme::Theme;
use crate::tui::wrap::wrap_text;

use super::helpers::{row_timestamp, scroll_to_show};

/// Columns reserved for the cursor, timestamp and note indicator
const RESERVED_COLS: usize = 35;
const MIN_TEXT_COLS: usize = 10;

/// Render the current list: one row group per todo, expanded notes under it
pub fn render_list_view(frame: &mut Frame, app: &mut App, area: Rect) {
    let bg = app.theme.background;
    let text_width = (area.width as usize)
        .saturating_sub(RESERVED_COLS)
        .max(MIN_TEXT_COLS);

    let list = app.current_list();
    if list.is_empty() {
        app.scroll = 0;
        let line = Line::from(Span::styled(
            "  No todos",
            Style::default().fg(app.theme.cyan).bg(bg),
        ));
        frame.render_widget(Paragraph::new(line), area);
        return;
    }

    let selected_note = app.mode.note_index();
    let mut lines: Vec<Line> = Vec::new();
    let mut cursor_rows = (0, 0);

    for (i, todo) in list.iter().enumerate() {
        let is_cursor = i == app.cursor;
        let first_row = lines.len();

        push_todo_rows(&mut lines, &app.theme, app.view, todo, is_cursor, text_width);

        let notes_visible = (app.show_note && is_cursor) || app.show_all_notes;
        if notes_visible {
            let selected = if is_cursor { selected_note } else { None };
            push_note_rows(&mut lines, &app.theme, &todo.notes, selected, text_width);
        }

        if is_cursor {
            cursor_rows = (first_row, lines.len().saturating_sub(1));
        }
    }

    let height = area.height as usize;
    let scroll = scroll_to_show(app.scroll, cursor_rows.0, cursor_rows.1, height);
    let visible: Vec<Line> = lines.into_iter().skip(scroll).take(height).collect();
    app.scroll = scroll;

    frame.render_widget(
        Paragraph::new(visible).style(Style::default().bg(bg)),
        area,
    );
}

/// `  > Text [Jan 2, 15:04]`, continuation rows indented under the text
fn push_todo_rows(
    lines: &mut Vec<Line<'static>>,
    theme: &Theme,
    view: ListKind,
    todo: &Todo,
    is_cursor: bool,
    text_width: usize,
) {
    let bg = theme.background;
    let text_style = if is_cursor {
        Style::default()
            .fg(theme.text_bright)
            .bg(bg)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(theme.text).bg(bg)
    };
    let indicator = if todo.notes.is_empty() {
        String::new()
    } else {
        format!(" \u{1F4C4}\u{00D7}{}", todo.notes.len())
    };

    let wrapped = wrap_text(&todo.text, text_width);
    let last = wrapped.len().saturating_sub(1);

    for (row, segment) in wrapped.into_iter().enumerate() {
        let mut spans = Vec::new();
        if row == 0 {
            let marker = if is_cursor { ">" } else { " " };
            spans.push(Span::styled("  ", Style::default().bg(bg)));
            spans.push(Span::styled(
                marker,
                Style::default()
                    .fg(theme.highlight)
                    .bg(bg)
                    .add_modifier(Modifier::BOLD),
            ));
            spans.push(Span::styled(" ", Style::default().bg(bg)));
        } else {
            spans.push(Span::styled("     ", Style::default().bg(bg)));
        }

        spans.push(Span::styled(segment, text_style));
        if row == last && !indicator.is_empty() {
            spans.push(Span::styled(
                indicator.clone(),
                Style::default().fg(theme.yellow).bg(bg),
            ));
        }
        if row == 0 {
            spans.push(Span::styled(" ", Style::default().bg(bg)));
            spans.push(Span::styled(
                row_timestamp(todo, view),
                Style::default().fg(theme.dim).bg(bg),
            ));
        }
        lines.push(Line::from(spans));
    }
}

/// `└─ note` rows; `►` marks the selected note
fn push_note_rows(
    lines: &mut Vec<Line<'static>>,
    theme: &Theme,
    notes: &[String],
    selected: Option<usize>,
    text_width: usize,
) {
    let bg = theme.background;
    let note_style = Style::default().fg(theme.cyan).bg(bg);
    let note_width = text_width.saturating_sub(5).max(1);

    for (index, note) in notes.iter().enumerate() {
        for (row, segment) in wrap_text(note, note_width).into_iter().enumerate() {
            let spans = if row == 0 {
                let marker = if selected == Some(index) {
                    Span::styled(
                        "\u{25BA} ",
                        Style::default()
                            .fg(theme.highlight)
                            .bg(bg)
                            .add_modifier(Modifier::BOLD),
                    )
                } else {
                    Span::styled("  ", Style::default().bg(bg))
                };
                vec![
                    Span::styled("     ", Style::default().bg(bg)),
                    marker,
                    Span::styled(format!("\u{2514}\u{2500} {segment}"), note_style),
                ]
            } else {
                vec![
                    Span::styled("        ", Style::default().bg(bg)),
                    Span::styled(format!("   {segment}"), note_style),
                ]
            };
            lines.push(Line::from(spans));
        }
    }
}
