use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::model::ListKind;
use crate::tui::app::{App, Mode};
use crate::tui::text_input::TextInput;
use crate::tui::theme::Theme;
use crate::tui::wrap::wrap_text;
use crate::util::unicode::display_width;

const CARET: char = '\u{2502}';
const EDIT_HINT: &str = "(press Enter to save, Esc to cancel, arrows to navigate)";

/// Lines shown between the list and the status row: the active prompt,
/// the help block, or the help hint.
pub fn prompt_lines(app: &App, width: u16) -> Vec<Line<'static>> {
    let theme = &app.theme;
    let bg = theme.background;
    let mut lines = vec![Line::default()];

    match &app.mode {
        Mode::Adding { input, .. } => {
            input_lines(&mut lines, theme, "Add new todo:", input, width);
        }
        Mode::Renaming { input } => {
            input_lines(&mut lines, theme, "Rename todo:", input, width);
        }
        Mode::EditingNote { input, .. } => {
            input_lines(&mut lines, theme, "Edit note:", input, width);
        }
        Mode::ConfirmingDelete => {
            lines.push(indented(
                theme,
                "Are you sure you want to delete this todo? (y/n)",
                Style::default().fg(theme.red).bg(bg),
            ));
        }
        Mode::ConfirmingNoteDelete { .. } => {
            lines.push(indented(
                theme,
                "Are you sure you want to delete this note? (y/n)",
                Style::default().fg(theme.red).bg(bg),
            ));
        }
        Mode::Idle | Mode::NavigatingNotes { .. } => {
            if app.show_help {
                help_lines(&mut lines, theme, app.view);
            } else {
                lines.push(indented(
                    theme,
                    "Press ? for help",
                    Style::default().fg(theme.dim).bg(bg),
                ));
            }
        }
    }
    lines
}

pub fn render_prompt(frame: &mut Frame, app: &App, area: Rect, lines: Vec<Line<'static>>) {
    frame.render_widget(
        Paragraph::new(lines).style(Style::default().bg(app.theme.background)),
        area,
    );
}

fn indented(theme: &Theme, text: &str, style: Style) -> Line<'static> {
    Line::from(vec![
        Span::styled("  ", Style::default().bg(theme.background)),
        Span::styled(text.to_string(), style),
    ])
}

/// `  Label: text│more`, wrapped under the text, then the key hint
fn input_lines(
    lines: &mut Vec<Line<'static>>,
    theme: &Theme,
    label: &str,
    input: &TextInput,
    width: u16,
) {
    let bg = theme.background;
    let (before, after) = input.split_at_cursor();
    let with_caret = format!("{before}{CARET}{after}");

    let indent = 2 + display_width(label) + 1;
    let text_width = (width as usize).saturating_sub(indent + 2).max(10);
    for (row, segment) in wrap_text(&with_caret, text_width).into_iter().enumerate() {
        let mut spans = if row == 0 {
            vec![
                Span::styled("  ", Style::default().bg(bg)),
                Span::styled(
                    label.to_string(),
                    Style::default()
                        .fg(theme.cyan)
                        .bg(bg)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled(" ", Style::default().bg(bg)),
            ]
        } else {
            vec![Span::styled(" ".repeat(indent), Style::default().bg(bg))]
        };
        spans.extend(caret_spans(theme, &segment));
        lines.push(Line::from(spans));
    }

    lines.push(indented(
        theme,
        EDIT_HINT,
        Style::default().fg(theme.dim).bg(bg),
    ));
}

/// Split a wrapped segment around the caret so it can be colored
fn caret_spans(theme: &Theme, segment: &str) -> Vec<Span<'static>> {
    let bg = theme.background;
    let text_style = Style::default().fg(theme.text_bright).bg(bg);
    match segment.split_once(CARET) {
        Some((left, right)) => vec![
            Span::styled(left.to_string(), text_style),
            Span::styled(
                CARET.to_string(),
                Style::default().fg(theme.highlight).bg(bg),
            ),
            Span::styled(right.to_string(), text_style),
        ],
        None => vec![Span::styled(segment.to_string(), text_style)],
    }
}

fn help_lines(lines: &mut Vec<Line<'static>>, theme: &Theme, view: ListKind) {
    let bg = theme.background;
    let command = Style::default().fg(theme.blue).bg(bg);

    lines.push(indented(
        theme,
        "Commands:",
        Style::default()
            .fg(theme.blue)
            .bg(bg)
            .add_modifier(Modifier::BOLD),
    ));
    lines.push(indented(
        theme,
        "j/k: down/up  g/G: top/bottom  J/K: reorder  t: move to top  h/l: switch views",
        command,
    ));
    let per_view = match view {
        ListKind::Completed => {
            "d: delete  u: undo complete  p: by week  P: export  B: backup and clear"
        }
        ListKind::Ready => "a/A: add bottom/top  d: delete  x: mark complete  b: move to backlog",
        ListKind::Backlog => "a/A: add bottom/top  d: delete  r: move to ready",
    };
    lines.push(indented(theme, per_view, command));
    lines.push(indented(
        theme,
        "i/I: note/all notes  e: add note  enter: notes  n: rename  ?: help  q: quit",
        command,
    ));
}
