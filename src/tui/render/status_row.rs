use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::app::{App, StatusKind};
use crate::util::unicode::truncate_to_width;

use super::helpers::spans_width;

/// Render the status row (bottom of screen): the last status message on the
/// left, the cursor position on the right.
pub fn render_status_row(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;
    let width = area.width as usize;

    let mut spans = vec![Span::styled("  ", Style::default().bg(bg))];
    if let Some(status) = &app.status {
        let color = match status.kind {
            StatusKind::Success => app.theme.green,
            StatusKind::Error => app.theme.red,
            StatusKind::Info => app.theme.cyan,
        };
        spans.push(Span::styled(
            truncate_to_width(&status.text, width.saturating_sub(2)),
            Style::default().fg(color).bg(bg),
        ));
    }

    let len = app.current_list().len();
    if len > 0 {
        let position = format!("{}/{} ", app.cursor + 1, len);
        let content_width = spans_width(&spans);
        let position_width = position.chars().count();
        if content_width + position_width < width {
            let padding = width - content_width - position_width;
            spans.push(Span::styled(" ".repeat(padding), Style::default().bg(bg)));
            spans.push(Span::styled(
                position,
                Style::default().fg(app.theme.dim).bg(bg),
            ));
        }
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
